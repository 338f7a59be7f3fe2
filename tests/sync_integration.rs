//! 同期の統合テスト
//!
//! 一時ディレクトリにリソースツリーを作り、`run` を通して確認する。

use std::fs;
use std::path::{Path, PathBuf};
use strings_sync::{run, ErrorCode, StringsTable, SyncConfig, SyncReport, TargetOutcome};
use tempfile::TempDir;

const STRINGS: &str = "Localizable.strings";

/// ヘルパー: ロケールディレクトリと .strings を作成
fn write_locale(root: &Path, locale: &str, content: Option<&str>) -> PathBuf {
    let dir = root.join(locale);
    fs::create_dir_all(&dir).unwrap();
    let file = dir.join(STRINGS);
    if let Some(content) = content {
        fs::write(&file, content).unwrap();
    }
    file
}

/// ヘルパー: 同期を実行して結果と出力行を返す
fn sync(root: &TempDir) -> (SyncReport, Vec<String>) {
    let config = SyncConfig::default().with_resources_root(root.path());
    let mut out = Vec::new();
    let report = run(&config, &mut out).unwrap();
    let lines = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    (report, lines)
}

#[test]
fn test_fills_empty_target() {
    let root = tempfile::tempdir().unwrap();
    write_locale(root.path(), "en.lproj", Some("\"greeting\" = \"Hello\";\n"));
    let fr = write_locale(root.path(), "fr.lproj", Some(""));

    let (report, lines) = sync(&root);

    assert_eq!(report.base_keys, 1);
    assert_eq!(report.outcome_of("fr.lproj"), Some(TargetOutcome::Added(1)));
    assert_eq!(
        fs::read_to_string(&fr).unwrap(),
        "\n\n// === Auto-filled missing keys (copied from en; translate as needed) ===\n\
         \"greeting\" = \"Hello\";\n"
    );
    assert_eq!(
        lines,
        vec![
            "Base keys: 1  |  Targets: 1",
            "- fr.lproj: added 1 missing keys",
            "Done.",
        ]
    );
}

#[test]
fn test_translated_target_already_in_sync() {
    let root = tempfile::tempdir().unwrap();
    write_locale(root.path(), "en.lproj", Some("\"a\" = \"1\";\n\"b\" = \"2\";\n"));
    let original = "\"a\" = \"uno\";\n\"b\" = \"dos\";\n";
    let es = write_locale(root.path(), "es.lproj", Some(original));

    let (report, lines) = sync(&root);

    assert_eq!(report.outcome_of("es.lproj"), Some(TargetOutcome::InSync));
    assert_eq!(report.total_added(), 0);
    assert_eq!(fs::read_to_string(&es).unwrap(), original);
    assert_eq!(lines[1], "- es.lproj: already in sync");
}

#[test]
fn test_second_run_adds_nothing() {
    let root = tempfile::tempdir().unwrap();
    write_locale(
        root.path(),
        "en.lproj",
        Some("/* Menu */\n\"menu.capture\" = \"Capture\";\n\"menu.quit\" = \"Quit \\\"now\\\"\";\n"),
    );
    let de = write_locale(root.path(), "de.lproj", Some("\"menu.capture\" = \"Aufnehmen\";\n"));
    let ja = write_locale(root.path(), "ja.lproj", Some("// 空\n"));

    let (first, _) = sync(&root);
    assert_eq!(first.outcome_of("de.lproj"), Some(TargetOutcome::Added(1)));
    assert_eq!(first.outcome_of("ja.lproj"), Some(TargetOutcome::Added(2)));
    let de_after_first = fs::read_to_string(&de).unwrap();
    let ja_after_first = fs::read_to_string(&ja).unwrap();

    let (second, lines) = sync(&root);
    assert_eq!(second.total_added(), 0);
    assert_eq!(fs::read_to_string(&de).unwrap(), de_after_first);
    assert_eq!(fs::read_to_string(&ja).unwrap(), ja_after_first);
    assert!(lines.iter().any(|l| l == "- de.lproj: already in sync"));
    assert!(lines.iter().any(|l| l == "- ja.lproj: already in sync"));

    // 追記された値は基準と同じ表記で読み戻せる
    let ja_table = StringsTable::parse(&ja_after_first);
    assert_eq!(ja_table.get("menu.quit"), Some("Quit \\\"now\\\""));
}

#[test]
fn test_existing_content_precedes_block() {
    let root = tempfile::tempdir().unwrap();
    write_locale(root.path(), "en.lproj", Some("\"x\" = \"X\";\n\"z\" = \"Z\";\n"));
    let it = write_locale(root.path(), "it.lproj", Some("\"x\" = \"y\";"));

    sync(&root);

    let content = fs::read_to_string(&it).unwrap();
    assert!(content.starts_with("\"x\" = \"y\";"));
    let block_at = content.find("// === Auto-filled").unwrap();
    assert!(block_at > content.find("\"x\" = \"y\";").unwrap());
    assert!(content[block_at..].contains("\"z\" = \"Z\";\n"));
    assert!(!content.contains("\"x\" = \"X\";"));
}

#[test]
fn test_missing_target_file_is_skipped() {
    let root = tempfile::tempdir().unwrap();
    write_locale(root.path(), "en.lproj", Some("\"a\" = \"1\";"));
    let ko = write_locale(root.path(), "ko.lproj", None);
    write_locale(root.path(), "sv.lproj", Some(""));

    let (report, lines) = sync(&root);

    assert_eq!(report.outcome_of("ko.lproj"), Some(TargetOutcome::Skipped));
    assert_eq!(report.outcome_of("sv.lproj"), Some(TargetOutcome::Added(1)));
    assert!(!ko.exists());
    assert_eq!(lines[0], "Base keys: 1  |  Targets: 2");
    assert!(lines[1].starts_with("- Skip (missing file): "));
    assert!(lines[1].ends_with(STRINGS));
    assert_eq!(lines.last().map(String::as_str), Some("Done."));
}

#[test]
fn test_targets_processed_in_name_order() {
    let root = tempfile::tempdir().unwrap();
    write_locale(root.path(), "en.lproj", Some("\"a\" = \"1\";"));
    for locale in ["zh-Hant.lproj", "de.lproj", "fr.lproj"] {
        write_locale(root.path(), locale, Some("\"a\" = \"x\";"));
    }
    // .lproj以外は対象外
    fs::create_dir(root.path().join("Fonts")).unwrap();

    let (report, lines) = sync(&root);

    let locales: Vec<&str> = report.targets.iter().map(|t| t.locale.as_str()).collect();
    assert_eq!(locales, vec!["de.lproj", "fr.lproj", "zh-Hant.lproj"]);
    assert_eq!(lines.len(), 5);
}

#[test]
fn test_missing_base_aborts() {
    let root = tempfile::tempdir().unwrap();
    let fr = write_locale(root.path(), "fr.lproj", Some(""));

    let config = SyncConfig::default().with_resources_root(root.path());
    let mut out = Vec::new();
    let err = run(&config, &mut out).unwrap_err();

    assert_eq!(err.code(), ErrorCode::E0101);
    assert!(err.full().contains(STRINGS));
    assert!(out.is_empty());
    assert_eq!(fs::read_to_string(&fr).unwrap(), "");
}

#[test]
fn test_unreadable_target_aborts_after_earlier_appends() {
    let root = tempfile::tempdir().unwrap();
    write_locale(root.path(), "en.lproj", Some("\"a\" = \"1\";"));
    let de = write_locale(root.path(), "de.lproj", Some(""));
    // UTF-8として読めない内容
    let fr = write_locale(root.path(), "fr.lproj", None);
    fs::write(&fr, [0xffu8, 0xfe]).unwrap();

    let config = SyncConfig::default().with_resources_root(root.path());
    let mut out = Vec::new();
    let err = run(&config, &mut out).unwrap_err();

    assert_eq!(err.code(), ErrorCode::E0501);
    assert_eq!(err.path(), Some(fr.as_path()));
    assert!(err.full().contains("  = note: "));

    // 先に処理したdeへの追記は残る
    let de_content = fs::read_to_string(&de).unwrap();
    assert!(de_content.contains("// === Auto-filled"));
    assert!(de_content.contains("\"a\" = \"1\";\n"));
    assert_eq!(fs::read(&fr).unwrap(), vec![0xffu8, 0xfe]);

    let lines: Vec<String> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    assert_eq!(
        lines,
        vec![
            "Base keys: 1  |  Targets: 2",
            "- de.lproj: added 1 missing keys",
        ]
    );
}

#[test]
fn test_custom_base_locale() {
    let root = tempfile::tempdir().unwrap();
    write_locale(root.path(), "Base.lproj", Some("\"title\" = \"Title\";"));
    let en = write_locale(root.path(), "en.lproj", Some(""));

    let config = SyncConfig::default()
        .with_resources_root(root.path())
        .with_base_locale("Base.lproj");
    let mut out = Vec::new();
    let report = run(&config, &mut out).unwrap();

    assert_eq!(report.outcome_of("en.lproj"), Some(TargetOutcome::Added(1)));
    assert!(fs::read_to_string(&en)
        .unwrap()
        .contains("(copied from Base; translate as needed)"));
}

#[test]
fn test_duplicate_keys_in_target_are_left_alone() {
    let root = tempfile::tempdir().unwrap();
    write_locale(root.path(), "en.lproj", Some("\"a\" = \"1\";"));
    let original = "\"a\" = \"first\";\n\"a\" = \"second\";\n";
    let nb = write_locale(root.path(), "nb.lproj", Some(original));

    let (report, _) = sync(&root);

    assert_eq!(report.outcome_of("nb.lproj"), Some(TargetOutcome::InSync));
    assert_eq!(fs::read_to_string(&nb).unwrap(), original);
}
