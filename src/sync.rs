//! 同期の実行
//!
//! 探索 → 基準のパース → 対象ごとの同期 → 集計 の順に1回だけ流します。
//! 対象は名前順に1つずつ処理し、進捗行を `out` に書きます。

use crate::config::SyncConfig;
use crate::error::SyncError;
use crate::i18n::{fmt_ui_msg, ui_msg, UiMsg};
use crate::locator::{LocaleDir, Locator};
use crate::log;
use crate::parser::StringsTable;
use crate::writer::SyncWriter;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// 対象1件の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetOutcome {
    /// .strings ファイルが無い
    Skipped,
    /// 不足キーなし
    InSync,
    /// 追記したキー数
    Added(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetReport {
    /// ロケールディレクトリ名
    pub locale: String,
    pub path: PathBuf,
    pub outcome: TargetOutcome,
}

/// 1回の実行結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub base_keys: usize,
    pub targets: Vec<TargetReport>,
}

impl SyncReport {
    /// 全対象に追記したキーの合計
    pub fn total_added(&self) -> usize {
        self.targets
            .iter()
            .map(|t| match t.outcome {
                TargetOutcome::Added(n) => n,
                _ => 0,
            })
            .sum()
    }

    pub fn outcome_of(&self, locale: &str) -> Option<TargetOutcome> {
        self.targets
            .iter()
            .find(|t| t.locale == locale)
            .map(|t| t.outcome)
    }
}

fn read_text(path: &Path) -> Result<String, SyncError> {
    fs::read_to_string(path).map_err(|e| SyncError::read_failed(path, &e))
}

fn report_line<W: Write>(out: &mut W, line: &str) -> Result<(), SyncError> {
    writeln!(out, "{}", line).map_err(|e| SyncError::from(e.to_string()))
}

/// 対象1件を同期する
fn sync_target(writer: &SyncWriter<'_>, target: &LocaleDir) -> Result<TargetOutcome, SyncError> {
    if !target.has_strings_file() {
        return Ok(TargetOutcome::Skipped);
    }

    let existing = StringsTable::parse(&read_text(&target.strings_file)?);
    log::debug(format_args!(
        "{}: {} keys",
        target.strings_file.display(),
        existing.len()
    ));

    match writer.append_missing(&target.strings_file, &existing)? {
        0 => Ok(TargetOutcome::InSync),
        n => Ok(TargetOutcome::Added(n)),
    }
}

/// 同期を実行する
///
/// 基準ファイルが無ければ対象に触れずにエラーを返す。
/// I/Oエラーはその時点で中断する（それまでの追記は残る）。
pub fn run<W: Write>(config: &SyncConfig, out: &mut W) -> Result<SyncReport, SyncError> {
    let locator = Locator::new(config);
    let base_file = locator.base_file();

    if !base_file.is_file() {
        return Err(SyncError::base_missing(
            &base_file,
            locator.resources_root(),
            &config.base_locale,
            &config.strings_file,
        ));
    }

    let base = StringsTable::parse(&read_text(&base_file)?);
    log::debug(format_args!(
        "base {}: {} keys",
        base_file.display(),
        base.len()
    ));

    let targets = locator.targets()?;
    log::debug(format_args!("{} target locale directories", targets.len()));

    report_line(
        out,
        &fmt_ui_msg(
            UiMsg::SyncSummary,
            &[&base.len().to_string(), &targets.len().to_string()],
        ),
    )?;

    let writer = SyncWriter::new(&base, config.base_locale_name());
    let mut report = SyncReport {
        base_keys: base.len(),
        targets: Vec::with_capacity(targets.len()),
    };

    for target in targets {
        let outcome = sync_target(&writer, &target)?;

        let line = match outcome {
            TargetOutcome::Skipped => fmt_ui_msg(
                UiMsg::TargetSkipped,
                &[&dunce::simplified(&target.strings_file).display().to_string()],
            ),
            TargetOutcome::InSync => fmt_ui_msg(UiMsg::TargetInSync, &[&target.name]),
            TargetOutcome::Added(n) => {
                fmt_ui_msg(UiMsg::TargetAdded, &[&target.name, &n.to_string()])
            }
        };
        report_line(out, &line)?;

        report.targets.push(TargetReport {
            locale: target.name,
            path: target.strings_file,
            outcome,
        });
    }

    report_line(out, ui_msg(UiMsg::SyncDone))?;
    Ok(report)
}
