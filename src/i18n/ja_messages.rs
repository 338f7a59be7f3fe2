use super::msg_key::MsgKey;
use super::msg_key::MsgKey::*;
use super::ui_msg::UiMsg;
use std::collections::HashMap;
use std::sync::LazyLock;

/// 日本語エラーメッセージ
pub static JA_MSGS: LazyLock<HashMap<MsgKey, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // 前提条件
        (BaseFileNotFound, "基準ファイルが見つかりません: {0}"),
        (
            BaseFileHelp,
            "{0} に {1}/{2} があるか確認するか、resources-root を正しいディレクトリに設定してください",
        ),
        // 設定
        (ConfigReadFailed, "{0} の読み込みに失敗: {1}"),
        (ConfigParseFailed, "{0} のパースに失敗: {1}"),
        (InvalidLocalePattern, "ロケールディレクトリのパターンが不正です {0}: {1}"),
        // I/O
        (FileReadFailed, "{0} の読み込みに失敗: {1}"),
        (NotUtf8Note, ".strings はUTF-8として読み込みます。UTF-8で保存し直してください"),
        (FileAppendFailed, "{0} への追記に失敗: {1}"),
        (DirListFailed, "{0} の一覧取得に失敗: {1}"),
    ])
});

/// 日本語UIメッセージ
///
/// 進捗行はスクリプトから解析されることがあるため英語のまま（enにフォールバック）。
pub static JA_UI_MSGS: LazyLock<HashMap<UiMsg, &'static str>> = LazyLock::new(|| {
    use UiMsg::*;
    HashMap::from([
        // 設定
        (ConfigLoaded, "設定ファイルを使用: {0}"),
        (ConfigDefault, "{0} が無いためデフォルト設定を使用"),
    ])
});
