use super::msg_key::MsgKey;
use super::msg_key::MsgKey::*;
use super::ui_msg::UiMsg;
use std::collections::HashMap;
use std::sync::LazyLock;

/// 英語エラーメッセージ
pub static EN_MSGS: LazyLock<HashMap<MsgKey, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // 前提条件
        (BaseFileNotFound, "Base file not found: {0}"),
        (
            BaseFileHelp,
            "check that {0} contains {1}/{2}, or point resources-root at the right directory",
        ),
        // 設定
        (ConfigReadFailed, "failed to read {0}: {1}"),
        (ConfigParseFailed, "failed to parse {0}: {1}"),
        (InvalidLocalePattern, "invalid locale directory pattern {0}: {1}"),
        // I/O
        (FileReadFailed, "failed to read {0}: {1}"),
        (NotUtf8Note, ".strings files are read as UTF-8; re-save the file in UTF-8"),
        (FileAppendFailed, "failed to append to {0}: {1}"),
        (DirListFailed, "failed to list {0}: {1}"),
    ])
});

/// 英語UIメッセージ
pub static EN_UI_MSGS: LazyLock<HashMap<UiMsg, &'static str>> = LazyLock::new(|| {
    use UiMsg::*;
    HashMap::from([
        // 同期の進捗
        (SyncSummary, "Base keys: {0}  |  Targets: {1}"),
        (TargetSkipped, "- Skip (missing file): {0}"),
        (TargetInSync, "- {0}: already in sync"),
        (TargetAdded, "- {0}: added {1} missing keys"),
        (SyncDone, "Done."),
        // 設定
        (ConfigLoaded, "using config {0}"),
        (ConfigDefault, "no {0} found, using defaults"),
    ])
});
