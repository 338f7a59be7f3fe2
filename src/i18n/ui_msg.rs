/// UIメッセージキー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiMsg {
    // 同期の進捗
    SyncSummary,    // Base keys: {0}  |  Targets: {1}
    TargetSkipped,  // - Skip (missing file): {0}
    TargetInSync,   // - {0}: already in sync
    TargetAdded,    // - {0}: added {1} missing keys
    SyncDone,       // Done.

    // 設定
    ConfigLoaded,   // using config {0}
    ConfigDefault,  // no {0} found, using defaults
}
