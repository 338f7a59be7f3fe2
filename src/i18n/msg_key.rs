/// エラーメッセージキー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MsgKey {
    // 前提条件
    BaseFileNotFound,   // Base file not found: {0}
    BaseFileHelp,       // check that {0} contains {1}/{2}

    // 設定
    ConfigReadFailed,   // failed to read {0}: {1}
    ConfigParseFailed,  // failed to parse {0}: {1}
    InvalidLocalePattern, // invalid locale directory pattern {0}: {1}

    // I/O
    FileReadFailed,     // failed to read {0}: {1}
    NotUtf8Note,        // .strings files are read as UTF-8
    FileAppendFailed,   // failed to append to {0}: {1}
    DirListFailed,      // failed to list {0}: {1}
}
