//! アプリケーション全体で使用される定数
//!
//! デフォルトのパスや名前、環境変数名をここに集約します。

/// リソース配置のデフォルト値
pub mod defaults {
    /// ロケールディレクトリを含むリソースルート（カレントディレクトリ基準）
    pub const RESOURCES_ROOT: &str = "VibeCapture/Resources";
    /// 基準ロケールのディレクトリ名
    pub const BASE_LOCALE: &str = "en.lproj";
    /// 各ロケールディレクトリ内のファイル名
    pub const STRINGS_FILE: &str = "Localizable.strings";
    /// ロケールディレクトリの接尾辞
    pub const LOCALE_SUFFIX: &str = ".lproj";
}

/// 設定ファイル名（カレントディレクトリから探す）
pub const CONFIG_FILE_NAME: &str = "strings-sync.toml";

/// 環境変数
pub mod env {
    /// メッセージ言語（LANGより優先）
    pub const LANG: &str = "STRINGS_SYNC_LANG";
    /// ログレベル（debug / info / warn / error）
    pub const LOG: &str = "STRINGS_SYNC_LOG";
}

/// 追記ブロックの見出しコメント
///
/// `{0}` は基準ロケール名（接尾辞なし）に置換される。
/// ファイルに書き込む内容なので翻訳しない。
pub const AUTO_FILL_MARKER: &str =
    "// === Auto-filled missing keys (copied from {0}; translate as needed) ===";
