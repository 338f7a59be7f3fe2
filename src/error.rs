//! 同期処理のエラー
//!
//! 構造化されたエラー情報を提供し、以下をサポート：
//! - エラーコードによる分類
//! - 対象ファイルのパス
//! - 補足（note）と解決のヒント（help）

use crate::i18n::{fmt_msg, MsgKey};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// エラーコード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // 01xx: 設定・前提条件
    E0101, // 基準ファイルが存在しない
    E0102, // 設定ファイルが不正
    E0103, // ロケールディレクトリのパターンが不正

    // 05xx: I/Oエラー
    E0501, // ファイル読み込みエラー
    E0502, // ファイル追記エラー
    E0503, // ディレクトリエラー

    // 99xx: 汎用エラー
    E9999, // 分類されていないエラー
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// 構造化されたエラー情報
#[derive(Debug, Clone)]
pub struct SyncError {
    /// エラーコード
    code: ErrorCode,
    /// メインメッセージ（1行）
    message: String,
    /// 関係するファイル・ディレクトリ
    path: Option<PathBuf>,
    /// 詳細な説明（note）
    notes: Vec<String>,
    /// 解決のヒント（help）
    help: Vec<String>,
}

impl SyncError {
    /// 新しいエラーを作成
    pub fn new<S: Into<String>>(code: ErrorCode, message: S) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
            notes: Vec::new(),
            help: Vec::new(),
        }
    }

    /// パスを追加
    pub fn with_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.path = Some(path.into());
        self
    }

    /// noteを追加
    pub fn with_note<S: Into<String>>(mut self, note: S) -> Self {
        self.notes.push(note.into());
        self
    }

    /// helpを追加
    pub fn with_help<S: Into<String>>(mut self, help: S) -> Self {
        self.help.push(help.into());
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// 完全な詳細情報（CLI用）
    pub fn full(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("error[{}]: {}\n", self.code, self.message));

        if let Some(path) = &self.path {
            output.push_str(&format!("  --> {}\n", path.display()));
        }

        for note in &self.notes {
            output.push_str(&format!("  = note: {}\n", note));
        }
        for help_text in &self.help {
            output.push_str(&format!("  = help: {}\n", help_text));
        }

        output
    }
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full())
    }
}

impl From<String> for SyncError {
    fn from(msg: String) -> SyncError {
        SyncError::new(ErrorCode::E9999, msg)
    }
}

impl std::error::Error for SyncError {}

// ========================================
// エラー構築ヘルパー関数
// ========================================

fn shown(path: &Path) -> String {
    dunce::simplified(path).display().to_string()
}

impl SyncError {
    /// 基準ファイルが無い（実行全体を中断する）
    pub fn base_missing(
        base_file: &Path,
        resources_root: &Path,
        base_locale: &str,
        strings_file: &str,
    ) -> Self {
        SyncError::new(
            ErrorCode::E0101,
            fmt_msg(MsgKey::BaseFileNotFound, &[&shown(base_file)]),
        )
        .with_path(base_file)
        .with_help(fmt_msg(
            MsgKey::BaseFileHelp,
            &[&shown(resources_root), base_locale, strings_file],
        ))
    }

    /// 設定ファイルの読み込み失敗
    pub fn config_read(path: &Path, err: &io::Error) -> Self {
        SyncError::new(
            ErrorCode::E0102,
            fmt_msg(MsgKey::ConfigReadFailed, &[&shown(path), &err.to_string()]),
        )
        .with_path(path)
    }

    /// 設定ファイルのパース失敗
    pub fn config_parse(path: &Path, detail: &str) -> Self {
        SyncError::new(
            ErrorCode::E0102,
            fmt_msg(MsgKey::ConfigParseFailed, &[&shown(path), detail]),
        )
        .with_path(path)
    }

    /// ロケール列挙パターンの不正
    pub fn invalid_pattern(pattern: &str, detail: &str) -> Self {
        SyncError::new(
            ErrorCode::E0103,
            fmt_msg(MsgKey::InvalidLocalePattern, &[pattern, detail]),
        )
    }

    /// ファイル読み込みエラー
    ///
    /// UTF-8として読めない場合はnoteを付ける。
    pub fn read_failed(path: &Path, err: &io::Error) -> Self {
        let error = SyncError::new(
            ErrorCode::E0501,
            fmt_msg(MsgKey::FileReadFailed, &[&shown(path), &err.to_string()]),
        )
        .with_path(path);

        if err.kind() == io::ErrorKind::InvalidData {
            error.with_note(fmt_msg(MsgKey::NotUtf8Note, &[]))
        } else {
            error
        }
    }

    /// 追記エラー
    pub fn append_failed(path: &Path, err: &io::Error) -> Self {
        SyncError::new(
            ErrorCode::E0502,
            fmt_msg(MsgKey::FileAppendFailed, &[&shown(path), &err.to_string()]),
        )
        .with_path(path)
    }

    /// ディレクトリ一覧の取得エラー
    pub fn dir_failed(path: &Path, err: &io::Error) -> Self {
        SyncError::new(
            ErrorCode::E0503,
            fmt_msg(MsgKey::DirListFailed, &[&shown(path), &err.to_string()]),
        )
        .with_path(path)
    }
}
