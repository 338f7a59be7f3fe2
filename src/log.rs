//! 診断ログ
//!
//! 進捗行（stdout）とは別に、stderrへタイムスタンプ付きで出力します。
//! レベルは `STRINGS_SYNC_LOG` 環境変数で指定（デフォルト: warn）。

use crate::constants;
use chrono::Local;
use parking_lot::RwLock;
use std::fmt::Arguments;
use std::sync::LazyLock;

/// ログレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl LogLevel {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

/// ログ設定
struct LogConfig {
    level: LogLevel,
}

static LOG_CONFIG: LazyLock<RwLock<LogConfig>> = LazyLock::new(|| {
    RwLock::new(LogConfig {
        level: LogLevel::Warn,
    })
});

/// 環境変数からレベルを設定
///
/// 未設定・不明な値の場合は現在のレベルを維持する。
pub fn init_from_env() {
    if let Some(level) = std::env::var(constants::env::LOG)
        .ok()
        .as_deref()
        .and_then(LogLevel::parse)
    {
        set_level(level);
    }
}

pub fn set_level(level: LogLevel) {
    LOG_CONFIG.write().level = level;
}

pub fn enabled(level: LogLevel) -> bool {
    level >= LOG_CONFIG.read().level
}

/// 1行分のテキストを組み立てる
fn format_line(level: LogLevel, message: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%z");
    format!("[{}] {} {}", timestamp, level.as_str(), message)
}

/// ログ出力の内部実装
pub fn log(level: LogLevel, args: Arguments<'_>) {
    if !enabled(level) {
        return;
    }
    eprintln!("{}", format_line(level, &args.to_string()));
}

pub fn debug(args: Arguments<'_>) {
    log(LogLevel::Debug, args);
}

pub fn info(args: Arguments<'_>) {
    log(LogLevel::Info, args);
}
