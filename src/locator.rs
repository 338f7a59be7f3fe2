//! 基準ファイルと対象ロケールの探索
//!
//! リソースルート直下の `*<接尾辞>` ディレクトリを列挙します。
//! ファイルの存在確認は呼び出し側で行う（基準が無ければ致命的、対象が無ければスキップ）。

use crate::config::SyncConfig;
use crate::error::SyncError;
use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::{Path, PathBuf};

/// 対象ロケールのディレクトリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDir {
    /// ディレクトリ名（例: fr.lproj）
    pub name: String,
    /// ディレクトリ内の .strings ファイル（存在するとは限らない）
    pub strings_file: PathBuf,
}

impl LocaleDir {
    pub fn has_strings_file(&self) -> bool {
        self.strings_file.is_file()
    }
}

pub struct Locator<'a> {
    config: &'a SyncConfig,
}

impl<'a> Locator<'a> {
    pub fn new(config: &'a SyncConfig) -> Self {
        Locator { config }
    }

    pub fn resources_root(&self) -> &Path {
        &self.config.resources_root
    }

    /// 基準ファイルのパス（存在確認はしない）
    pub fn base_file(&self) -> PathBuf {
        self.config.base_file()
    }

    /// ロケールディレクトリ名のパターン（`*.lproj`）
    fn locale_pattern(&self) -> Result<Pattern, SyncError> {
        let source = format!("*{}", Pattern::escape(&self.config.locale_suffix));
        Pattern::new(&source).map_err(|e| SyncError::invalid_pattern(&source, &e.to_string()))
    }

    /// 基準以外のロケールディレクトリを名前順に列挙
    pub fn targets(&self) -> Result<Vec<LocaleDir>, SyncError> {
        let root = self.resources_root();
        let pattern = self.locale_pattern()?;
        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: false,
        };

        let mut targets = Vec::new();
        for entry in fs::read_dir(root).map_err(|e| SyncError::dir_failed(root, &e))? {
            let entry = entry.map_err(|e| SyncError::dir_failed(root, &e))?;
            let name = entry.file_name().to_string_lossy().into_owned();

            if name == self.config.base_locale || !pattern.matches_with(&name, options) {
                continue;
            }

            let dir = entry.path();
            if !dir.is_dir() {
                continue;
            }

            targets.push(LocaleDir {
                strings_file: dir.join(&self.config.strings_file),
                name,
            });
        }

        targets.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(targets)
    }
}
