//! 同期設定（strings-sync.toml）
//!
//! リソースルートや基準ロケールなどの固定値をまとめた構造体です。
//! すべての項目にデフォルト値があり、設定ファイルは省略できます。

use crate::constants::{self, defaults};
use crate::error::SyncError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 同期設定
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct SyncConfig {
    /// ロケールディレクトリを含むディレクトリ
    pub resources_root: PathBuf,
    /// 基準ロケールのディレクトリ名（例: en.lproj）
    pub base_locale: String,
    /// 各ロケールディレクトリ内のファイル名（例: Localizable.strings）
    pub strings_file: String,
    /// ロケールディレクトリの接尾辞（例: .lproj）
    pub locale_suffix: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            resources_root: PathBuf::from(defaults::RESOURCES_ROOT),
            base_locale: defaults::BASE_LOCALE.to_string(),
            strings_file: defaults::STRINGS_FILE.to_string(),
            locale_suffix: defaults::LOCALE_SUFFIX.to_string(),
        }
    }
}

impl SyncConfig {
    pub fn with_resources_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.resources_root = root.into();
        self
    }

    pub fn with_base_locale<S: Into<String>>(mut self, base_locale: S) -> Self {
        self.base_locale = base_locale.into();
        self
    }

    pub fn with_strings_file<S: Into<String>>(mut self, strings_file: S) -> Self {
        self.strings_file = strings_file.into();
        self
    }

    /// 基準ファイルのパス（存在確認はしない）
    pub fn base_file(&self) -> PathBuf {
        self.resources_root
            .join(&self.base_locale)
            .join(&self.strings_file)
    }

    /// 接尾辞を除いた基準ロケール名（en.lproj -> en）
    pub fn base_locale_name(&self) -> &str {
        self.base_locale
            .strip_suffix(self.locale_suffix.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(self.base_locale.as_str())
    }

    /// TOML文字列から読み込む
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, SyncError> {
        toml::from_str(content).map_err(|e| SyncError::config_parse(origin, &e.to_string()))
    }

    /// 設定ファイルを読み込む
    #[cfg(feature = "config-file")]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SyncError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| SyncError::config_read(path, &e))?;
        Self::from_toml_str(&content, path)
    }

    /// ディレクトリから設定ファイルを探す
    ///
    /// 見つからなければデフォルト設定を返す。見つかったファイルのパスも返す。
    pub fn find_and_load_in(dir: &Path) -> Result<(Self, Option<PathBuf>), SyncError> {
        let candidate = dir.join(constants::CONFIG_FILE_NAME);

        match Self::load_if_present(&candidate)? {
            Some(config) => Ok((config, Some(candidate))),
            None => Ok((Self::default(), None)),
        }
    }

    #[cfg(feature = "config-file")]
    fn load_if_present(candidate: &Path) -> Result<Option<Self>, SyncError> {
        if candidate.is_file() {
            Self::load(candidate).map(Some)
        } else {
            Ok(None)
        }
    }

    #[cfg(not(feature = "config-file"))]
    fn load_if_present(_candidate: &Path) -> Result<Option<Self>, SyncError> {
        Ok(None)
    }

    /// カレントディレクトリから設定ファイルを探す
    pub fn find_and_load() -> Result<(Self, Option<PathBuf>), SyncError> {
        let current = std::env::current_dir()
            .map_err(|e| SyncError::dir_failed(Path::new("."), &e))?;
        Self::find_and_load_in(&current)
    }
}
