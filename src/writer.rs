//! 不足キーの追記
//!
//! 基準にあって対象に無いキーを基準の順序で求め、対象ファイルの末尾に
//! 見出しコメント付きのブロックとして追記します。既存の内容には触れません。

use crate::constants::AUTO_FILL_MARKER;
use crate::error::SyncError;
use crate::i18n::fill_placeholders;
use crate::log;
use crate::parser::StringsTable;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 基準にあって対象に無いキー（基準の順序）
pub fn missing_keys<'a>(base: &'a StringsTable, existing: &StringsTable) -> Vec<&'a str> {
    base.keys().filter(|key| !existing.contains_key(key)).collect()
}

pub struct SyncWriter<'a> {
    base: &'a StringsTable,
    marker: String,
}

impl<'a> SyncWriter<'a> {
    /// `base_locale_name` は見出しコメントに入る名前（例: en）
    pub fn new(base: &'a StringsTable, base_locale_name: &str) -> Self {
        SyncWriter {
            base,
            marker: fill_placeholders(AUTO_FILL_MARKER, &[base_locale_name]),
        }
    }

    pub fn missing_keys(&self, existing: &StringsTable) -> Vec<&'a str> {
        missing_keys(self.base, existing)
    }

    /// 追記するブロックを組み立てる
    ///
    /// 値は基準ファイルの表記そのまま（再エスケープしない）。
    pub fn render_block(&self, missing: &[&str]) -> String {
        let mut block = String::from("\n\n");
        block.push_str(&self.marker);
        block.push('\n');

        for key in missing {
            if let Some(value) = self.base.get(key) {
                block.push_str(&format!("\"{}\" = \"{}\";\n", key, value));
            }
        }
        block
    }

    /// 不足キーを `path` に追記し、追記したキー数を返す
    ///
    /// 不足が無ければ何も書かずに0を返す。ファイルは作成しない（存在が前提）。
    pub fn append_missing(&self, path: &Path, existing: &StringsTable) -> Result<usize, SyncError> {
        let missing = self.missing_keys(existing);
        if missing.is_empty() {
            return Ok(0);
        }

        let block = self.render_block(&missing);
        let file = OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(|e| SyncError::append_failed(path, &e))?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(block.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| SyncError::append_failed(path, &e))?;

        log::info(format_args!(
            "appended {} keys to {}",
            missing.len(),
            path.display()
        ));
        Ok(missing.len())
    }
}
