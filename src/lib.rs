pub mod config;
pub mod constants;
pub mod error;
pub mod i18n;
pub mod locator;
pub mod log;
pub mod parser;
pub mod sync;
pub mod writer;

pub use config::SyncConfig;
pub use error::{ErrorCode, SyncError};
pub use parser::{parse_pairs, Entry, StringsTable};
pub use sync::{run, SyncReport, TargetOutcome, TargetReport};

// ========================================
// 共通型定義
// ========================================

use ahash::RandomState;

/// キー検索用のHashMap型（ahashを適用）
///
/// ahashは高速な非暗号学的ハッシュ。
/// 将来的にハッシュアルゴリズムを変更する場合もここだけ修正すればOK。
pub type HashMap<K, V> = std::collections::HashMap<K, V, RandomState>;

/// HashMapを作成するヘルパー関数
#[inline]
pub fn new_hashmap<K, V>() -> HashMap<K, V> {
    std::collections::HashMap::with_hasher(RandomState::new())
}
