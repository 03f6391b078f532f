//! CatalogStore port - 並行アクセス用のカタログ
//!
//! `MediaLibrary` は単一所有・同期的なストアです。
//! 複数タスクから共有する場合はこの trait 越しに扱います。
//!
//! # 実装
//! - **InMemoryCatalog**: `RwLock<MediaLibrary>`（impls::inmem_catalog）

use async_trait::async_trait;

use crate::catalog::{CatalogCounts, MediaLibrary};
use crate::domain::{CatalogError, MediaItem};

/// CatalogStore は共有カタログへの入口
///
/// # 設計原則
/// - `add_item` は排他アクセス
/// - 読み取りは共有アクセス。途中の挿入が部分的に見えることはない
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Append an item (exclusive access).
    async fn add_item(&self, item: MediaItem) -> Result<(), CatalogError>;

    /// Consistent copy of the whole catalog, for running any number of queries.
    async fn snapshot(&self) -> MediaLibrary;

    async fn counts(&self) -> CatalogCounts;
}
