//! InMemoryCatalog - 共有用のインメモリカタログ
//!
//! # 学習ポイント
//! - `Arc<RwLock<_>>` による共有所有権と読み書き分離
//! - 読み取りはロック中に完結させるか、snapshot（copy-on-read）を取る

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::catalog::{CatalogCounts, LibraryConfig, MediaLibrary};
use crate::domain::{CatalogError, MediaItem, Narrowed, Variant};
use crate::ports::CatalogStore;

/// InMemoryCatalog は `MediaLibrary` を 1 つの RwLock で保護する
///
/// # 使用例
/// ```ignore
/// let catalog = InMemoryCatalog::new();
/// catalog.add_item(item).await?;
/// let total = catalog.total_duration().await;
/// ```
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    library: Arc<RwLock<MediaLibrary>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LibraryConfig) -> Self {
        Self::from_library(MediaLibrary::with_config(config))
    }

    /// Share an already-populated library (e.g. from `LibraryBuilder`).
    pub fn from_library(library: MediaLibrary) -> Self {
        Self {
            library: Arc::new(RwLock::new(library)),
        }
    }

    pub async fn len(&self) -> usize {
        self.library.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.library.read().await.is_empty()
    }

    pub async fn total_duration(&self) -> u64 {
        self.library.read().await.total_duration()
    }

    #[instrument(level = "trace", skip(self))]
    pub async fn search_by_tag(&self, tag: &str) -> Vec<Arc<MediaItem>> {
        let library = self.library.read().await;
        let found = library.search_by_tag(tag);
        share(&library, found)
    }

    pub async fn by_variant_and_attribute<V, P>(&self, predicate: P) -> Vec<Arc<MediaItem>>
    where
        V: Variant,
        P: Fn(&Narrowed<'_, V>) -> bool,
    {
        let library = self.library.read().await;
        let found = library.by_variant_and_attribute::<V, _>(|narrowed| predicate(narrowed));
        share(&library, found.iter().map(|narrowed| narrowed.item()))
    }
}

/// Turn borrowed results into shared handles while the read lock is held.
fn share<'a>(
    library: &MediaLibrary,
    items: impl IntoIterator<Item = &'a MediaItem>,
) -> Vec<Arc<MediaItem>> {
    items
        .into_iter()
        .filter_map(|item| library.shared(item.id()))
        .collect()
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn add_item(&self, item: MediaItem) -> Result<(), CatalogError> {
        self.library.write().await.add_item(item)
    }

    async fn snapshot(&self) -> MediaLibrary {
        self.library.read().await.clone()
    }

    async fn counts(&self) -> CatalogCounts {
        self.library.read().await.counts()
    }
}
