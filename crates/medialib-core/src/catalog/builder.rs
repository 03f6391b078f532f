//! LibraryBuilder - カタログの構築
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）: 重複 ID を全部まとめて報告する

use std::collections::HashSet;

use super::{LibraryConfig, MediaLibrary};
use crate::domain::{CatalogError, MediaId, MediaItem};

/// LibraryBuilder は初期データ付きの MediaLibrary を構築
///
/// # 使用例
/// ```ignore
/// let library = LibraryBuilder::new()
///     .secondary_indices(false)
///     .item(video)
///     .item(audio)
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct LibraryBuilder {
    config: LibraryConfig,
    items: Vec<MediaItem>,
}

/// BuildError はカタログ構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Duplicate media ids: {0:?}. Every item in a library needs a unique id.")]
    DuplicateIdentifiers(Vec<MediaId>),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl LibraryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: LibraryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn secondary_indices(mut self, enabled: bool) -> Self {
        self.config.secondary_indices = enabled;
        self
    }

    pub fn item(mut self, item: MediaItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = MediaItem>) -> Self {
        self.items.extend(items);
        self
    }

    /// Build the library, or list every id that occurs more than once.
    pub fn build(self) -> Result<MediaLibrary, BuildError> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for item in &self.items {
            if !seen.insert(item.id()) && !duplicates.contains(item.id()) {
                duplicates.push(item.id().clone());
            }
        }
        if !duplicates.is_empty() {
            return Err(BuildError::DuplicateIdentifiers(duplicates));
        }

        let mut config = self.config;
        if config.expected_capacity.is_none() {
            config.expected_capacity = Some(self.items.len());
        }
        let mut library = MediaLibrary::with_config(config);
        for item in self.items {
            library.add_item(item)?;
        }
        Ok(library)
    }
}
