//! Catalog store + query engine.
//!
//! # 設計
//! - `items` が唯一の正本（insertion order）
//! - インデックスは `items` の位置（usize）だけを保持する
//! - 変更は `add_item` のみ。更新・削除はない
//! - 挿入後のレコードは `Arc<MediaItem>` で共有され、`&mut` は外に出ない

mod builder;
mod config;
mod counts;
mod query;

#[cfg(test)]
pub(crate) mod fixtures;

pub use builder::{BuildError, LibraryBuilder};
pub use config::LibraryConfig;
pub use counts::CatalogCounts;
pub use query::titles;

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::{CatalogError, MediaId, MediaItem, MediaKind};

/// Upper bound on what `LibraryConfig::expected_capacity` pre-allocates.
pub const MAX_PREALLOCATED_ITEMS: usize = 1 << 16;

/// Append-only, insertion-ordered media catalog.
///
/// `Clone` is a copy-on-read snapshot: records are shared, indices are copied.
#[derive(Debug, Clone)]
pub struct MediaLibrary {
    config: LibraryConfig,

    /// All records, in insertion order.
    items: Vec<Arc<MediaItem>>,

    /// id -> position. Always maintained (uniqueness check).
    by_id: HashMap<MediaId, usize>,

    /// Normalised tag -> positions (ascending).
    by_tag: HashMap<String, Vec<usize>>,

    /// kind -> positions (ascending).
    by_kind: HashMap<MediaKind, Vec<usize>>,
}

impl MediaLibrary {
    pub fn new() -> Self {
        Self::with_config(LibraryConfig::default())
    }

    /// `expected_capacity` is only a hint: it is capped at
    /// [`MAX_PREALLOCATED_ITEMS`] and an allocation failure leaves the
    /// library empty but usable.
    pub fn with_config(config: LibraryConfig) -> Self {
        let capacity = config
            .expected_capacity
            .unwrap_or_default()
            .min(MAX_PREALLOCATED_ITEMS);

        let mut items: Vec<Arc<MediaItem>> = Vec::new();
        let mut by_id: HashMap<MediaId, usize> = HashMap::new();
        if items.try_reserve(capacity).is_err() || by_id.try_reserve(capacity).is_err() {
            debug!(capacity, "pre-allocation skipped");
        }

        Self {
            items,
            by_id,
            by_tag: HashMap::new(),
            by_kind: HashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    /// Append an item.
    ///
    /// Rejects an id that is already present; the catalog is left untouched.
    pub fn add_item(&mut self, item: MediaItem) -> Result<(), CatalogError> {
        if self.by_id.contains_key(item.id()) {
            return Err(CatalogError::DuplicateIdentifier(item.id().clone()));
        }

        let position = self.items.len();
        self.by_id.insert(item.id().clone(), position);
        if self.config.secondary_indices {
            for tag in item.tags().iter() {
                self.by_tag.entry(tag.to_string()).or_default().push(position);
            }
            self.by_kind.entry(item.kind()).or_default().push(position);
        }

        debug!(id = %item.id(), kind = %item.kind(), position, "media item added");
        self.items.push(Arc::new(item));
        Ok(())
    }

    /// All items in insertion order.
    ///
    /// Call again to restart; the iterator itself is also `Clone`.
    pub fn all(&self) -> impl Iterator<Item = &MediaItem> + Clone {
        self.items.iter().map(Arc::as_ref)
    }

    pub fn get(&self, id: &MediaId) -> Option<&MediaItem> {
        self.by_id.get(id).map(|&position| self.at(position))
    }

    /// Shared handle to a stored item, for callers that outlive a borrow.
    pub fn shared(&self, id: &MediaId) -> Option<Arc<MediaItem>> {
        self.by_id
            .get(id)
            .map(|&position| Arc::clone(&self.items[position]))
    }

    pub fn contains(&self, id: &MediaId) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn counts(&self) -> CatalogCounts {
        let mut counts = CatalogCounts::default();
        for item in self.all() {
            counts.record(item.kind());
        }
        counts
    }

    fn at(&self, position: usize) -> &MediaItem {
        &self.items[position]
    }

    /// Positions of `kind`, or `None` when indices are disabled.
    fn kind_positions(&self, kind: MediaKind) -> Option<&[usize]> {
        if !self.config.secondary_indices {
            return None;
        }
        Some(self.by_kind.get(&kind).map(Vec::as_slice).unwrap_or(&[]))
    }

    /// Positions tagged with the normalised `tag`, or `None` when indices are disabled.
    fn tag_positions(&self, tag: &str) -> Option<&[usize]> {
        if !self.config.secondary_indices {
            return None;
        }
        Some(self.by_tag.get(tag).map(Vec::as_slice).unwrap_or(&[]))
    }
}

impl Default for MediaLibrary {
    fn default() -> Self {
        Self::new()
    }
}
