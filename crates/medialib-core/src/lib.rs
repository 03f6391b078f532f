//! medialib-core
//!
//! In-memory media catalog: tagged variant records (video / audio / image)
//! sharing a common base schema, with discriminant-safe queries.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, tags, base, media, narrow, errors）
//! - **catalog**: ストアとクエリ（MediaLibrary, LibraryBuilder, LibraryConfig）
//! - **ports**: 抽象化レイヤー（Clock, IdGenerator, CatalogStore）
//! - **impls**: 実装（InMemoryCatalog）

pub mod catalog;
pub mod domain;
pub mod impls;
pub mod ports;

pub use catalog::{
    BuildError, CatalogCounts, LibraryBuilder, LibraryConfig, MAX_PREALLOCATED_ITEMS,
    MediaLibrary, titles,
};
pub use domain::{
    Audio, AudioQuality, CatalogError, Image, ImageFormat, MediaBase, MediaDetails, MediaId,
    MediaItem, MediaKind, MediaVisitor, Narrowed, TagSet, Variant, Video, VideoQuality,
};
pub use impls::InMemoryCatalog;
pub use ports::{CatalogStore, Clock, FixedClock, IdGenerator, SystemClock, UlidGenerator};
