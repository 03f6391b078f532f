//! Domain model (ids, tags, base attributes, variants, narrowing, errors).
//!
//! - ids / tags / base: 全 variant 共通の属性
//! - media: variant schema（`MediaKind`, `MediaDetails`, `MediaItem`）
//! - narrow: discriminant guard（`Variant`, `Narrowed`, `MediaVisitor`）
//! - errors: `CatalogError`

pub mod base;
pub mod errors;
pub mod ids;
pub mod media;
pub mod narrow;
pub mod tags;

pub use self::base::MediaBase;
pub use self::errors::{CatalogError, ParseValueError};
pub use self::ids::MediaId;
pub use self::media::{
    Audio, AudioQuality, Image, ImageFormat, MediaDetails, MediaItem, MediaKind, Video,
    VideoQuality,
};
pub use self::narrow::{DurationOf, MediaVisitor, Narrowed, Variant};
pub use self::tags::{TagSet, normalize_tag};
