//! Discriminant guard - variant への型安全な絞り込み
//!
//! # 学習ポイント
//! - Associated Constants (`const KIND`) で variant とタグを対応付ける
//! - `Narrowed<'a, V>` は base と variant 固有部分を同時に借用するビュー
//! - `MediaVisitor` は網羅的な dispatch。variant を追加すると全 visitor がコンパイルエラーになる

use std::ops::Deref;

use super::base::MediaBase;
use super::errors::CatalogError;
use super::ids::MediaId;
use super::media::{Audio, Image, MediaDetails, MediaItem, MediaKind, Video};

/// A variant payload type that can be narrowed to from a generic item.
///
/// # 使用例
/// ```ignore
/// if let Some(video) = item.narrow::<Video>() {
///     println!("{} ({})", video.base().title, video.quality);
/// }
/// ```
pub trait Variant: Sized + 'static {
    const KIND: MediaKind;

    fn narrow(details: &MediaDetails) -> Option<&Self>;
}

impl Variant for Video {
    const KIND: MediaKind = MediaKind::Video;

    fn narrow(details: &MediaDetails) -> Option<&Self> {
        match details {
            MediaDetails::Video(video) => Some(video),
            _ => None,
        }
    }
}

impl Variant for Audio {
    const KIND: MediaKind = MediaKind::Audio;

    fn narrow(details: &MediaDetails) -> Option<&Self> {
        match details {
            MediaDetails::Audio(audio) => Some(audio),
            _ => None,
        }
    }
}

impl Variant for Image {
    const KIND: MediaKind = MediaKind::Image;

    fn narrow(details: &MediaDetails) -> Option<&Self> {
        match details {
            MediaDetails::Image(image) => Some(image),
            _ => None,
        }
    }
}

/// An item whose discriminant has been confirmed to be `V`.
#[derive(Debug)]
pub struct Narrowed<'a, V> {
    item: &'a MediaItem,
    variant: &'a V,
}

impl<V> Clone for Narrowed<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Narrowed<'_, V> {}

impl<'a, V> Narrowed<'a, V> {
    pub fn item(&self) -> &'a MediaItem {
        self.item
    }

    pub fn base(&self) -> &'a MediaBase {
        self.item.base()
    }

    pub fn variant(&self) -> &'a V {
        self.variant
    }

    pub fn id(&self) -> &'a MediaId {
        self.item.id()
    }

    pub fn title(&self) -> &'a str {
        self.item.title()
    }
}

impl<V> Deref for Narrowed<'_, V> {
    type Target = V;

    fn deref(&self) -> &V {
        self.variant
    }
}

impl MediaItem {
    /// Narrow to variant `V`, or `None` if the discriminant differs.
    pub fn narrow<V: Variant>(&self) -> Option<Narrowed<'_, V>> {
        V::narrow(self.details()).map(|variant| Narrowed {
            item: self,
            variant,
        })
    }

    /// Narrow to variant `V`, reporting a mismatch as an error.
    ///
    /// A mismatch means the caller assumed the wrong variant; treat it as a bug.
    pub fn try_narrow<V: Variant>(&self) -> Result<Narrowed<'_, V>, CatalogError> {
        self.narrow::<V>().ok_or(CatalogError::NarrowingMismatch {
            expected: V::KIND,
            actual: self.kind(),
        })
    }

    /// Exhaustive dispatch over the variant.
    pub fn accept<M: MediaVisitor + ?Sized>(&self, visitor: &mut M) -> M::Output {
        match self.details() {
            MediaDetails::Video(video) => visitor.visit_video(self.base(), video),
            MediaDetails::Audio(audio) => visitor.visit_audio(self.base(), audio),
            MediaDetails::Image(image) => visitor.visit_image(self.base(), image),
        }
    }

    /// Playback length, for variants that have one.
    pub fn duration_seconds(&self) -> Option<u64> {
        self.accept(&mut DurationOf)
    }
}

/// One method per variant; no default implementations on purpose.
pub trait MediaVisitor {
    type Output;

    fn visit_video(&mut self, base: &MediaBase, video: &Video) -> Self::Output;

    fn visit_audio(&mut self, base: &MediaBase, audio: &Audio) -> Self::Output;

    fn visit_image(&mut self, base: &MediaBase, image: &Image) -> Self::Output;
}

/// Duration contribution of a single item.
pub struct DurationOf;

impl MediaVisitor for DurationOf {
    type Output = Option<u64>;

    fn visit_video(&mut self, _base: &MediaBase, video: &Video) -> Option<u64> {
        Some(video.duration_seconds)
    }

    fn visit_audio(&mut self, _base: &MediaBase, audio: &Audio) -> Option<u64> {
        Some(audio.duration_seconds)
    }

    fn visit_image(&mut self, _base: &MediaBase, _image: &Image) -> Option<u64> {
        None
    }
}
