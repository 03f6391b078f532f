//! Variant schema: the closed set of media shapes and their discriminant.
//!
//! `MediaItem` = `MediaBase` + `MediaDetails`。
//! `MediaDetails` は sum type なので、タグ（`MediaKind`）と中身が食い違うことはありません。
//! variant 固有のフィールドには `narrow` / `MediaVisitor` 経由でのみ到達します。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::base::MediaBase;
use super::errors::ParseValueError;
use super::ids::MediaId;
use super::tags::TagSet;

/// Discriminant of a media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Audio,
    Image,
}

impl MediaKind {
    pub const ALL: [MediaKind; 3] = [MediaKind::Video, MediaKind::Audio, MediaKind::Image];

    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
            MediaKind::Image => "image",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MediaKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseValueError::new("media kind", s))
    }
}

/// Video quality levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VideoQuality {
    #[serde(rename = "480p")]
    Sd480,
    #[serde(rename = "720p")]
    Hd720,
    #[serde(rename = "1080p")]
    FullHd1080,
    #[serde(rename = "4K")]
    Uhd4k,
}

impl VideoQuality {
    pub const ALL: [VideoQuality; 4] = [
        VideoQuality::Sd480,
        VideoQuality::Hd720,
        VideoQuality::FullHd1080,
        VideoQuality::Uhd4k,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VideoQuality::Sd480 => "480p",
            VideoQuality::Hd720 => "720p",
            VideoQuality::FullHd1080 => "1080p",
            VideoQuality::Uhd4k => "4K",
        }
    }
}

impl fmt::Display for VideoQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VideoQuality {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VideoQuality::ALL
            .into_iter()
            .find(|quality| quality.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseValueError::new("video quality", s))
    }
}

/// Audio quality levels. Distinct from [`VideoQuality`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioQuality {
    Low,
    Medium,
    High,
    Lossless,
}

impl AudioQuality {
    pub const ALL: [AudioQuality; 4] = [
        AudioQuality::Low,
        AudioQuality::Medium,
        AudioQuality::High,
        AudioQuality::Lossless,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AudioQuality::Low => "low",
            AudioQuality::Medium => "medium",
            AudioQuality::High => "high",
            AudioQuality::Lossless => "lossless",
        }
    }
}

impl fmt::Display for AudioQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AudioQuality {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AudioQuality::ALL
            .into_iter()
            .find(|quality| quality.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseValueError::new("audio quality", s))
    }
}

/// Image encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpg,
    Png,
    Gif,
    Webp,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 4] = [
        ImageFormat::Jpg,
        ImageFormat::Png,
        ImageFormat::Gif,
        ImageFormat::Webp,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ImageFormat::Jpg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::Gif => "gif",
            ImageFormat::Webp => "webp",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageFormat {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImageFormat::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseValueError::new("image format", s))
    }
}

/// Video-specific attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub duration_seconds: u64,
    pub quality: VideoQuality,
    pub has_subtitles: bool,

    /// Thumbnail references, in display order.
    #[serde(default)]
    pub thumbnails: Vec<String>,
}

/// Audio-specific attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audio {
    pub duration_seconds: u64,
    pub quality: AudioQuality,
    pub artist: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
}

/// Image-specific attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

/// Variant payload, tagged by `"type"` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MediaDetails {
    Video(Video),
    Audio(Audio),
    Image(Image),
}

impl MediaDetails {
    pub fn kind(&self) -> MediaKind {
        match self {
            MediaDetails::Video(_) => MediaKind::Video,
            MediaDetails::Audio(_) => MediaKind::Audio,
            MediaDetails::Image(_) => MediaKind::Image,
        }
    }
}

impl From<Video> for MediaDetails {
    fn from(video: Video) -> Self {
        MediaDetails::Video(video)
    }
}

impl From<Audio> for MediaDetails {
    fn from(audio: Audio) -> Self {
        MediaDetails::Audio(audio)
    }
}

impl From<Image> for MediaDetails {
    fn from(image: Image) -> Self {
        MediaDetails::Image(image)
    }
}

/// A fully-formed media record.
///
/// Fields are private: once constructed, the discriminant cannot change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    #[serde(flatten)]
    base: MediaBase,

    #[serde(flatten)]
    details: MediaDetails,
}

impl MediaItem {
    pub fn new(base: MediaBase, details: impl Into<MediaDetails>) -> Self {
        Self {
            base,
            details: details.into(),
        }
    }

    pub fn video(base: MediaBase, video: Video) -> Self {
        Self::new(base, video)
    }

    pub fn audio(base: MediaBase, audio: Audio) -> Self {
        Self::new(base, audio)
    }

    pub fn image(base: MediaBase, image: Image) -> Self {
        Self::new(base, image)
    }

    pub fn kind(&self) -> MediaKind {
        self.details.kind()
    }

    /// Discriminant guard: true iff this item is of `kind`.
    pub fn is(&self, kind: MediaKind) -> bool {
        self.kind() == kind
    }

    pub fn base(&self) -> &MediaBase {
        &self.base
    }

    pub fn details(&self) -> &MediaDetails {
        &self.details
    }

    pub fn id(&self) -> &MediaId {
        &self.base.id
    }

    pub fn title(&self) -> &str {
        &self.base.title
    }

    pub fn tags(&self) -> &TagSet {
        &self.base.tags
    }
}
