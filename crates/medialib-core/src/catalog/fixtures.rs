//! Test fixtures: the three sample records and builders for variations.

use chrono::{DateTime, TimeZone, Utc};

use super::{LibraryConfig, MediaLibrary};
use crate::domain::{
    Audio, AudioQuality, Image, ImageFormat, MediaBase, MediaItem, Video, VideoQuality,
};

pub(crate) fn uploaded_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

pub(crate) fn base(id: &str, title: &str, tags: &[&str]) -> MediaBase {
    MediaBase::new(id, title, uploaded_at(), 1024).with_tags(tags.iter().copied())
}

pub(crate) fn png(width: u32, height: u32) -> Image {
    Image {
        width,
        height,
        format: ImageFormat::Png,
        alt_text: None,
    }
}

pub(crate) fn video_with(
    id: &str,
    duration_seconds: u64,
    quality: VideoQuality,
    tags: &[&str],
) -> MediaItem {
    MediaItem::video(
        base(id, &format!("video {id}"), tags),
        Video {
            duration_seconds,
            quality,
            has_subtitles: false,
            thumbnails: Vec::new(),
        },
    )
}

pub(crate) fn extra_video(id: &str, duration_seconds: u64) -> MediaItem {
    video_with(id, duration_seconds, VideoQuality::Hd720, &[])
}

pub(crate) fn tutorial_video() -> MediaItem {
    MediaItem::video(
        MediaBase::new("vid_1", "TypeScript tutorial", uploaded_at(), 50 * 1024 * 1024)
            .with_tags(["programming", "typescript", "tutorial"]),
        Video {
            duration_seconds: 600,
            quality: VideoQuality::FullHd1080,
            has_subtitles: true,
            thumbnails: vec!["thumb1.jpg".to_string(), "thumb2.jpg".to_string()],
        },
    )
}

pub(crate) fn podcast_audio() -> MediaItem {
    MediaItem::audio(
        MediaBase::new("aud_1", "TypeScript podcast", uploaded_at(), 5 * 1024 * 1024)
            .with_tags(["podcast", "typescript", "programming", "tutorial"]),
        Audio {
            duration_seconds: 1800,
            quality: AudioQuality::High,
            artist: "Tech Talks".to_string(),
            album: None,
        },
    )
}

pub(crate) fn logo_image() -> MediaItem {
    MediaItem::image(
        MediaBase::new("img_1", "TypeScript logo", uploaded_at(), 50 * 1024)
            .with_tags(["logo", "typescript"]),
        Image {
            width: 1920,
            height: 1080,
            format: ImageFormat::Png,
            alt_text: Some("TypeScript Programming Language Logo".to_string()),
        },
    )
}

pub(crate) fn sample_items() -> Vec<MediaItem> {
    vec![tutorial_video(), podcast_audio(), logo_image()]
}

pub(crate) fn sample_library() -> MediaLibrary {
    sample_library_with(LibraryConfig::default())
}

pub(crate) fn sample_library_with(config: LibraryConfig) -> MediaLibrary {
    let mut library = MediaLibrary::with_config(config);
    for item in sample_items() {
        library.add_item(item).unwrap();
    }
    library
}
