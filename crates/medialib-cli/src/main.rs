use serde::Serialize;
use tracing_subscriber::EnvFilter;

use medialib_core::{
    Audio, AudioQuality, CatalogStore, Clock, IdGenerator, Image, ImageFormat, InMemoryCatalog,
    MediaBase, MediaItem, MediaKind, SystemClock, UlidGenerator, Video, VideoQuality, titles,
};

/// 表示用の射影（presentation layer 側の都合）
#[derive(Debug, Serialize)]
struct Listing<'a> {
    title: &'a str,
    #[serde(rename = "type")]
    kind: MediaKind,
}

fn sample_items(clock: &dyn Clock, ids: &dyn IdGenerator) -> Vec<MediaItem> {
    vec![
        MediaItem::video(
            MediaBase::uploaded_now(
                ids.generate_media_id(),
                "TypeScript tutorial",
                50 * 1024 * 1024,
                clock,
            )
            .with_tags(["programming", "typescript", "tutorial"]),
            Video {
                duration_seconds: 600,
                quality: VideoQuality::FullHd1080,
                has_subtitles: true,
                thumbnails: vec!["thumb1.jpg".to_string(), "thumb2.jpg".to_string()],
            },
        ),
        MediaItem::audio(
            MediaBase::uploaded_now(
                ids.generate_media_id(),
                "TypeScript podcast",
                5 * 1024 * 1024,
                clock,
            )
            .with_tags(["podcast", "typescript", "programming"]),
            Audio {
                duration_seconds: 1800,
                quality: AudioQuality::High,
                artist: "Tech Talks".to_string(),
                album: None,
            },
        ),
        MediaItem::image(
            MediaBase::uploaded_now(
                ids.generate_media_id(),
                "TypeScript logo",
                50 * 1024,
                clock,
            )
            .with_tags(["logo", "typescript"]),
            Image {
                width: 1920,
                height: 1080,
                format: ImageFormat::Png,
                alt_text: Some("TypeScript Programming Language Logo".to_string()),
            },
        ),
    ]
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 引数: [tag] [video quality]
    let mut args = std::env::args().skip(1);
    let tag = args.next().unwrap_or_else(|| "typescript".to_string());
    let quality: VideoQuality = args.next().as_deref().unwrap_or("1080p").parse()?;

    // (A) カタログを用意して投入
    let catalog = InMemoryCatalog::new();
    let clock = SystemClock;
    let ids = UlidGenerator::new(SystemClock);
    for item in sample_items(&clock, &ids) {
        catalog.add_item(item).await?;
    }
    let loaded = catalog.len().await;
    tracing::info!(items = loaded, "media library loaded");

    // (B) snapshot に対してクエリ
    let snapshot = catalog.snapshot().await;

    println!("\n=== media library examples ===\n");

    let videos = snapshot.videos_by_quality(quality);
    println!(
        "{quality} videos: {}",
        serde_json::to_string(&titles(videos.iter().map(|video| video.item())))?
    );

    println!("Total duration (seconds): {}", snapshot.total_duration());

    let listings: Vec<Listing<'_>> = snapshot
        .search_by_tag(&tag)
        .into_iter()
        .map(|item| Listing {
            title: item.title(),
            kind: item.kind(),
        })
        .collect();
    println!("'{tag}' content: {}", serde_json::to_string_pretty(&listings)?);

    println!("counts: {:?}", catalog.counts().await);
    Ok(())
}
