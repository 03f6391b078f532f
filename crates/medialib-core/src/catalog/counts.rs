//! Per-kind item counts.

use serde::{Deserialize, Serialize};

use crate::domain::MediaKind;

/// Number of items per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCounts {
    pub video: usize,
    pub audio: usize,
    pub image: usize,
}

impl CatalogCounts {
    pub fn record(&mut self, kind: MediaKind) {
        match kind {
            MediaKind::Video => self.video += 1,
            MediaKind::Audio => self.audio += 1,
            MediaKind::Image => self.image += 1,
        }
    }

    pub fn get(&self, kind: MediaKind) -> usize {
        match kind {
            MediaKind::Video => self.video,
            MediaKind::Audio => self.audio,
            MediaKind::Image => self.image,
        }
    }

    pub fn total(&self) -> usize {
        self.video + self.audio + self.image
    }
}
