//! Attributes common to every media variant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::MediaId;
use super::tags::TagSet;
use crate::ports::Clock;

/// Shared base attributes (identity, title, upload time, size, tags).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaBase {
    pub id: MediaId,
    pub title: String,
    pub uploaded_at: DateTime<Utc>,
    pub size_bytes: u64,

    #[serde(default)]
    pub tags: TagSet,
}

impl MediaBase {
    pub fn new(
        id: impl Into<MediaId>,
        title: impl Into<String>,
        uploaded_at: DateTime<Utc>,
        size_bytes: u64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            uploaded_at,
            size_bytes,
            tags: TagSet::new(),
        }
    }

    /// Stamp `uploaded_at` from the given clock.
    pub fn uploaded_now<C: Clock + ?Sized>(
        id: impl Into<MediaId>,
        title: impl Into<String>,
        size_bytes: u64,
        clock: &C,
    ) -> Self {
        Self::new(id, title, clock.now(), size_bytes)
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            self.tags.insert(tag.as_ref());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::FixedClock;
    use chrono::TimeZone;

    #[test]
    fn uploaded_now_uses_clock() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let base = MediaBase::uploaded_now("img_1", "logo", 50 * 1024, &FixedClock::new(at));

        assert_eq!(base.uploaded_at, at);
        assert_eq!(base.size_bytes, 51_200);
        assert!(base.tags.is_empty());
    }

    #[test]
    fn with_tags_normalizes() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let base = MediaBase::new("vid_1", "intro", at, 1).with_tags(["Intro", "Rust"]);

        assert!(base.tags.contains_normalized("intro"));
        assert!(base.tags.contains_normalized("rust"));
    }
}
