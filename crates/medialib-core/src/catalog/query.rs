//! Query engine. Every operation is `&self` and never mutates the catalog.

use tracing::{instrument, trace};

use super::MediaLibrary;
use crate::domain::{
    DurationOf, MediaItem, MediaKind, Narrowed, Variant, Video, VideoQuality, normalize_tag,
};

impl MediaLibrary {
    /// Items of variant `V` that satisfy `predicate`, in insertion order.
    #[instrument(level = "trace", skip_all, fields(kind = %V::KIND))]
    pub fn by_variant_and_attribute<'a, V, P>(&'a self, predicate: P) -> Vec<Narrowed<'a, V>>
    where
        V: Variant,
        P: Fn(&Narrowed<'a, V>) -> bool,
    {
        let matches = |item: &'a MediaItem| {
            item.narrow::<V>()
                .filter(|narrowed| predicate(narrowed))
        };

        let found: Vec<Narrowed<'a, V>> = match self.kind_positions(V::KIND) {
            Some(positions) => positions
                .iter()
                .filter_map(|&position| matches(self.at(position)))
                .collect(),
            None => self.all().filter_map(matches).collect(),
        };
        trace!(matched = found.len(), "variant filter done");
        found
    }

    /// Sum of `duration_seconds` over videos and audio. Images contribute 0.
    ///
    /// The sum saturates at `u64::MAX` instead of overflowing.
    pub fn total_duration(&self) -> u64 {
        let mut duration = DurationOf;
        self.all()
            .filter_map(|item| item.accept(&mut duration))
            .fold(0, u64::saturating_add)
    }

    /// Items whose tag set contains `tag`, compared case-insensitively.
    #[instrument(level = "trace", skip(self))]
    pub fn search_by_tag(&self, tag: &str) -> Vec<&MediaItem> {
        let needle = normalize_tag(tag);

        let found: Vec<&MediaItem> = match self.tag_positions(&needle) {
            Some(positions) => positions.iter().map(|&position| self.at(position)).collect(),
            None => self
                .all()
                .filter(|item| item.tags().contains_normalized(&needle))
                .collect(),
        };
        trace!(matched = found.len(), "tag search done");
        found
    }

    /// Videos of exactly the given quality.
    pub fn videos_by_quality(&self, quality: VideoQuality) -> Vec<Narrowed<'_, Video>> {
        self.by_variant_and_attribute::<Video, _>(|video| video.quality == quality)
    }

    /// All items of one kind, in insertion order.
    pub fn of_kind(&self, kind: MediaKind) -> Vec<&MediaItem> {
        match self.kind_positions(kind) {
            Some(positions) => positions.iter().map(|&position| self.at(position)).collect(),
            None => self.all().filter(|item| item.is(kind)).collect(),
        }
    }
}

/// Title projection, for presenting query results.
pub fn titles<'a, I>(items: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a MediaItem>,
{
    items.into_iter().map(MediaItem::title).collect()
}
