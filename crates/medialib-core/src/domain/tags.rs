//! Free-text tag set shared by every media variant.
//!
//! Tags are normalised once, when they enter a `TagSet` (trim + lowercase).
//! Lookups normalise the query once and compare against the stored form.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Normalise a tag to its stored form.
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Set of lowercase tags. Order is irrelevant; iteration is alphabetical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tag. Blank tags are ignored.
    ///
    /// Returns `true` when the normalised tag was not present yet.
    pub fn insert(&mut self, tag: &str) -> bool {
        let tag = normalize_tag(tag);
        if tag.is_empty() {
            return false;
        }
        self.0.insert(tag)
    }

    /// Case-insensitive membership test.
    pub fn matches(&self, tag: &str) -> bool {
        self.contains_normalized(&normalize_tag(tag))
    }

    /// Membership test for a tag that is already in stored form.
    pub fn contains_normalized(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags = TagSet::new();
        for tag in iter {
            tags.insert(tag.as_ref());
        }
        tags
    }
}

impl From<Vec<String>> for TagSet {
    fn from(tags: Vec<String>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<TagSet> for Vec<String> {
    fn from(tags: TagSet) -> Self {
        tags.0.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn tags_are_lowercased_on_insert() {
        let tags: TagSet = ["TypeScript", " Tutorial "].into_iter().collect();

        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["tutorial", "typescript"]);
    }

    #[test]
    fn duplicate_tags_collapse() {
        let tags: TagSet = ["podcast", "Podcast", "PODCAST"].into_iter().collect();
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn blank_tags_are_ignored() {
        let mut tags = TagSet::new();
        assert!(!tags.insert("   "));
        assert!(tags.is_empty());
    }

    #[rstest]
    #[case::exact("logo", true)]
    #[case::upper("LOGO", true)]
    #[case::mixed_with_spaces("  Logo ", true)]
    #[case::other("icon", false)]
    #[case::prefix("log", false)]
    fn matches_is_case_insensitive(#[case] query: &str, #[case] expected: bool) {
        let tags: TagSet = ["logo", "typescript"].into_iter().collect();
        assert_eq!(tags.matches(query), expected);
    }

    #[test]
    fn deserialization_normalizes() {
        let tags: TagSet = serde_json::from_str(r#"["Programming", "programming"]"#).unwrap();
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["programming"]);
    }
}
