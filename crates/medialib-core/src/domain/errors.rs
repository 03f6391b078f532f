//! Errors - カタログのエラー型
//!
//! # 分類
//! - `DuplicateIdentifier`: 回復可能（別の ID で再試行できる）
//! - `NarrowingMismatch`: プログラミングエラー（呼び出し側の前提が誤っている）

use thiserror::Error;

use super::ids::MediaId;
use super::media::MediaKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("media item with id '{0}' already exists")]
    DuplicateIdentifier(MediaId),

    /// Variant access was asserted on an item of another kind.
    #[error("expected a {expected} item but found {actual}")]
    NarrowingMismatch {
        expected: MediaKind,
        actual: MediaKind,
    },
}

impl CatalogError {
    /// Whether the caller can recover (e.g. retry with another id).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CatalogError::DuplicateIdentifier(_))
    }
}

/// Unknown literal for one of the closed enums (kind, quality, format).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {what}: {value}")]
pub struct ParseValueError {
    what: &'static str,
    value: String,
}

impl ParseValueError {
    pub(crate) fn new(what: &'static str, value: impl Into<String>) -> Self {
        Self {
            what,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let dup = CatalogError::DuplicateIdentifier(MediaId::from("vid_1"));
        assert_eq!(dup.to_string(), "media item with id 'vid_1' already exists");
        assert!(dup.is_recoverable());

        let mismatch = CatalogError::NarrowingMismatch {
            expected: MediaKind::Video,
            actual: MediaKind::Image,
        };
        assert_eq!(mismatch.to_string(), "expected a video item but found image");
        assert!(!mismatch.is_recoverable());
    }
}
