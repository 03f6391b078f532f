//! Media identifiers.
//!
//! 呼び出し側は `"vid_1"` のような文字列 ID も、数値 ID もそのまま使えます。
//! どちらも内部では文字列として保持し、カタログ内の一意性判定に使います。
//!
//! 生成が必要な場合は `ports::IdGenerator`（ULID ベース）を使います。

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use ulid::Ulid;

/// Display / 生成時に使うプレフィックス
const GENERATED_PREFIX: &str = "media-";

/// Identifier of a media item, unique within one catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MediaId(String);

/// レコード上の `"id"` は文字列でも数値でもよい
#[derive(Deserialize)]
#[serde(untagged)]
enum RawMediaId {
    Text(String),
    Number(u64),
}

impl MediaId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// ULID から `media-<ULID>` 形式の ID を作成
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(format!("{GENERATED_PREFIX}{ulid}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this id was produced by an `IdGenerator`.
    pub fn is_generated(&self) -> bool {
        self.0
            .strip_prefix(GENERATED_PREFIX)
            .is_some_and(|rest| Ulid::from_string(rest).is_ok())
    }
}

impl From<&str> for MediaId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MediaId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for MediaId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<Ulid> for MediaId {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl<'de> Deserialize<'de> for MediaId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawMediaId::deserialize(deserializer)? {
            RawMediaId::Text(text) => Self::from(text),
            RawMediaId::Number(number) => Self::from(number),
        })
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_and_numeric_ids_are_accepted() {
        let text: MediaId = "vid_1".into();
        let number: MediaId = 42u64.into();

        assert_eq!(text.as_str(), "vid_1");
        assert_eq!(number.as_str(), "42");
        assert_ne!(text, number);
    }

    #[test]
    fn numeric_and_text_forms_of_the_same_value_collide() {
        // "42" と 42 は同じ ID として扱う
        assert_eq!(MediaId::from(42u64), MediaId::from("42"));
    }

    #[test]
    fn ulid_ids_carry_prefix() {
        let ulid = Ulid::new();
        let id = MediaId::from(ulid);

        assert_eq!(id.to_string(), format!("media-{ulid}"));
        assert!(id.is_generated());
        assert!(!MediaId::from("media-not-a-ulid").is_generated());
        assert!(!MediaId::from("vid_1").is_generated());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = MediaId::from("aud_1");

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"aud_1\"");

        let back: MediaId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn numeric_id_deserializes_like_its_text_form() {
        let number: MediaId = serde_json::from_str("42").unwrap();
        let text: MediaId = serde_json::from_str("\"42\"").unwrap();

        assert_eq!(number, text);
        assert_eq!(number.as_str(), "42");
        assert_eq!(serde_json::to_string(&number).unwrap(), "\"42\"");
    }

    #[test]
    fn non_scalar_id_is_rejected() {
        assert!(serde_json::from_str::<MediaId>("[1]").is_err());
        assert!(serde_json::from_str::<MediaId>("-1").is_err());
    }
}
