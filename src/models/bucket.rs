//! Bucket identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque bucket identifier.
///
/// Always holds trimmed, non-empty text. There is no existence check:
/// any name the user types is a valid bucket, it may simply list nothing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BucketId(String);

impl BucketId {
    /// Normalize a candidate name, returning `None` for blank input.
    pub fn parse(candidate: &str) -> Option<Self> {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BucketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for BucketId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| "bucket name must not be blank".to_string())
    }
}

impl From<BucketId> for String {
    fn from(id: BucketId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims() {
        let id = BucketId::parse("  my-bucket \t").unwrap();
        assert_eq!(id.as_str(), "my-bucket");
        assert_eq!(id.to_string(), "my-bucket");
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert_eq!(BucketId::parse(""), None);
        assert_eq!(BucketId::parse("   "), None);
        assert_eq!(BucketId::parse("\n\t"), None);
    }

    #[test]
    fn test_parse_keeps_inner_whitespace() {
        let id = BucketId::parse(" two words ").unwrap();
        assert_eq!(id.as_str(), "two words");
    }

    #[test]
    fn test_deserialize_rejects_blank() {
        assert!(serde_json::from_str::<BucketId>("\"  \"").is_err());
        let id: BucketId = serde_json::from_str("\" demo \"").unwrap();
        assert_eq!(id.as_str(), "demo");
    }
}
