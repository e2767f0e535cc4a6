//! Alias record entity representing one alias → URL mapping.

use sqlx::FromRow;

/// A stored mapping from an alias to its target URL.
///
/// `id` is assigned by the store and never reused. Neither `alias` nor
/// `target_url` changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct AliasRecord {
    pub id: i64,
    pub alias: String,
    pub target_url: String,
}

impl AliasRecord {
    /// Creates a new AliasRecord instance.
    pub fn new(id: i64, alias: String, target_url: String) -> Self {
        Self {
            id,
            alias,
            target_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_record_creation() {
        let record = AliasRecord::new(
            7,
            "abc123".to_string(),
            "https://example.com".to_string(),
        );

        assert_eq!(record.id, 7);
        assert_eq!(record.alias, "abc123");
        assert_eq!(record.target_url, "https://example.com");
    }
}
