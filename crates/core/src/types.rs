use serde::{Deserialize, Deserializer};

/// Entity identifiers are opaque strings (`inst-…`, `ticket-…`, `tech-…`).
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh identifier of the form `{prefix}-{uuid v7}`.
///
/// UUID v7 embeds a millisecond timestamp followed by random bits, so two
/// ids minted within the same millisecond still differ.
pub fn new_id(prefix: &str) -> EntityId {
    format!("{prefix}-{}", uuid::Uuid::now_v7())
}

/// Deserialize a field that distinguishes "absent" from "explicitly null".
///
/// Use together with `#[serde(default)]` on an `Option<Option<T>>` field:
/// a missing key yields `None`, `null` yields `Some(None)`, a value yields
/// `Some(Some(v))`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "nullable")]
        value: Option<Option<String>>,
    }

    #[test]
    fn new_id_keeps_prefix() {
        let id = new_id("ticket");
        assert!(id.starts_with("ticket-"));
        assert_eq!(id.len(), "ticket-".len() + 36);
    }

    #[test]
    fn new_id_is_unique_in_a_tight_loop() {
        let ids: std::collections::HashSet<_> = (0..1000).map(|_| new_id("inst")).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn nullable_distinguishes_missing_null_and_value() {
        let missing: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.value, None);

        let null: Patch = serde_json::from_str(r#"{"value":null}"#).unwrap();
        assert_eq!(null.value, Some(None));

        let set: Patch = serde_json::from_str(r#"{"value":"tech-1"}"#).unwrap();
        assert_eq!(set.value, Some(Some("tech-1".to_string())));
    }
}
