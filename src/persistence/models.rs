//! Database model for rows of the `places` table.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Timestamp format used for `created_at` / `updated_at`, both in the
/// database and on the wire. Second resolution, always UTC, always `Z`.
pub const ISO_8601_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Formats the current UTC time with [`ISO_8601_FORMAT`].
#[must_use]
pub fn now_utc() -> String {
    Utc::now().format(ISO_8601_FORMAT).to_string()
}

/// A row from the `places` table.
///
/// Timestamps are stored as text in [`ISO_8601_FORMAT`]; lexicographic
/// comparison of two values is chronological comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Place {
    /// Server-generated UUID, assigned at creation and immutable.
    pub id: String,
    /// Free-text label.
    pub name: String,
    /// Short identifier code.
    pub code: String,
    /// Creation timestamp, set once.
    pub created_at: String,
    /// Last-update timestamp. Equals `created_at` until the first update.
    pub updated_at: String,
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn now_utc_has_second_resolution_and_zulu_suffix() {
        let ts = now_utc();
        assert_eq!(ts.len(), 20);
        assert!(ts.ends_with('Z'));
        assert!(NaiveDateTime::parse_from_str(&ts, ISO_8601_FORMAT).is_ok());
    }

    #[test]
    fn timestamp_ordering_is_lexicographic() {
        let earlier = "2026-08-07T10:00:00Z";
        let later = "2026-08-07T10:00:01Z";
        assert!(earlier < later);
    }

    #[test]
    fn place_serializes_all_fields() {
        let place = Place {
            id: "c0ffee".to_string(),
            name: "Paris".to_string(),
            code: "PAR".to_string(),
            created_at: "2026-08-07T10:00:00Z".to_string(),
            updated_at: "2026-08-07T10:00:00Z".to_string(),
        };
        let json = match serde_json::to_value(&place) {
            Ok(v) => v,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json["id"], "c0ffee");
        assert_eq!(json["name"], "Paris");
        assert_eq!(json["code"], "PAR");
        assert_eq!(json["created_at"], "2026-08-07T10:00:00Z");
        assert_eq!(json["updated_at"], "2026-08-07T10:00:00Z");
    }
}
