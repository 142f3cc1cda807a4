use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "utoipa")]
use utoipa::ToSchema;

/// Creation/update timestamps and version tag carried by mutable entities.
///
/// The owning entity embeds it with `#[serde(flatten)]` and is responsible
/// for keeping it current: `updated_at` and `etag` change on every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct TimedMixin {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Opaque version marker, compared by consumers for cache validation.
    pub etag: String,
}

impl TimedMixin {
    pub fn new(created_at: DateTime<Utc>, updated_at: DateTime<Utc>, etag: String) -> Self {
        Self {
            created_at,
            updated_at,
            etag,
        }
    }
}

/// Read access to the timestamp and etag of an entity.
pub trait Timed {
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;
    fn etag(&self) -> &str;
}

/// Implemented by entities embedding a [`TimedMixin`]; provides [`Timed`].
pub trait HasTimed {
    fn timed(&self) -> &TimedMixin;
}

impl HasTimed for TimedMixin {
    fn timed(&self) -> &TimedMixin {
        self
    }
}

impl<T> Timed for T
where
    T: HasTimed,
{
    fn created_at(&self) -> DateTime<Utc> {
        self.timed().created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.timed().updated_at
    }

    fn etag(&self) -> &str {
        &self.timed().etag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Document {
        id: i64,
        title: String,
        #[serde(flatten)]
        timed: TimedMixin,
    }

    impl HasTimed for Document {
        fn timed(&self) -> &TimedMixin {
            &self.timed
        }
    }

    fn sample() -> TimedMixin {
        TimedMixin::new(
            Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 2, 17, 0, 5).unwrap(),
            "W/\"3f2a\"".to_string(),
        )
    }

    #[test]
    fn test_flattened_into_entity() {
        let document = Document {
            id: 7,
            title: "notes".to_string(),
            timed: sample(),
        };
        let value = serde_json::to_value(&document).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 7,
                "title": "notes",
                "created_at": "2024-03-01T08:30:00Z",
                "updated_at": "2024-03-02T17:00:05Z",
                "etag": "W/\"3f2a\"",
            })
        );
        let decoded: Document = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, document);
    }

    #[test]
    fn test_getters_through_entity() {
        let document = Document {
            id: 1,
            title: "draft".to_string(),
            timed: sample(),
        };
        assert_eq!(document.etag(), "W/\"3f2a\"");
        assert_eq!(document.created_at(), sample().created_at);
        assert_eq!(document.updated_at(), sample().updated_at);
        assert_eq!(sample().etag(), document.etag());
    }

    #[test]
    fn test_requires_all_fields() {
        let missing_etag = json!({
            "created_at": "2024-03-01T08:30:00Z",
            "updated_at": "2024-03-01T08:30:00Z",
        });
        assert!(serde_json::from_value::<TimedMixin>(missing_etag).is_err());

        let bad_timestamp = json!({
            "created_at": "yesterday",
            "updated_at": "2024-03-01T08:30:00Z",
            "etag": "1",
        });
        assert!(serde_json::from_value::<TimedMixin>(bad_timestamp).is_err());
    }
}
