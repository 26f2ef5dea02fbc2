use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

pub const HEALTH_STATUS_OK: &str = "ok";

/// Body returned by `GET /health`
///
/// ```json
/// { "status": "ok", "timestamp": "2024-03-10T15:30:45.123Z" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(serialize_with = "serialize_millis")]
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn ok(at: DateTime<Utc>) -> Self {
        Self {
            status: HEALTH_STATUS_OK.to_string(),
            timestamp: at,
        }
    }
}

/// RFC 3339 in UTC with exactly three fractional digits and a `Z` suffix
fn serialize_millis<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}
