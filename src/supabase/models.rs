use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Primary key of a row. Tables created from the dashboard use bigint ids,
/// older ones use uuids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Int(id) => write!(f, "{id}"),
            RowId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorStatus {
    Active,
    #[serde(other)]
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    pub id: RowId,
    pub sensor_id: String,
    pub name: String,
    pub status: SensorStatus,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Sensor {
    pub fn is_online(&self) -> bool {
        self.status == SensorStatus::Active
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReading {
    pub sensor_id: String,
    pub temperature: f64,
    #[serde(deserialize_with = "timestamp")]
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A signed in user as kept by the browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix seconds.
    pub expires_at: i64,
    pub user: AuthUser,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.expires_at
    }
}

/// Body of a successful `/auth/v1/token` call.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: AuthUser,
}

impl TokenResponse {
    pub fn into_session(self, now: DateTime<Utc>) -> Session {
        let expires_at = self
            .expires_at
            .unwrap_or_else(|| now.timestamp() + self.expires_in.unwrap_or(3600));
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        }
    }
}

/// Parse a Postgres timestamp. `timestamptz` columns come back as RFC 3339,
/// plain `timestamp` columns have no offset and are taken as UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    // Postgres renders "+00" without minutes
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%#z") {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
}

fn optional_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}"))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_timestamp_variants() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2024-05-01T12:30:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-05-01T12:30:00+00:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-05-01T09:30:00-03:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-05-01T12:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-05-01 12:30:00"), Some(expected));
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn parses_fractional_naive_timestamp() {
        let ts = parse_timestamp("2024-05-01T12:30:00.123456").unwrap();
        assert_eq!(ts.timestamp_subsec_micros(), 123456);
    }

    #[test]
    fn sensor_row_deserializes() {
        let row = serde_json::json!({
            "id": 7,
            "sensor_id": "ESP32-01",
            "name": "Server room",
            "status": "active",
            "user_id": "b1d6",
            "created_at": "2024-05-01T12:30:00.5+00:00",
            "firmware": "1.2.0"
        });
        let sensor: Sensor = serde_json::from_value(row).unwrap();
        assert_eq!(sensor.id, RowId::Int(7));
        assert!(sensor.is_online());
        assert!(sensor.created_at.is_some());
        assert_eq!(sensor.location, None);
    }

    #[test]
    fn unknown_status_is_offline() {
        let row = serde_json::json!({
            "id": "0d5c1c5e-8d8e-4a39-9d7b-2b0c7b1f0a11",
            "sensor_id": "ESP32-02",
            "name": "Cold room",
            "status": "maintenance"
        });
        let sensor: Sensor = serde_json::from_value(row).unwrap();
        assert_eq!(sensor.status, SensorStatus::Inactive);
        assert!(!sensor.is_online());
        assert_eq!(sensor.id.to_string(), "0d5c1c5e-8d8e-4a39-9d7b-2b0c7b1f0a11");
    }

    #[test]
    fn reading_rejects_bad_timestamp() {
        let row = serde_json::json!({"sensor_id": "a", "temperature": 21.5, "timestamp": "soon"});
        assert!(serde_json::from_value::<TemperatureReading>(row).is_err());
    }

    #[test]
    fn token_response_computes_expiry() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let body = serde_json::json!({
            "access_token": "a",
            "refresh_token": "r",
            "token_type": "bearer",
            "expires_in": 3600,
            "user": {"id": "u1", "email": "ops@example.com"}
        });
        let session = serde_json::from_value::<TokenResponse>(body)
            .unwrap()
            .into_session(now);
        assert_eq!(session.expires_at, now.timestamp() + 3600);
        assert!(!session.is_expired(now));
        assert!(session.is_expired(now + chrono::Duration::hours(1)));
    }
}
