//! Booking records as served by the FeelTheBook backend.
//!
//! A booking is a closed reservation interval `[registration_time,
//! expiration_time]` on one room. The evaluator never mutates bookings;
//! it consumes an immutable snapshot fetched per room selection.

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, SlotError};

/// One existing reservation on a room.
///
/// The backend embeds more fields per booking (the attached `users` list,
/// joined room data); everything beyond what admissibility needs is ignored
/// on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    #[serde(with = "instant")]
    pub registration_time: DateTime<Utc>,
    #[serde(with = "instant")]
    pub expiration_time: DateTime<Utc>,
    #[serde(default)]
    pub registrator_email: String,
    #[serde(default)]
    pub room_id: i64,
}

impl Booking {
    /// The interval this booking blocks for availability purposes:
    /// `[registration_time - gap, expiration_time + gap]`, both endpoints
    /// inclusive.
    pub fn padded(&self, gap: Duration) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.registration_time - gap, self.expiration_time + gap)
    }
}

/// Parse one ISO-8601 timestamp into a UTC instant.
///
/// Accepts RFC 3339 (`2024-01-10T10:00:00Z`, with or without fractional
/// seconds or an offset suffix) as well as the backend's offset-less form
/// (`2024-01-10T10:00:00`), which is taken as UTC — the product runs on a
/// single consistent offset end-to-end.
pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }
    Err(SlotError::InvalidTimestamp(raw.to_string()))
}

/// Deserialize a JSON array of bookings, as returned by
/// `GET /bookings/forRoom/{id}`.
pub fn bookings_from_json(json: &str) -> Result<Vec<Booking>> {
    serde_json::from_str(json).map_err(|e| SlotError::MalformedBookings(e.to_string()))
}

/// Serde adapter for the backend's timestamp strings.
mod instant {
    use super::*;

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, ser: S) -> std::result::Result<S::Ok, S::Error> {
        ser.serialize_str(&dt.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> std::result::Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(de)?;
        parse_instant(&raw).map_err(serde::de::Error::custom)
    }
}
