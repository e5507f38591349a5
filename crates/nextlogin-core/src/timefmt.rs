//! ISO-8601 UTC rendering and parsing for login and prediction timestamps.
//!
//! Output is always second precision with a `Z` suffix. Input accepts any
//! RFC 3339 offset (normalized to UTC) or a naive date-time assumed to be UTC.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::constants::ISO_UTC_FORMAT;
use crate::errors::IngestError;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Render an instant as `YYYY-MM-DDTHH:MM:SSZ`.
pub fn format(instant: &DateTime<Utc>) -> String {
    instant.format(ISO_UTC_FORMAT).to_string()
}

/// Parse a login timestamp string.
pub fn parse(value: &str) -> Result<DateTime<Utc>, IngestError> {
    let trimmed = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| IngestError::InvalidTimestamp {
            value: value.to_string(),
        })
}

/// Build a UTC instant from epoch seconds. `None` when out of chrono's range.
pub fn from_epoch(secs: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(secs, 0).single()
}

/// Serde adapter for `DateTime<Utc>` fields using the output layout.
pub mod iso_seconds {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(instant: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format(instant))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for `Option<DateTime<Utc>>` fields; `None` renders as `null`.
pub mod iso_seconds_option {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        instant: &Option<DateTime<Utc>>,
        s: S,
    ) -> Result<S::Ok, S::Error> {
        match instant {
            Some(instant) => s.serialize_str(&super::format(instant)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        raw.map(|value| super::parse(&value).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_normalize_to_utc() {
        let parsed = parse("2024-03-04T11:30:00+02:00").unwrap();
        assert_eq!(format(&parsed), "2024-03-04T09:30:00Z");
    }

    #[test]
    fn naive_strings_are_treated_as_utc() {
        assert_eq!(
            format(&parse("2024-03-04 09:30:00").unwrap()),
            "2024-03-04T09:30:00Z"
        );
        assert_eq!(
            format(&parse("2024-03-04T09:30:00").unwrap()),
            "2024-03-04T09:30:00Z"
        );
    }

    #[test]
    fn fractional_seconds_are_dropped_on_output() {
        let parsed = parse("2024-03-04T09:30:00.750Z").unwrap();
        assert_eq!(format(&parsed), "2024-03-04T09:30:00Z");
    }

    #[test]
    fn garbage_is_rejected() {
        let err = parse("last tuesday").unwrap_err();
        assert!(err.to_string().contains("last tuesday"));
    }
}
