//! Shared date handling used by request models and filters
//!
//! Clients send dates in several shapes: full RFC 3339 timestamps, naive
//! `YYYY-MM-DDTHH:MM:SS` timestamps (treated as UTC) and plain dates
//! (midnight UTC).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{de::Error as _, Deserialize, Deserializer};

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parse a client supplied instant into UTC
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parse a client supplied birth date; timestamps are reduced to their UTC date
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .or_else(|| parse_instant(raw).map(|dt| dt.date_naive()))
}

pub fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid date: {}", raw)))
}

pub fn deserialize_optional_instant<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_instant(value)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {}", value))),
    }
}

/// Optional string where a blank value means absent
pub fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|value| !value.trim().is_empty()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrText {
    Int(i32),
    Text(String),
}

/// Optional integer from JSON numbers or query strings; blank means absent
pub fn deserialize_optional_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntOrText::Int(value)) => Ok(Some(value)),
        Some(IntOrText::Text(raw)) => match raw.trim() {
            "" => Ok(None),
            value => value
                .parse()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("invalid integer: {}", value))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_rfc3339_with_offset_into_utc() {
        let dt = parse_instant("2024-03-01T01:30:00+02:00").unwrap();
        assert_eq!(dt.day(), 29);
        assert_eq!(dt.hour(), 23);
    }

    #[test]
    fn parses_naive_timestamp_and_plain_date() {
        let naive = parse_instant("2024-03-01T08:15:00").unwrap();
        assert_eq!(naive.hour(), 8);

        let plain = parse_instant("2024-03-01").unwrap();
        assert_eq!(plain.hour(), 0);
        assert_eq!(plain.day(), 1);
    }

    #[test]
    fn birth_date_accepts_timestamps() {
        assert_eq!(parse_date("1990-07-31"), NaiveDate::from_ymd_opt(1990, 7, 31));
        assert_eq!(parse_date("1990-07-31T00:00:00"), NaiveDate::from_ymd_opt(1990, 7, 31));
        assert_eq!(parse_date("1990-08-01T01:00:00+03:00"), NaiveDate::from_ymd_opt(1990, 7, 31));
        assert_eq!(parse_date("yesterday"), None);
    }

    #[derive(Debug, Deserialize)]
    struct Bounds {
        #[serde(default, deserialize_with = "deserialize_optional_i32")]
        min: Option<i32>,
    }

    #[test]
    fn optional_integer_accepts_numbers_strings_and_blanks() {
        let parse = |v: serde_json::Value| serde_json::from_value::<Bounds>(v).map(|b| b.min);

        assert_eq!(parse(serde_json::json!({ "min": 16 })).unwrap(), Some(16));
        assert_eq!(parse(serde_json::json!({ "min": " 42 " })).unwrap(), Some(42));
        assert_eq!(parse(serde_json::json!({ "min": "" })).unwrap(), None);
        assert_eq!(parse(serde_json::json!({ "min": null })).unwrap(), None);
        assert_eq!(parse(serde_json::json!({})).unwrap(), None);
        assert!(parse(serde_json::json!({ "min": "abc" })).is_err());
    }
}
