//! `due_date` codec: `YYYY-MM-DD` on the wire, `Option<NaiveDate>` in memory.
//!
//! `None` is the unset calendar value. An empty string from the server also
//! decodes to `None`.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

pub const WIRE_FORMAT: &str = "%Y-%m-%d";

pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(date) => serializer.serialize_str(&date.format(WIRE_FORMAT).to_string()),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => parse(text).map(Some).map_err(serde::de::Error::custom),
    }
}

/// Parse a wire date, accepting a full RFC 3339 timestamp by truncating to the day.
pub fn parse(text: &str) -> Result<NaiveDate, chrono::ParseError> {
    let day = text.get(..10).unwrap_or(text);
    NaiveDate::parse_from_str(day, WIRE_FORMAT)
}
