use super::ParseError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The longest wire form this codec accepts:
/// `YYYY-MM-DDTHH:MM:SS.mmm+HH:MM`. Anything longer is rejected before
/// a parse is attempted.
const MAX_WIRE_LEN: usize = "2006-01-02T15:04:05.000+07:00".len();

/// A Notion date value that may or may not carry a time-of-day.
///
/// The API uses one string field for both bare dates (`2021-05-18`) and
/// full timestamps (`2021-05-18T17:50:22.371+01:00`). A plain timestamp
/// type cannot round-trip both shapes, so the has-time distinction is
/// kept alongside the instant and drives the encoded form.
///
/// Equality compares the instant AND the has-time flag: a bare date is
/// never equal to a midnight timestamp on the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateOrDateTime {
    value: DateTime<FixedOffset>,
    has_time: bool,
}

impl DateOrDateTime {
    /// A date-only value (midnight UTC internally, encodes without a
    /// time component).
    pub fn from_date(date: NaiveDate) -> Self {
        let midnight = date.and_time(NaiveTime::MIN);
        let utc = FixedOffset::east_opt(0).expect("zero offset is valid");
        Self {
            value: DateTime::from_naive_utc_and_offset(midnight, utc),
            has_time: false,
        }
    }

    /// A full timestamp value.
    pub fn from_datetime(value: DateTime<FixedOffset>) -> Self {
        Self {
            value,
            has_time: true,
        }
    }

    /// Whether the original wire value carried a time component.
    pub fn has_time(&self) -> bool {
        self.has_time
    }

    /// The underlying instant. For date-only values this is midnight UTC.
    pub fn date_time(&self) -> DateTime<FixedOffset> {
        self.value
    }

    /// The calendar date in the value's own offset.
    pub fn date(&self) -> NaiveDate {
        self.value.date_naive()
    }

    /// Encode back to the wire form: date-only when no time component
    /// was present, full RFC3339 timestamp otherwise.
    pub fn to_wire(&self) -> String {
        if self.has_time {
            self.value.to_rfc3339_opts(SecondsFormat::Millis, false)
        } else {
            self.value.format("%Y-%m-%d").to_string()
        }
    }
}

impl FromStr for DateOrDateTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() > MAX_WIRE_LEN {
            return Err(ParseError::InvalidDateTime(format!(
                "value too long for a date or timestamp: {}",
                s
            )));
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self {
                value: dt,
                has_time: true,
            });
        }

        match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(date) => Ok(Self::from_date(date)),
            Err(_) => Err(ParseError::InvalidDateTime(s.to_string())),
        }
    }
}

impl fmt::Display for DateOrDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_wire())
    }
}

impl Serialize for DateOrDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_wire().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DateOrDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_date_only_round_trip() {
        let v: DateOrDateTime = "2021-05-18".parse().unwrap();
        assert!(!v.has_time());
        assert_eq!(v.to_wire(), "2021-05-18");
    }

    #[test]
    fn test_timestamp_round_trip() {
        let v: DateOrDateTime = "2021-05-18T17:50:22.371+01:00".parse().unwrap();
        assert!(v.has_time());
        assert_eq!(v.to_wire(), "2021-05-18T17:50:22.371+01:00");
    }

    #[test]
    fn test_utc_timestamp_preserves_instant() {
        let v: DateOrDateTime = "2021-05-18T17:50:22.371Z".parse().unwrap();
        let reparsed: DateOrDateTime = v.to_wire().parse().unwrap();
        assert_eq!(v.date_time(), reparsed.date_time());
    }

    #[test]
    fn test_date_not_equal_to_midnight_timestamp() {
        let date: DateOrDateTime = "2021-05-18".parse().unwrap();
        let midnight: DateOrDateTime = "2021-05-18T00:00:00.000+00:00".parse().unwrap();
        assert_eq!(date.date_time(), midnight.date_time());
        assert_ne!(date, midnight);
    }

    #[test]
    fn test_overlong_input_rejected() {
        let err = "2021-05-18T17:50:22.371999999+01:00"
            .parse::<DateOrDateTime>()
            .unwrap_err();
        assert!(matches!(err, ParseError::InvalidDateTime(_)));
    }

    #[test]
    fn test_malformed_input_rejected() {
        assert!("not-a-date".parse::<DateOrDateTime>().is_err());
        assert!("2021-13-40".parse::<DateOrDateTime>().is_err());
    }

    #[test]
    fn test_serde_string_form() {
        let v: DateOrDateTime = serde_json::from_str("\"2021-05-18\"").unwrap();
        assert_eq!(serde_json::to_string(&v).unwrap(), "\"2021-05-18\"");
    }
}
