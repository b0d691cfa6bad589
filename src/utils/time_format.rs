use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, TimeZone};
use serde::{self, Deserialize, Deserializer, Serializer, de::Error};

/// Offset-less layout written by earlier versions of the tool.
const LEGACY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub fn serialize<S>(date: &DateTime<Local>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(date))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Local>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_timestamp(&s).map_err(Error::custom)
}

/// Same as the parent module, for `Option<DateTime<Local>>` fields.
pub mod optional {
    use super::*;

    pub fn serialize<S>(date: &Option<DateTime<Local>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&format_timestamp(date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Local>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        s.map(|s| parse_timestamp(&s).map_err(Error::custom))
            .transpose()
    }
}

pub fn format_timestamp(date: &DateTime<Local>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Micros, false)
}

pub fn parse_timestamp(s: &str) -> Result<DateTime<Local>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Local));
    }

    // Older timer files carry naive local time.
    let naive = NaiveDateTime::parse_from_str(s, LEGACY_FORMAT)
        .map_err(|e| format!("invalid timestamp '{}': {}", s, e))?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| format!("timestamp '{}' does not exist in the local timezone", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let parsed = parse_timestamp("2024-03-01T10:15:30.000250+00:00").unwrap();
        let utc = parsed.with_timezone(&chrono::Utc);
        assert_eq!(utc.hour(), 10);
        assert_eq!(utc.minute(), 15);
        assert_eq!(utc.nanosecond(), 250_000);
    }

    #[test]
    fn test_parse_legacy_naive_timestamp() {
        let parsed = parse_timestamp("2024-03-01T10:15:30.123456").unwrap();
        assert_eq!(parsed.day(), 1);
        assert_eq!(parsed.hour(), 10);
        assert_eq!(parsed.second(), 30);

        let without_fraction = parse_timestamp("2024-03-01T10:15:30").unwrap();
        assert_eq!(without_fraction.minute(), 15);
    }

    #[test]
    fn test_parse_garbage_is_rejected() {
        assert!(parse_timestamp("yesterday-ish").is_err());
    }

    #[test]
    fn test_format_then_parse_keeps_instant() {
        let now = Local::now();
        let parsed = parse_timestamp(&format_timestamp(&now)).unwrap();
        assert_eq!(parsed.timestamp_micros(), now.timestamp_micros());
    }
}
