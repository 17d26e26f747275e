use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer, de};

/// Render a timestamp in the textual layout used for storage.
///
/// Every value has the same width and a fixed `+00:00` offset, so string
/// comparison in the database matches chronological order.
pub fn to_storage(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, false)
}

pub fn from_storage(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw).map(|ts| ts.with_timezone(&Utc))
}

/// Serde adapter: `#[serde(with = "crate::utils::timestamp")]`
pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_storage(ts))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    from_storage(&raw).map_err(de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn storage_form_has_fixed_offset_and_micros() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 19, 8, 15, 0).unwrap();
        assert_eq!(to_storage(&ts), "2026-10-19T08:15:00.000000+00:00");
    }

    #[test]
    fn storage_form_parses_back() {
        let ts = Utc::now();
        let parsed = from_storage(&to_storage(&ts)).unwrap();
        // microsecond precision is kept, nanoseconds are dropped
        assert!((ts - parsed).num_microseconds().unwrap().abs() < 1);
    }

    #[test]
    fn accepts_other_offsets() {
        let parsed = from_storage("2026-10-19T10:15:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 10, 19, 8, 15, 0).unwrap());
    }

    #[test]
    fn text_order_matches_time_order() {
        let base = Utc.with_ymd_and_hms(2026, 1, 9, 23, 59, 59).unwrap();
        let later = [
            base + Duration::microseconds(1),
            base + Duration::seconds(1),
            base + Duration::days(1),
            base + Duration::days(400),
        ];
        for ts in later {
            assert!(to_storage(&base) < to_storage(&ts));
        }
    }
}
