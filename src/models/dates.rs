use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Parses the date shapes the backend emits: RFC 3339, naive ISO
/// timestamps and bare `YYYY-MM-DD` dates (taken as UTC midnight).
pub fn parse_flexible(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Calendar day of `date` as seen in `tz`. Exact UTC midnights are
/// date-only values and keep their own day.
pub fn calendar_date_in<Tz: TimeZone>(date: DateTime<Utc>, tz: &Tz) -> NaiveDate {
    if date.time() == NaiveTime::MIN {
        return date.date_naive();
    }
    date.with_timezone(tz).date_naive()
}

/// Calendar day in the local timezone, the one `today` is taken in.
pub fn local_date(date: DateTime<Utc>) -> NaiveDate {
    calendar_date_in(date, &Local)
}

/// Serde adapter for optional dates in any of the shapes above.
pub mod flexible_date {
    use chrono::{DateTime, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => super::parse_flexible(&s)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid date: {}", s))),
        }
    }

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_some(&date.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, FixedOffset, Timelike};

    #[test]
    fn parses_plain_date_as_midnight() {
        let parsed = parse_flexible("2026-10-20").unwrap();
        assert_eq!(parsed.day(), 20);
        assert_eq!(parsed.hour(), 0);
    }

    #[test]
    fn parses_rfc3339_and_naive_timestamps() {
        assert!(parse_flexible("2026-10-20T10:15:00.000Z").is_some());
        assert!(parse_flexible("2026-10-20T10:15:00+02:00").is_some());
        assert!(parse_flexible("2026-10-20T10:15:00.123").is_some());
    }

    #[test]
    fn calendar_date_follows_the_viewer_timezone() {
        let new_york = FixedOffset::west_opt(5 * 3600).unwrap();
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();

        let late_utc = parse_flexible("2026-10-16T02:30:00Z").unwrap();
        assert_eq!(calendar_date_in(late_utc, &new_york), NaiveDate::from_ymd_opt(2026, 10, 15).unwrap());
        assert_eq!(calendar_date_in(late_utc, &tokyo), NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());

        let evening_utc = parse_flexible("2026-10-16T18:00:00Z").unwrap();
        assert_eq!(calendar_date_in(evening_utc, &tokyo), NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());

        // Date-only values never drift a day
        let date_only = parse_flexible("2026-10-16").unwrap();
        assert_eq!(calendar_date_in(date_only, &new_york), NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        assert_eq!(calendar_date_in(date_only, &tokyo), NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_flexible("next tuesday").is_none());
        assert!(parse_flexible("   ").is_none());
    }
}
