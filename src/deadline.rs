//! Application deadline parsing and open/closed classification.
//!
//! Deadlines are written `DD/MM/YYYY`. A deadline that does not match that
//! pattern exactly, or names a date that does not exist, is [`Deadline::Invalid`].
//! Invalid deadlines are never open and order after every valid one.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Serialize, Serializer};

/// A parsed application deadline.
///
/// Variant order matters: the derived [`Ord`] puts every `At` before `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Deadline {
    /// Midnight UTC at the start of the deadline day.
    At(DateTime<Utc>),
    Invalid,
}

impl Deadline {
    /// Parses a strict `DD/MM/YYYY` string.
    pub fn parse(raw: &str) -> Self {
        parse_date(raw.trim())
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Deadline::At(naive.and_utc()))
            .unwrap_or(Deadline::Invalid)
    }

    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Deadline::At(at) => Some(*at),
            Deadline::Invalid => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Deadline::At(_))
    }

    /// Open means strictly after `reference`; a deadline equal to it is closed.
    pub fn is_open_at(&self, reference: DateTime<Utc>) -> bool {
        match self {
            Deadline::At(at) => *at > reference,
            Deadline::Invalid => false,
        }
    }
}

impl Serialize for Deadline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.instant().serialize(serializer)
    }
}

/// Parses a deadline and classifies it against `reference` in one step.
pub fn classify(raw: &str, reference: DateTime<Utc>) -> (Deadline, bool) {
    let deadline = Deadline::parse(raw);
    let is_open = deadline.is_open_at(reference);
    (deadline, is_open)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let mut parts = raw.split('/');
    let day = digits(parts.next()?, 2)?;
    let month = digits(parts.next()?, 2)?;
    let year = digits(parts.next()?, 4)?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year as i32, month, day)
}

fn digits(part: &str, width: usize) -> Option<u32> {
    if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_valid_deadline() {
        assert_eq!(Deadline::parse("15/06/2024"), Deadline::At(utc(2024, 6, 15)));
        assert_eq!(Deadline::parse(" 01/01/2000 "), Deadline::At(utc(2000, 1, 1)));
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        for raw in [
            "",
            "1/6/2024",
            "2024-06-15",
            "15/06/24",
            "15-06-2024",
            "15/06/2024/1",
            "aa/bb/cccc",
            "+1/06/2024",
            "06/15/2024",
        ] {
            assert_eq!(Deadline::parse(raw), Deadline::Invalid, "{raw:?}");
        }
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert_eq!(Deadline::parse("30/02/2024"), Deadline::Invalid);
        assert_eq!(Deadline::parse("29/02/2023"), Deadline::Invalid);
        assert!(Deadline::parse("29/02/2024").is_valid());
    }

    #[test]
    fn test_open_is_strictly_after_reference() {
        let deadline = Deadline::parse("01/01/2024");
        assert!(deadline.is_open_at(utc(2023, 12, 31)));
        assert!(!deadline.is_open_at(utc(2024, 1, 1)));
        assert!(!deadline.is_open_at(utc(2024, 1, 2)));
    }

    #[test]
    fn test_invalid_is_closed_and_sorts_last() {
        assert!(!Deadline::Invalid.is_open_at(utc(1970, 1, 1)));
        assert!(Deadline::At(utc(9999, 12, 31)) < Deadline::Invalid);
    }

    #[test]
    fn test_classify() {
        let (deadline, open) = classify("01/01/2099", utc(2024, 1, 1));
        assert!(deadline.is_valid());
        assert!(open);

        let (deadline, open) = classify("not a date", utc(2024, 1, 1));
        assert_eq!(deadline, Deadline::Invalid);
        assert!(!open);
    }

    #[test]
    fn test_serializes_as_optional_timestamp() {
        let json = serde_json::to_string(&Deadline::Invalid).unwrap();
        assert_eq!(json, "null");

        let json = serde_json::to_string(&Deadline::parse("01/01/2024")).unwrap();
        assert_eq!(json, "\"2024-01-01T00:00:00Z\"");
    }
}
