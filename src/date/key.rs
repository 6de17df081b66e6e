//! Calendar date key used to scope scans.
//!
//! A date is three plain integers parsed from a `YYYY-MM-DD` string.
//! Ordering is purely lexicographic on (year, month, day); no calendar
//! arithmetic happens anywhere in this module.

use std::fmt;
use std::str::FromStr;

use super::errors::{DateFormatError, DateResult};

/// A calendar date as plain (year, month, day) integers.
///
/// The derived ordering compares year, then month, then day. Field
/// declaration order is load-bearing for the derive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl DateKey {
    /// Creates a date key from raw fields. No range checks.
    pub fn new(year: u32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Parses a `YYYY-MM-DD` string into its three integer fields.
    ///
    /// Accepts any three hyphen-separated integer fields; range
    /// enforcement belongs to [`DateKey::validate`] alone, so
    /// `parse("02-02-2002")` succeeds as (2, 2, 2002).
    pub fn parse(s: &str) -> DateResult<Self> {
        let mut fields = s.split('-');
        let (Some(year), Some(month), Some(day), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(DateFormatError::field_count(s));
        };

        Ok(Self {
            year: parse_field(s, year)?,
            month: parse_field(s, month)?,
            day: parse_field(s, day)?,
        })
    }

    /// Checks `s` against the canonical `YYYY-MM-DD` form: three
    /// all-digit fields of width 4, 2, 2, with year in [1,9999], month
    /// in [1,12], and day in [1,31].
    ///
    /// Impossible combinations such as day 31 in a 30-day month are NOT
    /// rejected; callers must not assume a validated string is a real
    /// calendar date.
    pub fn validate(s: &str) -> bool {
        let mut fields = s.split('-');
        let (Some(year), Some(month), Some(day), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return false;
        };

        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return false;
        }
        if ![year, month, day]
            .iter()
            .all(|f| f.chars().all(|c| c.is_ascii_digit()))
        {
            return false;
        }

        let Ok(date) = Self::parse(s) else {
            return false;
        };
        (1..=9999).contains(&date.year)
            && (1..=12).contains(&date.month)
            && (1..=31).contains(&date.day)
    }
}

fn parse_field(input: &str, field: &str) -> DateResult<u32> {
    field
        .parse()
        .map_err(|_| DateFormatError::non_integer(input, field))
}

impl FromStr for DateKey {
    type Err = DateFormatError;

    fn from_str(s: &str) -> DateResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical() {
        assert_eq!(DateKey::parse("2000-01-01").unwrap(), DateKey::new(2000, 1, 1));
        assert_eq!(
            DateKey::parse("2019-08-01").unwrap(),
            DateKey::new(2019, 8, 1)
        );
    }

    #[test]
    fn test_parse_is_range_agnostic() {
        // Three integer fields always parse; only validate enforces ranges.
        assert_eq!(DateKey::parse("02-02-2002").unwrap(), DateKey::new(2, 2, 2002));
        assert_eq!(DateKey::parse("03-03-0003").unwrap(), DateKey::new(3, 3, 3));
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        assert_eq!(
            DateKey::parse("elephant").unwrap_err(),
            DateFormatError::field_count("elephant")
        );
        assert!(DateKey::parse("").is_err());
        assert!(DateKey::parse("2000-01").is_err());
        assert!(DateKey::parse("2000-01-01-05").is_err());
    }

    #[test]
    fn test_parse_rejects_non_integer_fields() {
        assert_eq!(
            DateKey::parse("elephant-giraff-tiger").unwrap_err(),
            DateFormatError::non_integer("elephant-giraff-tiger", "elephant")
        );
        assert!(DateKey::parse("2000-ab-01").is_err());
    }

    #[test]
    fn test_validate_accepts_canonical_dates() {
        assert!(DateKey::validate("2000-01-01"));
        assert!(DateKey::validate("2019-08-01"));
        assert!(DateKey::validate("9999-12-31"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_fields() {
        assert!(!DateKey::validate("2000-41-01"));
        assert!(!DateKey::validate("2000-00-01"));
        assert!(!DateKey::validate("2000-01-00"));
        assert!(!DateKey::validate("2000-01-32"));
        assert!(!DateKey::validate("0000-01-01"));
    }

    #[test]
    fn test_validate_rejects_non_canonical_field_widths() {
        assert!(!DateKey::validate("01-01-2000"));
        assert!(!DateKey::validate("01-01-0001"));
        assert!(!DateKey::validate("2000-1-1"));
    }

    #[test]
    fn test_validate_rejects_garbage() {
        assert!(!DateKey::validate("orange"));
        assert!(!DateKey::validate(""));
        assert!(!DateKey::validate("2000-01-01 00:00:00"));
    }

    #[test]
    fn test_validate_keeps_impossible_calendar_dates() {
        // Day-of-month is never checked against month length.
        assert!(DateKey::validate("2019-02-31"));
        assert!(DateKey::validate("2019-04-31"));
    }

    #[test]
    fn test_ordering_is_lexicographic_on_fields() {
        let a = DateKey::new(2019, 7, 31);
        let b = DateKey::new(2019, 8, 1);
        let c = DateKey::new(2020, 1, 1);
        assert!(a < b);
        assert!(b < c);
        assert!(a < c);
        assert_eq!(b, DateKey::parse("2019-08-01").unwrap());
    }

    #[test]
    fn test_ordering_trichotomy() {
        let dates = [
            DateKey::new(1999, 12, 31),
            DateKey::new(2000, 1, 1),
            DateKey::new(2000, 1, 2),
            DateKey::new(2000, 2, 1),
            DateKey::new(2001, 1, 1),
        ];
        for a in &dates {
            for b in &dates {
                let holds = [a < b, a == b, a > b];
                assert_eq!(holds.iter().filter(|&&h| h).count(), 1);
            }
        }
    }

    #[test]
    fn test_ordering_transitivity() {
        let dates = [
            DateKey::new(1999, 12, 31),
            DateKey::new(2000, 1, 1),
            DateKey::new(2000, 6, 15),
            DateKey::new(2001, 1, 1),
        ];
        for a in &dates {
            for b in &dates {
                for c in &dates {
                    if a < b && b < c {
                        assert!(a < c);
                    }
                }
            }
        }
    }

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(DateKey::new(2019, 8, 1).to_string(), "2019-08-01");
        assert_eq!(DateKey::new(3, 3, 3).to_string(), "0003-03-03");
    }

    #[test]
    fn test_from_str_round_trip() {
        let date: DateKey = "2019-08-01".parse().unwrap();
        assert_eq!(date.to_string(), "2019-08-01");
    }
}
