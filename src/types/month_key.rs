//! Typed keys for the wide per-month measurement columns of a lake table.
//!
//! The source tables encode dates in column names (`"1990_01"` means January
//! 1990). Names are parsed exactly once, at load time, into [`MonthKey`]s; all
//! later queries work on the typed form instead of re-inspecting strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// A (year, month) pair identifying one monthly measurement column.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// Parses a trimmed column name of the form `<4-digit-year><sep><2-digit-month>`
    /// (e.g. `"2003_07"`). The separator character is not validated, matching the
    /// source tables which have used `_` and `-` interchangeably.
    ///
    /// Returns `None` for anything that does not fit the pattern, including
    /// months outside `[01, 12]`. Callers treat `None` as "not a month column",
    /// never as an error.
    pub fn parse(name: &str) -> Option<MonthKey> {
        if name.len() != 7 || !name.is_char_boundary(4) || !name.is_char_boundary(5) {
            return None;
        }
        let year: i32 = name[..4].parse().ok()?;
        let month: u32 = name[5..].parse().ok()?;
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(MonthKey { year, month })
    }

    /// The first calendar day of this month, the x-coordinate the chart uses.
    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl Display for MonthKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// One recognized month column: its original (trimmed) name in the table,
/// its typed key, and the precomputed first-of-month date.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthColumn {
    pub name: String,
    pub key: MonthKey,
    pub date: NaiveDate,
}

impl MonthColumn {
    /// Builds a `MonthColumn` from a trimmed column name, or `None` when the
    /// name does not encode a valid (year, month).
    pub fn from_name(name: &str) -> Option<MonthColumn> {
        let key = MonthKey::parse(name)?;
        let date = key.first_day()?;
        Some(MonthColumn {
            name: name.to_string(),
            key,
            date,
        })
    }
}

/// An inclusive year range used to narrow which month columns participate in a
/// series query.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }
}

impl Display for YearRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:04}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_underscore_separated_name() {
        let key = MonthKey::parse("2003_07").unwrap();
        assert_eq!(key.year, 2003);
        assert_eq!(key.month, 7);
        assert_eq!(
            key.first_day().unwrap(),
            NaiveDate::from_ymd_opt(2003, 7, 1).unwrap()
        );
    }

    #[test]
    fn separator_is_not_validated() {
        assert_eq!(
            MonthKey::parse("1990-12"),
            Some(MonthKey {
                year: 1990,
                month: 12
            })
        );
    }

    #[test]
    fn rejects_malformed_names() {
        assert_eq!(MonthKey::parse("Lake_id"), None);
        assert_eq!(MonthKey::parse("1990_13"), None);
        assert_eq!(MonthKey::parse("1990_00"), None);
        assert_eq!(MonthKey::parse("199_011"), None);
        assert_eq!(MonthKey::parse("1990_1"), None);
        assert_eq!(MonthKey::parse("Jul-Oct_Pe"), None);
        assert_eq!(MonthKey::parse(""), None);
    }

    #[test]
    fn month_column_carries_first_day() {
        let col = MonthColumn::from_name("1991_02").unwrap();
        assert_eq!(col.name, "1991_02");
        assert_eq!(col.date, NaiveDate::from_ymd_opt(1991, 2, 1).unwrap());
    }

    #[test]
    fn year_range_bounds_are_inclusive() {
        let range = YearRange::new(2000, 2005);
        assert!(range.contains(2000));
        assert!(range.contains(2005));
        assert!(!range.contains(1999));
        assert!(!range.contains(2006));
    }
}
