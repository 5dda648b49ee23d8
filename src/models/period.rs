//! Reporting period
//!
//! Budget views cover either a calendar month or a calendar year. Membership is
//! decided on a transaction's effective date.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month or a calendar year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Period {
    /// A single month (e.g., "2025-03")
    Month { year: i32, month: u32 },

    /// A whole year (e.g., "2025")
    Year { year: i32 },
}

/// Which kind of period a view defaults to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    #[default]
    Month,
    Year,
}

impl Period {
    pub fn month(year: i32, month: u32) -> Self {
        Self::Month { year, month }
    }

    pub fn year(year: i32) -> Self {
        Self::Year { year }
    }

    /// The period containing `date`
    pub fn containing(kind: PeriodKind, date: NaiveDate) -> Self {
        match kind {
            PeriodKind::Month => Self::month(date.year(), date.month()),
            PeriodKind::Year => Self::year(date.year()),
        }
    }

    /// The current month in local time
    pub fn current_month() -> Self {
        Self::containing(PeriodKind::Month, chrono::Local::now().date_naive())
    }

    /// The current year in local time
    pub fn current_year() -> Self {
        Self::containing(PeriodKind::Year, chrono::Local::now().date_naive())
    }

    pub fn current(kind: PeriodKind) -> Self {
        match kind {
            PeriodKind::Month => Self::current_month(),
            PeriodKind::Year => Self::current_year(),
        }
    }

    /// First day of the period
    pub fn start_date(&self) -> NaiveDate {
        match *self {
            Self::Month { year, month } => NaiveDate::from_ymd_opt(year, month, 1)
                .unwrap_or(NaiveDate::MIN),
            Self::Year { year } => NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN),
        }
    }

    /// Last day of the period (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        match *self {
            Self::Month { year, month } => {
                let next_month = if month == 12 {
                    NaiveDate::from_ymd_opt(year + 1, 1, 1)
                } else {
                    NaiveDate::from_ymd_opt(year, month + 1, 1)
                };
                next_month
                    .map(|d| d - Duration::days(1))
                    .unwrap_or(NaiveDate::MAX)
            }
            Self::Year { year } => NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(NaiveDate::MAX),
        }
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        match *self {
            Self::Month { year, month } => date.year() == year && date.month() == month,
            Self::Year { year } => date.year() == year,
        }
    }

    pub fn kind(&self) -> PeriodKind {
        match self {
            Self::Month { .. } => PeriodKind::Month,
            Self::Year { .. } => PeriodKind::Year,
        }
    }

    /// Get the previous period of the same kind
    pub fn prev(&self) -> Self {
        match *self {
            Self::Month { year, month: 1 } => Self::month(year - 1, 12),
            Self::Month { year, month } => Self::month(year, month - 1),
            Self::Year { year } => Self::year(year - 1),
        }
    }

    /// Parse a period string
    ///
    /// Accepts "2025-03", "2025", "current"/"this-month", "this-year",
    /// "last"/"last-month" and "last-year".
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "current" | "this-month" | "month" => return Ok(Self::current_month()),
            "this-year" | "year" => return Ok(Self::current_year()),
            "last" | "last-month" => return Ok(Self::current_month().prev()),
            "last-year" => return Ok(Self::current_year().prev()),
            _ => {}
        }

        let invalid = || PeriodParseError::InvalidFormat(s.to_string());
        match s.split_once('-') {
            Some((year, month)) => {
                let year: i32 = year.parse().map_err(|_| invalid())?;
                let month: u32 = month.parse().map_err(|_| invalid())?;
                if !(1..=12).contains(&month) {
                    return Err(PeriodParseError::InvalidMonth(month));
                }
                Ok(Self::month(year, month))
            }
            None => {
                if s.len() != 4 {
                    return Err(invalid());
                }
                Ok(Self::year(s.parse().map_err(|_| invalid())?))
            }
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month { year, month } => write!(f, "{:04}-{:02}", year, month),
            Self::Year { year } => write!(f, "{:04}", year),
        }
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            Self::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        let period = Period::month(2024, 2);
        assert_eq!(period.start_date(), date(2024, 2, 1));
        assert_eq!(period.end_date(), date(2024, 2, 29));

        let december = Period::month(2025, 12);
        assert_eq!(december.end_date(), date(2025, 12, 31));
    }

    #[test]
    fn test_contains() {
        let march = Period::month(2025, 3);
        assert!(march.contains(date(2025, 3, 1)));
        assert!(march.contains(date(2025, 3, 31)));
        assert!(!march.contains(date(2025, 4, 1)));
        assert!(!march.contains(date(2024, 3, 15)));

        let year = Period::year(2025);
        assert!(year.contains(date(2025, 12, 31)));
        assert!(!year.contains(date(2026, 1, 1)));
    }

    #[test]
    fn test_prev() {
        assert_eq!(Period::month(2025, 1).prev(), Period::month(2024, 12));
        assert_eq!(Period::month(2025, 3).prev(), Period::month(2025, 2));
        assert_eq!(Period::year(2025).prev(), Period::year(2024));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Period::parse("2025-03").unwrap(), Period::month(2025, 3));
        assert_eq!(Period::parse("2025").unwrap(), Period::year(2025));
        assert_eq!(Period::parse("current").unwrap(), Period::current_month());
        assert_eq!(Period::parse("this-year").unwrap(), Period::current_year());
        assert_eq!(
            Period::parse("2025-13"),
            Err(PeriodParseError::InvalidMonth(13))
        );
        assert!(Period::parse("March").is_err());
        assert!(Period::parse("25").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Period::month(2025, 3).to_string(), "2025-03");
        assert_eq!(Period::year(2025).to_string(), "2025");
    }

    #[test]
    fn test_containing() {
        let d = date(2025, 7, 14);
        assert_eq!(Period::containing(PeriodKind::Month, d), Period::month(2025, 7));
        assert_eq!(Period::containing(PeriodKind::Year, d), Period::year(2025));
        assert_eq!(Period::month(2025, 7).kind(), PeriodKind::Month);
    }
}
