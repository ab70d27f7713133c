//! Reporting period representation
//!
//! Reports and exports filter transactions by period: a calendar month, a
//! calendar year, or an arbitrary inclusive date range.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A reporting period with inclusive date bounds
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ReportPeriod {
    /// Calendar month (e.g., "2025-01")
    Month { year: i32, month: u32 },

    /// Calendar year (e.g., "2025")
    Year { year: i32 },

    /// Arbitrary inclusive date range
    Range { start: NaiveDate, end: NaiveDate },
}

impl ReportPeriod {
    /// Create a monthly period
    pub fn month(year: i32, month: u32) -> Self {
        Self::Month { year, month }
    }

    /// Create a yearly period
    pub fn year(year: i32) -> Self {
        Self::Year { year }
    }

    /// Create a date-range period
    pub fn range(start: NaiveDate, end: NaiveDate) -> Self {
        Self::Range { start, end }
    }

    /// Get the current calendar month
    pub fn current_month() -> Self {
        let today = chrono::Local::now().date_naive();
        Self::Month {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Get the first date of this period
    pub fn start_date(&self) -> NaiveDate {
        match self {
            Self::Month { year, month } => NaiveDate::from_ymd_opt(*year, *month, 1)
                .unwrap_or_else(|| NaiveDate::from_ymd_opt(*year, 1, 1).unwrap()),
            Self::Year { year } => NaiveDate::from_ymd_opt(*year, 1, 1).unwrap(),
            Self::Range { start, .. } => *start,
        }
    }

    /// Get the last date of this period (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        match self {
            Self::Month { year, month } => {
                let next_month = if *month == 12 {
                    NaiveDate::from_ymd_opt(*year + 1, 1, 1)
                } else {
                    NaiveDate::from_ymd_opt(*year, *month + 1, 1)
                };
                next_month.unwrap() - Duration::days(1)
            }
            Self::Year { year } => NaiveDate::from_ymd_opt(*year, 12, 31).unwrap(),
            Self::Range { end, .. } => *end,
        }
    }

    /// Check if a date falls within this period (inclusive on both ends)
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }

    /// Parse a period string
    ///
    /// Formats:
    /// - Month: "2025-01"
    /// - Year: "2025"
    /// - Range: "2025-01-01..2025-01-15"
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();

        // Range format (contains ..)
        if s.contains("..") {
            let parts: Vec<&str> = s.split("..").collect();
            if parts.len() == 2 {
                let start = NaiveDate::parse_from_str(parts[0], "%Y-%m-%d")
                    .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
                let end = NaiveDate::parse_from_str(parts[1], "%Y-%m-%d")
                    .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
                if end < start {
                    return Err(PeriodParseError::EndBeforeStart { start, end });
                }
                return Ok(Self::Range { start, end });
            }
            return Err(PeriodParseError::InvalidFormat(s.to_string()));
        }

        // Month format (YYYY-MM)
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() == 2 {
            let year: i32 = parts[0]
                .parse()
                .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
            let month: u32 = parts[1]
                .parse()
                .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

            if !(1..=9999).contains(&year) {
                return Err(PeriodParseError::InvalidFormat(s.to_string()));
            }
            if !(1..=12).contains(&month) {
                return Err(PeriodParseError::InvalidMonth(month));
            }

            return Ok(Self::Month { year, month });
        }

        // Year format (YYYY)
        if parts.len() == 1 {
            if let Ok(year) = parts[0].parse::<i32>() {
                if (1..=9999).contains(&year) {
                    return Ok(Self::Year { year });
                }
            }
        }

        Err(PeriodParseError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month { year, month } => write!(f, "{:04}-{:02}", year, month),
            Self::Year { year } => write!(f, "{:04}", year),
            Self::Range { start, end } => {
                write!(
                    f,
                    "{}..{}",
                    start.format("%Y-%m-%d"),
                    end.format("%Y-%m-%d")
                )
            }
        }
    }
}

impl Ord for ReportPeriod {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.start_date().cmp(&other.start_date())
    }
}

impl PartialOrd for ReportPeriod {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
            PeriodParseError::EndBeforeStart { start, end } => {
                write!(f, "Period end {} is before start {}", end, start)
            }
        }
    }
}

impl std::error::Error for PeriodParseError {}
