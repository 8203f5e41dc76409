//! Review window computation.
//!
//! One sweep covers a single calendar-month QA cycle. The period tag
//! identifies that cycle for ticket tagging and dedup lookup; the cutoff
//! is the earliest edit timestamp still eligible this cycle.

use chrono::{DateTime, Datelike, Duration, Months, NaiveTime, Utc};
use thiserror::Error;

use crate::config::WindowRange;

#[derive(Debug, Error)]
pub enum WindowError {
    #[error("Unrecognized window unit {0:?} (expected \"months\", \"weeks\" or \"days\")")]
    UnknownUnit(String),

    #[error("Date arithmetic out of range for window of {value} {unit}")]
    DateOutOfRange { unit: String, value: u32 },
}

/// Recognized units for the relative review window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowUnit {
    Months,
    Weeks,
    Days,
}

impl WindowUnit {
    /// Parse the configured unit string. Anything unrecognized is a fatal
    /// configuration error that aborts the sweep.
    pub fn parse(unit: &str) -> Result<Self, WindowError> {
        match unit {
            "months" => Ok(Self::Months),
            "weeks" => Ok(Self::Weeks),
            "days" => Ok(Self::Days),
            other => Err(WindowError::UnknownUnit(other.to_string())),
        }
    }
}

/// The computed window for one sweep.
#[derive(Debug, Clone)]
pub struct ReviewWindow {
    /// Tag for the current calendar-month cycle, e.g. `qa-review-2026-08-01`.
    pub period_tag: String,
    /// Human-readable current date for ticket bodies, e.g. "7 August 2026".
    pub date_label: String,
    /// Earliest edit instant still eligible. Comparison is strict: an edit
    /// at exactly the cutoff does not qualify.
    pub cutoff: DateTime<Utc>,
}

impl ReviewWindow {
    /// Compute the window for the cycle containing `now`.
    ///
    /// Months subtract whole calendar months and truncate to the first day
    /// of the resulting month; weeks and days subtract at day granularity.
    pub fn compute(now: DateTime<Utc>, range: &WindowRange) -> Result<Self, WindowError> {
        let unit = WindowUnit::parse(&range.unit)?;

        let out_of_range = || WindowError::DateOutOfRange {
            unit: range.unit.clone(),
            value: range.value,
        };

        let first_of_month = now.date_naive().with_day(1).ok_or_else(out_of_range)?;
        let period_tag = format!("qa-review-{}", first_of_month.format("%Y-%m-%d"));
        let date_label = now.format("%-d %B %Y").to_string();

        let cutoff = match unit {
            WindowUnit::Months => {
                let shifted = now
                    .date_naive()
                    .checked_sub_months(Months::new(range.value))
                    .and_then(|d| d.with_day(1))
                    .ok_or_else(out_of_range)?;
                shifted.and_time(NaiveTime::MIN).and_utc()
            }
            WindowUnit::Weeks => now
                .checked_sub_signed(Duration::days(7 * i64::from(range.value)))
                .ok_or_else(out_of_range)?,
            WindowUnit::Days => now
                .checked_sub_signed(Duration::days(i64::from(range.value)))
                .ok_or_else(out_of_range)?,
        };

        Ok(Self {
            period_tag,
            date_label,
            cutoff,
        })
    }
}
