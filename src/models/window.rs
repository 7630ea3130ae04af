//! Date window model.
//!
//! This module contains the [`DateWindow`] type, a closed calendar interval
//! over which rate plans are compared.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A closed date interval `[from, to]`, both ends inclusive.
///
/// A window can only be constructed with `from <= to`; this holds for
/// deserialized windows as well.
///
/// # Example
///
/// ```
/// use rate_plan_engine::models::DateWindow;
/// use chrono::NaiveDate;
///
/// let window = DateWindow::new(
///     NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 8, 3).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(window.len_days(), 3);
/// assert!(window.contains(NaiveDate::from_ymd_opt(2025, 8, 2).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct DateWindow {
    from: NaiveDate,
    to: NaiveDate,
}

#[derive(Deserialize)]
struct RawWindow {
    from: NaiveDate,
    to: NaiveDate,
}

impl TryFrom<RawWindow> for DateWindow {
    type Error = EngineError;

    fn try_from(raw: RawWindow) -> EngineResult<Self> {
        DateWindow::new(raw.from, raw.to)
    }
}

impl DateWindow {
    /// Creates a window, failing with [`EngineError::InvalidWindow`] if
    /// `from` is after `to`.
    pub fn new(from: NaiveDate, to: NaiveDate) -> EngineResult<Self> {
        if from > to {
            return Err(EngineError::InvalidWindow { from, to });
        }
        Ok(Self { from, to })
    }

    /// Creates a window covering exactly one date.
    pub fn single_day(date: NaiveDate) -> Self {
        Self { from: date, to: date }
    }

    /// The first date of the window.
    pub fn start(&self) -> NaiveDate {
        self.from
    }

    /// The last date of the window.
    pub fn end(&self) -> NaiveDate {
        self.to
    }

    /// Number of calendar dates in the window (always at least 1).
    pub fn len_days(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }

    /// Checks whether `date` falls inside the window (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }

    /// Iterates every calendar date in the window in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let to = self.to;
        self.from.iter_days().take_while(move |d| *d <= to)
    }
}

impl std::fmt::Display for DateWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.from, self.to)
    }
}
