//! Calendar month without a year
//!
//! Budgets are keyed by month number alone and are always read against a
//! year supplied by the caller.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use chrono::Datelike;

/// A month number in the range 1-12
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Month(u32);

impl Month {
    /// Create a month, returning None outside 1-12
    pub fn new(number: u32) -> Option<Self> {
        if (1..=12).contains(&number) {
            Some(Self(number))
        } else {
            None
        }
    }

    /// The month a date falls in
    pub fn of<D: Datelike>(date: &D) -> Self {
        Self(date.month())
    }

    /// Get the month number (1-12)
    pub const fn number(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Month {
    type Error = MonthParseError;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        Self::new(number).ok_or(MonthParseError::OutOfRange(number))
    }
}

impl From<Month> for u32 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl FromStr for Month {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let number: u32 = s
            .parse()
            .map_err(|_| MonthParseError::NotANumber(s.to_string()))?;
        Self::try_from(number)
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    /// Input was not a whole number
    NotANumber(String),
    /// Number outside 1-12
    OutOfRange(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::NotANumber(s) => write!(f, "Invalid month: {}", s),
            MonthParseError::OutOfRange(n) => {
                write!(f, "Month {} is out of range (expected 1-12)", n)
            }
        }
    }
}

impl std::error::Error for MonthParseError {}
