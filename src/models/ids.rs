//! Strongly-typed expense identifier
//!
//! Identifiers are small positive integers handed out in sequence by the
//! expense repository. The newtype keeps them from being mixed up with
//! months or amounts. Identifiers read from a ledger file must not exceed
//! [`ExpenseId::MAX`], so the sequence can always advance.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a single expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// The identifier handed to the first expense of an empty ledger
    pub const FIRST: ExpenseId = ExpenseId(1);

    /// Largest identifier accepted from a ledger file
    pub const MAX: ExpenseId = ExpenseId(i64::MAX as u64);

    /// Wrap a raw identifier
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw value
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// The identifier that follows this one
    pub const fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for ExpenseId {
    type Error = IdOutOfRange;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        if raw > Self::MAX.0 {
            return Err(IdOutOfRange(raw));
        }
        Ok(Self(raw))
    }
}

impl From<ExpenseId> for u64 {
    fn from(id: ExpenseId) -> Self {
        id.0
    }
}

/// A stored identifier too large to continue the sequence from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdOutOfRange(pub u64);

impl fmt::Display for IdOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expense id {} is out of range", self.0)
    }
}

impl std::error::Error for IdOutOfRange {}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}
