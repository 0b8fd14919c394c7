//! Configuration module for the expense tracker
//!
//! Resolves where the ledger document and its audit log live. Everything
//! else is fixed at compile time.

pub mod paths;

pub use paths::{TrackerPaths, DEFAULT_DATA_FILE};
