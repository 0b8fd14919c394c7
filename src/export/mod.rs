//! Export module for the expense tracker
//!
//! CSV export of expense records for spreadsheets. The JSON ledger itself is
//! handled by the storage layer.

pub mod csv;

pub use self::csv::{export_expenses_csv, export_expenses_csv_file, CSV_HEADER};
