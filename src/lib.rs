//! Expense Tracker - interactive terminal expense tracking with monthly budgets
//!
//! This library provides the core functionality for the expense tracker: a
//! ledger of dated expenses, per-month spending limits, summaries, CSV export
//! and JSON persistence, driven by a numbered menu shell.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data file and audit log path resolution
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, months)
//! - `storage`: In-memory store and JSON ledger file
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `export`: CSV export
//! - `display`: Text formatting for the console
//! - `cli`: Interactive menu shell and subcommands
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::config::TrackerPaths;
//! use expense_tracker::models::Money;
//! use expense_tracker::services::{ExpenseService, SummaryService};
//! use expense_tracker::storage::Storage;
//!
//! let mut storage = Storage::new(TrackerPaths::new());
//! storage.load();
//! ExpenseService::new(&mut storage).add("Coffee", Money::from_cents(450), "Food");
//! println!("{}", SummaryService::new(&storage).total());
//! storage.save()?;
//! # Ok::<(), expense_tracker::TrackerError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
