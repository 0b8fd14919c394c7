//! CSV Export functionality
//!
//! Exports expense records to CSV. Budgets are not exported and there is no
//! CSV import.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{TrackerError, TrackerResult};
use crate::storage::Storage;

/// Column headers, in output order
pub const CSV_HEADER: [&str; 5] = ["ID", "Description", "Amount", "Category", "Date"];

/// Write every expense as CSV, returning the number of data rows written
pub fn export_expenses_csv<W: Write>(storage: &Storage, writer: W) -> TrackerResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;

    let mut rows = 0;
    for expense in storage.expenses.iter() {
        csv_writer.write_record([
            expense.id.to_string(),
            expense.description.clone(),
            expense.amount.to_string(),
            expense.category.clone(),
            expense.date.format("%Y-%m-%d").to_string(),
        ])?;
        rows += 1;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(rows)
}

/// Export every expense to a CSV file, replacing anything already there
pub fn export_expenses_csv_file(storage: &Storage, path: &Path) -> TrackerResult<usize> {
    let file = File::create(path).map_err(|e| {
        TrackerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;

    export_expenses_csv(storage, BufWriter::new(file))
}
