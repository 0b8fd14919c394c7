//! Ledger file reads and atomic writes
//!
//! A save either replaces the whole ledger file or leaves the previous one in
//! place; a half-written document is never visible under the real name.

use std::fmt::Display;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{TrackerError, TrackerResult};

/// Read a JSON document, or `None` when there is no file at `path`
///
/// A file that exists but cannot be read or parsed is a `Storage` error.
pub fn read_json_optional<T, P>(path: P) -> TrackerResult<Option<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(TrackerError::Storage(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    serde_json::from_reader(BufReader::new(file))
        .map(Some)
        .map_err(|e| TrackerError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write a pretty-printed JSON document through a sibling temp file
pub fn write_json_atomic<T, P>(path: P, data: &T) -> TrackerResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    // A bare file name has an empty parent, meaning the working directory
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            storage_err(format!("Failed to create directory {}", parent.display()), e)
        })?;
    }

    let temp_path = temp_path_for(path);
    let written = File::create(&temp_path)
        .map_err(|e| storage_err(format!("Failed to create {}", temp_path.display()), e))
        .and_then(|file| {
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, data)
                .map_err(|e| storage_err("Failed to serialize ledger", e))?;
            writer
                .flush()
                .and_then(|()| writer.get_ref().sync_all())
                .map_err(|e| storage_err(format!("Failed to write {}", temp_path.display()), e))
        })
        .and_then(|()| {
            fs::rename(&temp_path, path)
                .map_err(|e| storage_err(format!("Failed to replace {}", path.display()), e))
        });

    if written.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    written
}

fn storage_err(what: impl Display, cause: impl Display) -> TrackerError {
    TrackerError::Storage(format!("{}: {}", what, cause))
}

/// `expenses.json` -> `expenses.json.tmp`, in the same directory
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
