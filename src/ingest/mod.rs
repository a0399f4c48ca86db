//! Bulk import of employees from semicolon-delimited text.
//!
//! Each non-blank line holds one employee. Lines that fail to parse or
//! validate are skipped and reported; the rest are appended to the store.

mod line;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{info, warn};

use crate::codec::EmployeeStore;
use crate::error::{PayrollError, PayrollResult};

pub use line::{FIELD_COUNT, SEPARATOR, decode_line, parse_line, parse_salary};

/// A line left out of an import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// One-based line number in the input.
    pub line: usize,
    /// Why the line was rejected.
    pub reason: String,
}

/// Outcome of an import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Number of employees appended to the store.
    pub imported: usize,
    /// Lines that were skipped, in input order.
    pub skipped: Vec<SkippedLine>,
}

/// Imports every line of `reader` into `store`.
///
/// Blank lines are ignored. A line that is not valid UTF-8 or fails to parse
/// is recorded in [`ImportSummary::skipped`] and the import goes on with the
/// next line.
///
/// # Errors
///
/// Returns the first I/O error reading the input or writing the store.
/// Employees appended before the error stay in the file.
pub fn import_lines<R: BufRead>(reader: R, store: &EmployeeStore) -> PayrollResult<ImportSummary> {
    let mut summary = ImportSummary::default();

    for (index, raw) in reader.split(b'\n').enumerate() {
        let line = index + 1;
        let parsed = match decode_line(raw?) {
            Ok(text) if text.trim().is_empty() => continue,
            Ok(text) => parse_line(&text),
            Err(error) => Err(error),
        };

        match parsed {
            Ok(employee) => {
                store.append(&employee)?;
                summary.imported += 1;
            }
            Err(error) if error.is_recoverable() => {
                warn!(line, %error, "Skipping malformed employee line");
                summary.skipped.push(SkippedLine {
                    line,
                    reason: error.to_string(),
                });
            }
            Err(error) => return Err(error),
        }
    }

    info!(
        imported = summary.imported,
        skipped = summary.skipped.len(),
        path = %store.path().display(),
        "Import complete"
    );
    Ok(summary)
}

/// Imports the text file at `path` into `store`.
///
/// # Errors
///
/// Returns [`PayrollError::DataFile`] if the input cannot be opened, then
/// as [`import_lines`].
pub fn import_file(path: impl AsRef<Path>, store: &EmployeeStore) -> PayrollResult<ImportSummary> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PayrollError::DataFile {
        path: path.display().to_string(),
        source,
    })?;
    import_lines(BufReader::new(file), store)
}
