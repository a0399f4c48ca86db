//! Append-only employee data file.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{RecordLayout, decode_employee, encode_record};
use crate::error::{PayrollError, PayrollResult};
use crate::models::Employee;

/// A sequential binary file of employee records.
///
/// Every record in the file uses the same [`RecordLayout`]. The file has no
/// header, so the layout must be known up front. Records are only ever
/// appended; nothing is rewritten in place.
///
/// # Example
///
/// ```no_run
/// use payroll_records::codec::{EmployeeStore, RecordLayout};
///
/// let store = EmployeeStore::new("FICHE.DAT", RecordLayout::Timestamp);
/// for employee in store.reader()? {
///     let employee = employee?;
///     println!("{}", employee.name());
/// }
/// # Ok::<(), payroll_records::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EmployeeStore {
    path: PathBuf,
    layout: RecordLayout,
}

impl EmployeeStore {
    /// Creates a store for the file at `path`. The file is not touched.
    pub fn new(path: impl Into<PathBuf>, layout: RecordLayout) -> Self {
        Self {
            path: path.into(),
            layout,
        }
    }

    /// Returns the path of the data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the record layout of the data file.
    pub fn layout(&self) -> RecordLayout {
        self.layout
    }

    /// Appends one record to the end of the file, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::DataFile`] if the file cannot be opened and
    /// [`PayrollError::Io`] if the write fails.
    pub fn append(&self, employee: &Employee) -> PayrollResult<()> {
        let record = encode_record(employee, self.layout)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.data_file_error(source))?;
        file.write_all(&record)?;
        file.flush()?;

        debug!(
            path = %self.path.display(),
            layout = %self.layout,
            bytes = record.len(),
            name = employee.name(),
            "Appended employee record"
        );
        Ok(())
    }

    /// Opens the file for a sequential read from the first record.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::DataFile`] if the file cannot be opened,
    /// including when it does not exist.
    pub fn reader(&self) -> PayrollResult<EmployeeReader<BufReader<File>>> {
        let file = File::open(&self.path).map_err(|source| self.data_file_error(source))?;
        Ok(EmployeeReader::new(BufReader::new(file), self.layout))
    }

    fn data_file_error(&self, source: std::io::Error) -> PayrollError {
        PayrollError::DataFile {
            path: self.path.display().to_string(),
            source,
        }
    }
}

/// Sequential reader over employee records.
///
/// Iteration yields each decoded employee and stops after the end of the
/// stream or after the first error.
#[derive(Debug)]
pub struct EmployeeReader<R> {
    inner: R,
    layout: RecordLayout,
    records_read: usize,
    finished: bool,
}

impl<R: Read> EmployeeReader<R> {
    /// Wraps `inner`, positioned at a record boundary.
    pub fn new(inner: R, layout: RecordLayout) -> Self {
        Self {
            inner,
            layout,
            records_read: 0,
            finished: false,
        }
    }

    /// Returns the number of records decoded so far.
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Decodes the next record, or returns `None` at the end of the file.
    pub fn next_employee(&mut self) -> PayrollResult<Option<Employee>> {
        match decode_employee(&mut self.inner, self.layout) {
            Ok(Some(employee)) => {
                self.records_read += 1;
                Ok(Some(employee))
            }
            Ok(None) => Ok(None),
            Err(PayrollError::CorruptRecord { message }) => Err(PayrollError::CorruptRecord {
                message: format!("record #{}: {message}", self.records_read + 1),
            }),
            Err(err) => Err(err),
        }
    }
}

impl<R: Read> Iterator for EmployeeReader<R> {
    type Item = PayrollResult<Employee>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_employee() {
            Ok(Some(employee)) => Some(Ok(employee)),
            Ok(None) => {
                self.finished = true;
                debug!(records = self.records_read, "Reached end of employee records");
                None
            }
            Err(err) => {
                self.finished = true;
                warn!(
                    records = self.records_read,
                    error = %err,
                    "Stopped reading employee records"
                );
                Some(Err(err))
            }
        }
    }
}
