//! Interactive console: employee entry prompts and a pager for listings.

mod pager;
mod prompt;

use std::io::{BufRead, Write};

use tracing::info;

use crate::codec::EmployeeStore;
use crate::error::PayrollResult;

pub use pager::Pager;
pub use prompt::Prompter;

/// Reads employees from `prompter` and appends each to `store` until the
/// user declines to add another or input ends.
///
/// Returns the number of employees saved.
///
/// # Errors
///
/// Returns the first I/O error on the console or the store.
pub fn add_employees<R, W>(
    prompter: &mut Prompter<R, W>,
    store: &EmployeeStore,
) -> PayrollResult<usize>
where
    R: BufRead,
    W: Write,
{
    let mut saved = 0;

    while let Some(employee) = prompter.read_employee()? {
        store.append(&employee)?;
        saved += 1;
        writeln!(prompter.output_mut(), "Saved {}.", employee.name())?;

        if !prompter.ask_another()? {
            break;
        }
    }

    info!(saved, path = %store.path().display(), "Interactive entry finished");
    Ok(saved)
}
