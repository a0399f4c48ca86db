//! Payroll listing: every employee with the total pay they earn.

use std::io::Write;

use chrono::NaiveDate;

use super::{NO_EMPLOYEES, format_money};
use crate::error::PayrollResult;
use crate::models::Employee;

/// Output style of the payroll listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PayrollFormat {
    /// Aligned `Name | Total pay` lines.
    #[default]
    Text,
    /// One JSON [`EmployeeSummary`](crate::models::EmployeeSummary) per line.
    JsonLines,
}

/// Writes one line per employee in file order and returns how many were written.
///
/// # Errors
///
/// Returns the first read error or write failure.
pub fn write_payroll<I, W>(
    records: I,
    today: NaiveDate,
    out: &mut W,
    format: PayrollFormat,
) -> PayrollResult<usize>
where
    I: IntoIterator<Item = PayrollResult<Employee>>,
    W: Write,
{
    let mut written = 0;

    for record in records {
        let employee = record?;
        match format {
            PayrollFormat::Text => writeln!(
                out,
                "Name: {:<30} | Total pay: {} €",
                employee.name(),
                format_money(employee.total_pay_on(today))
            )?,
            PayrollFormat::JsonLines => {
                serde_json::to_writer(&mut *out, &employee.summary_on(today))
                    .map_err(std::io::Error::from)?;
                writeln!(out)?;
            }
        }
        written += 1;
    }

    if written == 0 && format == PayrollFormat::Text {
        writeln!(out, "{NO_EMPLOYEES}")?;
    }
    Ok(written)
}
