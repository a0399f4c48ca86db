//! Veteran employees report.
//!
//! Lists employees whose seniority reaches a threshold while streaming the
//! file, then summarizes how many of the total they represent.

use std::io::Write;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::info;

use super::{NO_EMPLOYEES, format_money};
use crate::error::PayrollResult;
use crate::models::Employee;

/// Seniority in years from which an employee counts as a veteran.
pub const DEFAULT_VETERAN_YEARS: u32 = 10;

/// Totals of a veteran scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VeteranReport {
    /// Number of employees read.
    pub total: usize,
    /// Number of employees at or above the threshold.
    pub veterans: usize,
}

impl VeteranReport {
    /// Returns the share of veterans as a percentage with two decimals,
    /// or `None` when no employees were read.
    pub fn percentage(&self) -> Option<Decimal> {
        if self.total == 0 {
            return None;
        }
        let share = Decimal::from(self.veterans) * Decimal::ONE_HUNDRED / Decimal::from(self.total);
        Some(share.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }
}

/// Streams `records`, passing each veteran to `on_veteran` as it is read.
///
/// # Arguments
///
/// * `records` - Decoded records, usually an [`EmployeeReader`](crate::codec::EmployeeReader)
/// * `today` - Reference date for seniority
/// * `threshold_years` - Minimum seniority of a veteran
/// * `on_veteran` - Called once per veteran, in file order
///
/// # Errors
///
/// Returns the first read error, or the first error from `on_veteran`.
pub fn scan_veterans<I, F>(
    records: I,
    today: NaiveDate,
    threshold_years: u32,
    mut on_veteran: F,
) -> PayrollResult<VeteranReport>
where
    I: IntoIterator<Item = PayrollResult<Employee>>,
    F: FnMut(&Employee) -> PayrollResult<()>,
{
    let mut report = VeteranReport::default();

    for record in records {
        let employee = record?;
        report.total += 1;
        if employee.is_veteran_on(today, threshold_years) {
            report.veterans += 1;
            on_veteran(&employee)?;
        }
    }

    info!(
        total = report.total,
        veterans = report.veterans,
        threshold_years,
        "Veteran scan complete"
    );
    Ok(report)
}

/// Formats one veteran as `name; sex; salary; yyyy/mm/dd; contract; province`.
pub fn format_veteran_line(employee: &Employee) -> String {
    format!(
        "{}; {}; {}; {}; {}; {}",
        employee.name(),
        employee.sex().code(),
        format_money(employee.base_salary()),
        employee.hire_date().format("%Y/%m/%d"),
        employee.contract_type(),
        employee.province(),
    )
}

/// Writes the closing totals of a veteran scan.
pub fn render_veteran_summary<W: Write>(
    out: &mut W,
    report: &VeteranReport,
    threshold_years: u32,
) -> PayrollResult<()> {
    match report.percentage() {
        None => writeln!(out, "{NO_EMPLOYEES}")?,
        Some(percentage) => {
            writeln!(out, "Total employees: {}", report.total)?;
            writeln!(
                out,
                "Employees with {threshold_years}+ years: {}",
                report.veterans
            )?;
            writeln!(
                out,
                "Share with {threshold_years}+ years: {}%",
                format_money(percentage)
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PayrollError;
    use crate::models::{ContractType, Province, Sex};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn create_test_employee(name: &str, hire_date: NaiveDate) -> Employee {
        Employee::new(
            name,
            Sex::Female,
            Decimal::new(123_456, 2),
            hire_date,
            ContractType::Commission,
            Province::Malaga,
        )
        .unwrap()
    }

    fn today() -> NaiveDate {
        date(2026, 10, 18)
    }

    #[test]
    fn test_counts_and_reports_veterans_in_order() {
        let records = vec![
            Ok(create_test_employee("Old", date(2001, 1, 1))),
            Ok(create_test_employee("New", date(2024, 1, 1))),
            Ok(create_test_employee("Edge", date(2016, 10, 18))),
        ];

        let mut seen = Vec::new();
        let report = scan_veterans(records, today(), DEFAULT_VETERAN_YEARS, |e| {
            seen.push(e.name().to_string());
            Ok(())
        })
        .unwrap();

        assert_eq!(report, VeteranReport { total: 3, veterans: 2 });
        assert_eq!(seen, vec!["Old", "Edge"]);
    }

    #[test]
    fn test_percentage() {
        let report = VeteranReport { total: 3, veterans: 2 };
        assert_eq!(report.percentage(), Some(Decimal::new(6667, 2)));
        assert_eq!(VeteranReport::default().percentage(), None);
    }

    #[test]
    fn test_read_error_ends_scan() {
        let records = vec![
            Ok(create_test_employee("Old", date(2001, 1, 1))),
            Err(PayrollError::CorruptRecord {
                message: "truncated".to_string(),
            }),
            Ok(create_test_employee("Never", date(2001, 1, 1))),
        ];

        let mut seen = 0;
        let result = scan_veterans(records, today(), DEFAULT_VETERAN_YEARS, |_| {
            seen += 1;
            Ok(())
        });

        assert!(matches!(result, Err(PayrollError::CorruptRecord { .. })));
        assert_eq!(seen, 1);
    }

    #[test]
    fn test_format_veteran_line() {
        let employee = create_test_employee("Old", date(2001, 3, 9));
        assert_eq!(
            format_veteran_line(&employee),
            "Old; M; 1234.56; 2001/03/09; A comisión; Málaga"
        );
    }

    #[test]
    fn test_render_summary() {
        let mut out = Vec::new();
        render_veteran_summary(&mut out, &VeteranReport { total: 4, veterans: 1 }, 10).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Total employees: 4"));
        assert!(text.contains("Employees with 10+ years: 1"));
        assert!(text.contains("Share with 10+ years: 25.00%"));
    }

    #[test]
    fn test_render_summary_for_empty_file() {
        let mut out = Vec::new();
        render_veteran_summary(&mut out, &VeteranReport::default(), 10).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{NO_EMPLOYEES}\n"));
    }
}
