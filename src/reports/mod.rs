//! Single-pass reports over the employee file.
//!
//! Each report consumes an iterator of decoded records, keeps only the state
//! its aggregate needs, and stops at the first read error. Every report has
//! a `render_*` function that writes human-readable lines.

mod payroll;
mod provinces;
mod top_earners;
mod veterans;

use rust_decimal::{Decimal, RoundingStrategy};

pub use payroll::{PayrollFormat, write_payroll};
pub use provinces::{ProvinceCounts, count_by_province, render_all_counts, render_most_populous};
pub use top_earners::{TopEarners, find_top_earners, render_top_earners};
pub use veterans::{
    DEFAULT_VETERAN_YEARS, VeteranReport, format_veteran_line, render_veteran_summary,
    scan_veterans,
};

/// Message printed by every report when the file holds no employees.
pub const NO_EMPLOYEES: &str = "No employees in the file.";

/// Formats a money amount with two decimals, rounding half away from zero.
pub fn format_money(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}
