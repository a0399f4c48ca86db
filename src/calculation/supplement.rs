//! Salary supplement calculation.
//!
//! The supplement is the sum of three independent components:
//! - a fixed bonus per triennium of seniority,
//! - a percentage of the base salary for remote postings (Jaén, Huelva, Almería),
//! - a flat bonus for male employees.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Province, Sex};

/// Returns the bonus paid for each triennium (24.00).
pub fn triennium_bonus() -> Decimal {
    Decimal::new(24, 0)
}

/// Returns the share of base salary paid for remote postings (10%).
pub fn remote_posting_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// Returns the flat bonus paid to male employees (120.00).
pub fn male_flat_bonus() -> Decimal {
    Decimal::new(120, 0)
}

/// The components of an employee's supplement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupplementBreakdown {
    /// The trienniums the bonus was computed from.
    pub trienniums: u32,
    /// Bonus for completed trienniums.
    pub triennium_bonus: Decimal,
    /// Bonus for being posted to a remote province.
    pub remote_posting_bonus: Decimal,
    /// Flat bonus depending on sex.
    pub sex_bonus: Decimal,
}

impl SupplementBreakdown {
    /// Returns the sum of all components.
    pub fn total(&self) -> Decimal {
        self.triennium_bonus + self.remote_posting_bonus + self.sex_bonus
    }
}

/// Calculates the supplement for an employee.
///
/// # Arguments
///
/// * `base_salary` - The employee's base salary
/// * `sex` - The employee's sex
/// * `province` - The province the employee is posted to
/// * `trienniums` - Completed trienniums of seniority
///
/// # Examples
///
/// ```
/// use payroll_records::calculation::calculate_supplement;
/// use payroll_records::models::{Province, Sex};
/// use rust_decimal::Decimal;
///
/// let breakdown = calculate_supplement(Decimal::new(100000, 2), Sex::Male, Province::Jaen, 2);
/// assert_eq!(breakdown.total(), Decimal::new(26800, 2));
/// ```
pub fn calculate_supplement(
    base_salary: Decimal,
    sex: Sex,
    province: Province,
    trienniums: u32,
) -> SupplementBreakdown {
    let triennium_bonus = Decimal::from(trienniums) * triennium_bonus();

    let remote_posting_bonus = if province.has_remote_posting_bonus() {
        base_salary * remote_posting_rate()
    } else {
        Decimal::ZERO
    };

    let sex_bonus = match sex {
        Sex::Male => male_flat_bonus(),
        Sex::Female => Decimal::ZERO,
    };

    SupplementBreakdown {
        trienniums,
        triennium_bonus,
        remote_posting_bonus,
        sex_bonus,
    }
}
