//! Calculation logic for employee pay.
//!
//! This module contains the pure business rules: seniority in whole years,
//! trienniums, and the supplement made of triennium, remote posting and
//! sex-based bonuses.

mod seniority;
mod supplement;

pub use seniority::{TRIENNIUM_YEARS, seniority_years, trienniums};
pub use supplement::{
    SupplementBreakdown, calculate_supplement, male_flat_bonus, remote_posting_rate,
    triennium_bonus,
};
