//! Employee model and related types.
//!
//! This module defines the validated, immutable [`Employee`] value and the
//! [`EmployeeSummary`] view used when printing an employee with its derived
//! pay figures.

use chrono::{Datelike, Local, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use super::{ContractType, Province, Sex};
use crate::calculation::{self, SupplementBreakdown};
use crate::error::{PayrollError, PayrollResult};

/// Maximum length of an employee name, in characters.
pub const MAX_NAME_LEN: usize = 30;

/// Earliest accepted hire year.
pub const MIN_HIRE_YEAR: i32 = 1900;

/// Latest accepted hire year.
pub const MAX_HIRE_YEAR: i32 = 2100;

/// Returns the highest accepted base salary (99999.99).
pub fn max_base_salary() -> Decimal {
    Decimal::new(9_999_999, 2)
}

/// Builds a hire date from its parts, rejecting impossible dates.
///
/// # Errors
///
/// Returns [`PayrollError::InvalidEmployee`] on field `hire_date` when the
/// parts do not form a calendar date or the year is outside 1900–2100.
///
/// # Examples
///
/// ```
/// use payroll_records::models::hire_date_from_parts;
///
/// assert!(hire_date_from_parts(2020, 2, 29).is_ok());
/// assert!(hire_date_from_parts(2021, 2, 29).is_err());
/// ```
pub fn hire_date_from_parts(year: i32, month: u32, day: u32) -> PayrollResult<NaiveDate> {
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        PayrollError::invalid_employee(
            "hire_date",
            format!("{day:02}/{month:02}/{year} is not a calendar date"),
        )
    })?;
    check_hire_year(date)?;
    Ok(date)
}

/// Trims `name` and checks it is non-empty and at most 30 characters.
///
/// # Errors
///
/// Returns [`PayrollError::InvalidEmployee`] on field `name`.
pub fn check_name(name: &str) -> PayrollResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PayrollError::invalid_employee("name", "must not be empty"));
    }
    let name_len = name.chars().count();
    if name_len > MAX_NAME_LEN {
        return Err(PayrollError::invalid_employee(
            "name",
            format!("{name_len} characters exceeds the maximum of {MAX_NAME_LEN}"),
        ));
    }
    Ok(name)
}

/// Checks a base salary is within 0–99999.99 and has at most two decimals.
///
/// # Errors
///
/// Returns [`PayrollError::InvalidEmployee`] on field `base_salary`.
pub fn check_base_salary(base_salary: Decimal) -> PayrollResult<()> {
    if base_salary.is_sign_negative() && !base_salary.is_zero() {
        return Err(PayrollError::invalid_employee(
            "base_salary",
            format!("{base_salary} is negative"),
        ));
    }
    if base_salary > max_base_salary() {
        return Err(PayrollError::invalid_employee(
            "base_salary",
            format!("{base_salary} exceeds {}", max_base_salary()),
        ));
    }
    if base_salary.normalize().scale() > 2 {
        return Err(PayrollError::invalid_employee(
            "base_salary",
            format!("{base_salary} has more than two decimal places"),
        ));
    }
    Ok(())
}

fn check_hire_year(date: NaiveDate) -> PayrollResult<()> {
    if (MIN_HIRE_YEAR..=MAX_HIRE_YEAR).contains(&date.year()) {
        Ok(())
    } else {
        Err(PayrollError::invalid_employee(
            "hire_date",
            format!(
                "year {} outside {MIN_HIRE_YEAR}-{MAX_HIRE_YEAR}",
                date.year()
            ),
        ))
    }
}

/// Represents an employee with validated personal and contract data.
///
/// Fields are private and only readable through accessors; an `Employee`
/// cannot be changed once built. Seniority and pay figures are computed on
/// demand from the stored fields and a reference date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    name: String,
    sex: Sex,
    base_salary: Decimal,
    hire_date: NaiveDate,
    contract_type: ContractType,
    province: Province,
}

impl Employee {
    /// Creates an employee, validating every field.
    ///
    /// The name is trimmed before it is checked and stored.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidEmployee`] naming the first field that
    /// fails:
    /// - `name`: empty after trimming, or longer than 30 characters
    /// - `base_salary`: outside 0–99999.99, or finer than cents
    /// - `hire_date`: year outside 1900–2100
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_records::models::{ContractType, Employee, Province, Sex};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new(
    ///     "  Lucía Fernández ",
    ///     Sex::Female,
    ///     Decimal::new(185000, 2),
    ///     NaiveDate::from_ymd_opt(2012, 3, 1).unwrap(),
    ///     ContractType::Permanent,
    ///     Province::Granada,
    /// )
    /// .unwrap();
    /// assert_eq!(employee.name(), "Lucía Fernández");
    /// ```
    pub fn new(
        name: &str,
        sex: Sex,
        base_salary: Decimal,
        hire_date: NaiveDate,
        contract_type: ContractType,
        province: Province,
    ) -> PayrollResult<Self> {
        let name = check_name(name)?;
        check_base_salary(base_salary)?;
        check_hire_year(hire_date)?;

        Ok(Self {
            name: name.to_string(),
            sex,
            base_salary,
            hire_date,
            contract_type,
            province,
        })
    }

    /// Returns the employee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the employee's sex.
    pub fn sex(&self) -> Sex {
        self.sex
    }

    /// Returns the base salary.
    pub fn base_salary(&self) -> Decimal {
        self.base_salary
    }

    /// Returns the hire date.
    pub fn hire_date(&self) -> NaiveDate {
        self.hire_date
    }

    /// Returns the contract type.
    pub fn contract_type(&self) -> ContractType {
        self.contract_type
    }

    /// Returns the province of posting.
    pub fn province(&self) -> Province {
        self.province
    }

    /// Returns whole years of seniority as of `today`.
    pub fn seniority_years_on(&self, today: NaiveDate) -> u32 {
        calculation::seniority_years(self.hire_date, today)
    }

    /// Returns completed trienniums as of `today`.
    pub fn trienniums_on(&self, today: NaiveDate) -> u32 {
        calculation::trienniums(self.seniority_years_on(today))
    }

    /// Returns the components of the supplement as of `today`.
    pub fn supplement_breakdown_on(&self, today: NaiveDate) -> SupplementBreakdown {
        calculation::calculate_supplement(
            self.base_salary,
            self.sex,
            self.province,
            self.trienniums_on(today),
        )
    }

    /// Returns the total supplement as of `today`.
    pub fn supplement_on(&self, today: NaiveDate) -> Decimal {
        self.supplement_breakdown_on(today).total()
    }

    /// Returns base salary plus supplement as of `today`.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_records::models::{ContractType, Employee, Province, Sex};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    /// let employee = Employee::new(
    ///     "Antonio Ruiz",
    ///     Sex::Male,
    ///     Decimal::new(100000, 2),
    ///     NaiveDate::from_ymd_opt(2020, 10, 18).unwrap(),
    ///     ContractType::Permanent,
    ///     Province::Jaen,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(employee.total_pay_on(today), Decimal::new(126800, 2));
    /// ```
    pub fn total_pay_on(&self, today: NaiveDate) -> Decimal {
        self.base_salary + self.supplement_on(today)
    }

    /// Returns true when seniority as of `today` reaches `threshold_years`.
    pub fn is_veteran_on(&self, today: NaiveDate, threshold_years: u32) -> bool {
        self.seniority_years_on(today) >= threshold_years
    }

    /// Returns whole years of seniority as of the current local date.
    pub fn seniority_years(&self) -> u32 {
        self.seniority_years_on(today())
    }

    /// Returns completed trienniums as of the current local date.
    pub fn trienniums(&self) -> u32 {
        self.trienniums_on(today())
    }

    /// Returns the supplement as of the current local date.
    pub fn supplement(&self) -> Decimal {
        self.supplement_on(today())
    }

    /// Returns the total pay as of the current local date.
    pub fn total_pay(&self) -> Decimal {
        self.total_pay_on(today())
    }

    /// Returns a serializable view with derived figures as of `today`.
    pub fn summary_on(&self, today: NaiveDate) -> EmployeeSummary {
        let breakdown = self.supplement_breakdown_on(today);
        EmployeeSummary {
            name: self.name.clone(),
            sex: self.sex,
            base_salary: self.base_salary,
            supplement: breakdown.total(),
            total_pay: self.base_salary + breakdown.total(),
            hire_date: self.hire_date,
            seniority_years: self.seniority_years_on(today),
            trienniums: breakdown.trienniums,
            contract_type: self.contract_type,
            province: self.province,
        }
    }
}

/// Returns the current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// An employee together with the pay figures derived on a given date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeSummary {
    /// The employee's name.
    pub name: String,
    /// The employee's sex.
    pub sex: Sex,
    /// The base salary.
    pub base_salary: Decimal,
    /// The total supplement.
    pub supplement: Decimal,
    /// Base salary plus supplement.
    pub total_pay: Decimal,
    /// The hire date.
    pub hire_date: NaiveDate,
    /// Whole years of seniority.
    pub seniority_years: u32,
    /// Completed trienniums.
    pub trienniums: u32,
    /// The contract type.
    pub contract_type: ContractType,
    /// The province of posting.
    pub province: Province,
}
