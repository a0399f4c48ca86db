//! Core data models for payroll records.
//!
//! This module contains the employee entity and the closed enumerations it
//! is built from.

mod alias;
mod contract_type;
mod employee;
mod province;
mod sex;

pub use contract_type::ContractType;
pub use employee::{
    Employee, EmployeeSummary, MAX_HIRE_YEAR, MAX_NAME_LEN, MIN_HIRE_YEAR, check_base_salary,
    check_name, hire_date_from_parts, max_base_salary, today,
};
pub use province::Province;
pub use sex::Sex;
