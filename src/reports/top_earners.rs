//! Highest paid employees report.

use std::cmp::Ordering;
use std::io::Write;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;

use super::{NO_EMPLOYEES, format_money};
use crate::error::PayrollResult;
use crate::models::Employee;

/// Running maximum of total pay, keeping every employee that shares it.
///
/// Ties use exact decimal equality, so two employees tie only when their
/// total pay is the same to the last digit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopEarners {
    max_total_pay: Option<Decimal>,
    employees: Vec<Employee>,
}

impl TopEarners {
    /// Folds one employee with its total pay into the running maximum.
    pub fn observe(&mut self, employee: Employee, total_pay: Decimal) {
        let ordering = self
            .max_total_pay
            .map_or(Ordering::Greater, |max| total_pay.cmp(&max));

        match ordering {
            Ordering::Greater => {
                self.max_total_pay = Some(total_pay);
                self.employees.clear();
                self.employees.push(employee);
            }
            Ordering::Equal => self.employees.push(employee),
            Ordering::Less => {}
        }
    }

    /// Returns the highest total pay seen, if any employee was observed.
    pub fn max_total_pay(&self) -> Option<Decimal> {
        self.max_total_pay
    }

    /// Returns every employee earning the maximum, in file order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }
}

/// Finds the employees with the highest total pay as of `today`.
///
/// # Errors
///
/// Returns the first read error.
pub fn find_top_earners<I>(records: I, today: NaiveDate) -> PayrollResult<TopEarners>
where
    I: IntoIterator<Item = PayrollResult<Employee>>,
{
    let mut top = TopEarners::default();
    for record in records {
        let employee = record?;
        let total_pay = employee.total_pay_on(today);
        top.observe(employee, total_pay);
    }

    info!(
        max_total_pay = ?top.max_total_pay(),
        tied = top.employees().len(),
        "Top earner scan complete"
    );
    Ok(top)
}

/// Writes the maximum total pay and the names of everyone earning it.
pub fn render_top_earners<W: Write>(out: &mut W, top: &TopEarners) -> PayrollResult<()> {
    let Some(max) = top.max_total_pay() else {
        writeln!(out, "{NO_EMPLOYEES}")?;
        return Ok(());
    };

    writeln!(out, "Highest total pay: {} €", format_money(max))?;
    writeln!(out, "Employee(s) earning it:")?;
    for employee in top.employees() {
        writeln!(out, " - {}", employee.name())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContractType, Province, Sex};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn create_test_employee(name: &str, sex: Sex, salary: &str, province: Province) -> Employee {
        Employee::new(
            name,
            sex,
            dec(salary),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            ContractType::Permanent,
            province,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_input_has_no_maximum() {
        let top = find_top_earners(Vec::new(), today()).unwrap();
        assert_eq!(top.max_total_pay(), None);
        assert!(top.employees().is_empty());
    }

    #[test]
    fn test_single_highest_earner() {
        let records = vec![
            Ok(create_test_employee("Low", Sex::Female, "1000.00", Province::Sevilla)),
            Ok(create_test_employee("High", Sex::Female, "3000.00", Province::Sevilla)),
            Ok(create_test_employee("Mid", Sex::Female, "2000.00", Province::Sevilla)),
        ];

        let top = find_top_earners(records, today()).unwrap();
        assert_eq!(top.max_total_pay(), Some(dec("3000.00")));
        let names: Vec<&str> = top.employees().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["High"]);
    }

    #[test]
    fn test_ties_on_total_pay_are_all_reported() {
        // 1880 + 120 (male) equals 2000 for a female in a non-remote province
        let records = vec![
            Ok(create_test_employee("Ana", Sex::Female, "2000.00", Province::Cadiz)),
            Ok(create_test_employee("Luis", Sex::Male, "1880.00", Province::Granada)),
            Ok(create_test_employee("Eva", Sex::Female, "1500.00", Province::Cadiz)),
        ];

        let top = find_top_earners(records, today()).unwrap();
        assert_eq!(top.max_total_pay(), Some(dec("2000.00")));
        let names: Vec<&str> = top.employees().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["Ana", "Luis"]);
    }

    #[test]
    fn test_new_maximum_discards_previous_ties() {
        let mut top = TopEarners::default();
        top.observe(
            create_test_employee("A", Sex::Female, "10", Province::Cadiz),
            dec("10"),
        );
        top.observe(
            create_test_employee("B", Sex::Female, "10", Province::Cadiz),
            dec("10"),
        );
        top.observe(
            create_test_employee("C", Sex::Female, "11", Province::Cadiz),
            dec("11"),
        );

        assert_eq!(top.employees().len(), 1);
        assert_eq!(top.employees()[0].name(), "C");
    }

    #[test]
    fn test_zero_salary_employee_still_counts() {
        let records = vec![Ok(create_test_employee(
            "Zero",
            Sex::Female,
            "0",
            Province::Cadiz,
        ))];
        let top = find_top_earners(records, today()).unwrap();
        assert_eq!(top.max_total_pay(), Some(Decimal::ZERO));
        assert_eq!(top.employees().len(), 1);
    }

    #[test]
    fn test_render_lists_every_tied_name() {
        let mut top = TopEarners::default();
        top.observe(
            create_test_employee("Ana", Sex::Female, "2000.00", Province::Cadiz),
            dec("2000.00"),
        );
        top.observe(
            create_test_employee("Luis", Sex::Male, "1880.00", Province::Cadiz),
            dec("2000.00"),
        );

        let mut out = Vec::new();
        render_top_earners(&mut out, &top).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Highest total pay: 2000.00 €"));
        assert!(text.contains(" - Ana\n"));
        assert!(text.contains(" - Luis\n"));
    }
}
