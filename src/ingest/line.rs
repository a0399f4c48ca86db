//! Parsing of one semicolon-delimited employee line.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{ContractType, Employee, Province, Sex, hire_date_from_parts};

/// Number of fields in an employee line.
pub const FIELD_COUNT: usize = 8;

/// Field separator of an employee line.
pub const SEPARATOR: char = ';';

/// Parses a salary such as `"1250.50"` or `"1250,50"`.
///
/// A decimal comma is accepted in place of the point.
///
/// # Errors
///
/// Returns [`PayrollError::InvalidValue`] when the text is not a number.
/// Range and precision are checked later by [`Employee::new`].
pub fn parse_salary(input: &str) -> PayrollResult<Decimal> {
    let text = input.trim().replace(',', ".");
    Decimal::from_str(&text).map_err(|_| PayrollError::InvalidValue {
        kind: "salary",
        input: input.to_string(),
    })
}

/// Decodes one raw input line, dropping a trailing `\n` or `\r\n`.
///
/// # Errors
///
/// Returns [`PayrollError::InvalidValue`] when the bytes are not valid UTF-8.
/// The error shows the line with invalid sequences replaced.
pub fn decode_line(mut raw: Vec<u8>) -> PayrollResult<String> {
    if raw.last() == Some(&b'\n') {
        raw.pop();
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
    }
    String::from_utf8(raw).map_err(|e| PayrollError::InvalidValue {
        kind: "UTF-8 text",
        input: String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

fn parse_number<T: FromStr>(kind: &'static str, input: &str) -> PayrollResult<T> {
    input.trim().parse().map_err(|_| PayrollError::InvalidValue {
        kind,
        input: input.to_string(),
    })
}

/// Parses `name;sex;salary;year;month;day;type;province` into an employee.
///
/// Whitespace around each field is ignored. Sex, contract type and province
/// accept the same aliases as interactive input.
///
/// # Errors
///
/// Returns [`PayrollError::InvalidValue`] for a wrong field count or a field
/// that does not parse, and [`PayrollError::InvalidEmployee`] when the
/// parsed values fail validation.
///
/// # Example
///
/// ```
/// use payroll_records::ingest::parse_line;
/// use payroll_records::models::Province;
///
/// let employee = parse_line("Rosa Díaz;mujer;1500.00;2010;6;15;fijo;Jaén").unwrap();
/// assert_eq!(employee.province(), Province::Jaen);
/// ```
pub fn parse_line(line: &str) -> PayrollResult<Employee> {
    let fields: Vec<&str> = line.split(SEPARATOR).collect();
    let &[name, sex, salary, year, month, day, contract_type, province] = fields.as_slice() else {
        return Err(PayrollError::InvalidValue {
            kind: "employee line",
            input: format!("expected {FIELD_COUNT} fields, found {}", fields.len()),
        });
    };

    let sex: Sex = sex.parse()?;
    let base_salary = parse_salary(salary)?;
    let hire_date = hire_date_from_parts(
        parse_number("year", year)?,
        parse_number("month", month)?,
        parse_number("day", day)?,
    )?;
    let contract_type: ContractType = contract_type.parse()?;
    let province: Province = province.parse()?;

    Employee::new(name, sex, base_salary, hire_date, contract_type, province)
}
