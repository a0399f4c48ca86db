//! Field-by-field interactive entry of an employee.

use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::ingest::{decode_line, parse_salary};
use crate::models::{
    ContractType, Employee, MAX_HIRE_YEAR, MIN_HIRE_YEAR, Province, Sex, check_base_salary,
    check_name, hire_date_from_parts,
};

const MONTHS: RangeInclusive<u32> = 1..=12;
const DAYS: RangeInclusive<u32> = 1..=31;

/// Asks for employee fields on `output` and reads answers from `input`.
///
/// Every `ask_*` method repeats its question until the answer is valid and
/// returns `Ok(None)` once `input` is exhausted.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over an input and an output stream.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the output stream.
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Asks `question` until `parse` accepts the answer.
    ///
    /// Recoverable errors from `parse`, and answers that are not valid
    /// UTF-8, are shown and the question is asked again. Any other error is
    /// returned.
    pub fn ask<T, F>(&mut self, question: &str, mut parse: F) -> PayrollResult<Option<T>>
    where
        F: FnMut(&str) -> PayrollResult<T>,
    {
        loop {
            write!(self.output, "{question}: ")?;
            self.output.flush()?;

            let Some(raw) = self.read_line()? else {
                return Ok(None);
            };
            match decode_line(raw).and_then(|answer| parse(&answer)) {
                Ok(value) => return Ok(Some(value)),
                Err(error) if error.is_recoverable() => {
                    writeln!(self.output, "{error}. Please try again.")?;
                }
                Err(error) => return Err(error),
            }
        }
    }

    /// Asks for the name.
    pub fn ask_name(&mut self) -> PayrollResult<Option<String>> {
        self.ask("Name", |answer| check_name(answer).map(str::to_string))
    }

    /// Asks for the sex (M/H or any alias).
    pub fn ask_sex(&mut self) -> PayrollResult<Option<Sex>> {
        self.ask("Sex (M = mujer, H = hombre)", str::parse)
    }

    /// Asks for the base salary.
    pub fn ask_salary(&mut self) -> PayrollResult<Option<Decimal>> {
        self.ask("Base salary", |answer| {
            let salary = parse_salary(answer)?;
            check_base_salary(salary)?;
            Ok(salary)
        })
    }

    /// Asks for the hire date as year, month and day.
    ///
    /// When the three answers do not form a calendar date, the error is
    /// shown and all three are asked again.
    pub fn ask_hire_date(&mut self) -> PayrollResult<Option<NaiveDate>> {
        let years = MIN_HIRE_YEAR..=MAX_HIRE_YEAR;
        loop {
            let Some(year) = self.ask(
                &format!("Hire year ({MIN_HIRE_YEAR}-{MAX_HIRE_YEAR})"),
                |answer| parse_in_range("year", answer, &years),
            )?
            else {
                return Ok(None);
            };
            let Some(month) = self.ask("Hire month (1-12)", |answer| {
                parse_in_range("month", answer, &MONTHS)
            })?
            else {
                return Ok(None);
            };
            let Some(day) =
                self.ask("Hire day (1-31)", |answer| parse_in_range("day", answer, &DAYS))?
            else {
                return Ok(None);
            };

            match hire_date_from_parts(year, month, day) {
                Ok(date) => return Ok(Some(date)),
                Err(error) => writeln!(self.output, "{error}. Please enter the date again.")?,
            }
        }
    }

    /// Asks for the contract type (C/F/D or any alias).
    pub fn ask_contract_type(&mut self) -> PayrollResult<Option<ContractType>> {
        self.ask(
            "Contract type (C = a comisión, F = fijo, D = a domicilio)",
            str::parse,
        )
    }

    /// Asks for the province (code 1-8 or name).
    pub fn ask_province(&mut self) -> PayrollResult<Option<Province>> {
        let choices = Province::ALL
            .iter()
            .map(|p| format!("{} = {}", p.code(), p.label()))
            .collect::<Vec<_>>()
            .join(", ");
        self.ask(&format!("Province ({choices})"), str::parse)
    }

    /// Asks for every field in turn and builds the employee.
    ///
    /// Returns `Ok(None)` if input ends before the last field.
    pub fn read_employee(&mut self) -> PayrollResult<Option<Employee>> {
        let Some(name) = self.ask_name()? else {
            return Ok(None);
        };
        let Some(sex) = self.ask_sex()? else {
            return Ok(None);
        };
        let Some(base_salary) = self.ask_salary()? else {
            return Ok(None);
        };
        let Some(hire_date) = self.ask_hire_date()? else {
            return Ok(None);
        };
        let Some(contract_type) = self.ask_contract_type()? else {
            return Ok(None);
        };
        let Some(province) = self.ask_province()? else {
            return Ok(None);
        };

        Employee::new(&name, sex, base_salary, hire_date, contract_type, province).map(Some)
    }

    /// Asks whether to enter another employee.
    ///
    /// `S`, `Y` (or longer yes-words) and an empty answer continue; end of
    /// input and an answer that is not valid UTF-8 do not.
    pub fn ask_another(&mut self) -> PayrollResult<bool> {
        write!(self.output, "Add another employee? (S/N): ")?;
        self.output.flush()?;

        let Some(Ok(answer)) = self.read_line()?.map(decode_line) else {
            return Ok(false);
        };
        let answer = answer.trim().to_uppercase();
        Ok(matches!(answer.as_str(), "" | "S" | "SI" | "SÍ" | "Y" | "YES"))
    }

    /// Reads the raw bytes of one line, or `None` at end of input.
    fn read_line(&mut self) -> PayrollResult<Option<Vec<u8>>> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

fn parse_in_range<T>(kind: &'static str, input: &str, range: &RangeInclusive<T>) -> PayrollResult<T>
where
    T: std::str::FromStr + PartialOrd,
{
    input
        .trim()
        .parse()
        .ok()
        .filter(|value| range.contains(value))
        .ok_or_else(|| PayrollError::InvalidValue {
            kind,
            input: input.to_string(),
        })
}
