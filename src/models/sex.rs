//! Sex of an employee.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::alias;
use crate::error::{PayrollError, PayrollResult};

/// The sex recorded for an employee.
///
/// Each variant carries a stable character code used by the binary record
/// format. Male employees receive a flat supplement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sex {
    /// Female (code `'M'`, "mujer").
    Female,
    /// Male (code `'H'`, "hombre").
    Male,
}

const ALIASES: &[(Sex, &[&str])] = &[
    (
        Sex::Female,
        &[
            "M", "MU", "MUJ", "MUJE", "MUJER", "FE", "FEM", "FEME", "FEMEN", "FEMENI", "FEMENIN",
            "FEMENINO",
        ],
    ),
    (
        Sex::Male,
        &[
            "H", "HO", "HOM", "HOMB", "HOMBR", "HOMBRE", "MA", "MAS", "MASC", "MASCU", "MASCUL",
            "MASCULI", "MASCULIN", "MASCULINO",
        ],
    ),
];

impl Sex {
    /// All variants, in code order.
    pub const ALL: [Sex; 2] = [Sex::Female, Sex::Male];

    /// Returns the character code stored in the data file.
    pub fn code(self) -> char {
        match self {
            Sex::Female => 'M',
            Sex::Male => 'H',
        }
    }

    /// Returns the display label.
    pub fn label(self) -> &'static str {
        match self {
            Sex::Female => "Mujer",
            Sex::Male => "Hombre",
        }
    }

    /// Resolves a stored character code.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::UnknownCode`] for any code other than `'M'` or `'H'`.
    pub fn from_code(code: char) -> PayrollResult<Self> {
        Self::ALL
            .into_iter()
            .find(|sex| sex.code() == code)
            .ok_or_else(|| PayrollError::UnknownCode {
                kind: "sex",
                code: code.escape_default().to_string(),
            })
    }
}

impl FromStr for Sex {
    type Err = PayrollError;

    /// Parses free text such as `"M"`, `"mujer"` or `"Masculino"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_records::models::Sex;
    ///
    /// assert_eq!("Femenino".parse::<Sex>().unwrap(), Sex::Female);
    /// assert_eq!("hombre".parse::<Sex>().unwrap(), Sex::Male);
    /// assert!("X".parse::<Sex>().is_err());
    /// ```
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        alias::lookup(ALIASES, &alias::normalize(input)).ok_or_else(|| {
            PayrollError::InvalidValue {
                kind: "sex",
                input: input.to_string(),
            }
        })
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
