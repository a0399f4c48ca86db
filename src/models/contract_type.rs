//! Contract type of an employee.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::alias;
use crate::error::{PayrollError, PayrollResult};

/// The kind of contract an employee works under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractType {
    /// Paid on commission (code `'C'`).
    Commission,
    /// Permanent staff (code `'F'`).
    Permanent,
    /// Works from home (code `'D'`).
    HomeBased,
}

const ALIASES: &[(ContractType, &[&str])] = &[
    (
        ContractType::Commission,
        &[
            "C",
            "CO",
            "COM",
            "COMI",
            "COMIS",
            "COMISI",
            "COMISIO",
            "COMISION",
            "A COMISION",
            "COMISIONES",
        ],
    ),
    (
        ContractType::Permanent,
        &["F", "FI", "FIJ", "FIJO", "CONTRATO", "CONTRATO FIJO"],
    ),
    (
        ContractType::HomeBased,
        &[
            "D",
            "DO",
            "DOM",
            "DOMI",
            "DOMIC",
            "DOMICI",
            "DOMICIL",
            "DOMICILI",
            "DOMICILIO",
            "A DOMICILIO",
        ],
    ),
];

impl ContractType {
    /// All variants, in declaration order.
    pub const ALL: [ContractType; 3] = [
        ContractType::Commission,
        ContractType::Permanent,
        ContractType::HomeBased,
    ];

    /// Returns the character code stored in the data file.
    pub fn code(self) -> char {
        match self {
            ContractType::Commission => 'C',
            ContractType::Permanent => 'F',
            ContractType::HomeBased => 'D',
        }
    }

    /// Returns the display label.
    pub fn label(self) -> &'static str {
        match self {
            ContractType::Commission => "A comisión",
            ContractType::Permanent => "Fijo",
            ContractType::HomeBased => "A domicilio",
        }
    }

    /// Resolves a stored character code.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::UnknownCode`] when no variant uses `code`.
    pub fn from_code(code: char) -> PayrollResult<Self> {
        Self::ALL
            .into_iter()
            .find(|contract| contract.code() == code)
            .ok_or_else(|| PayrollError::UnknownCode {
                kind: "contract type",
                code: code.escape_default().to_string(),
            })
    }
}

impl FromStr for ContractType {
    type Err = PayrollError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        alias::lookup(ALIASES, &alias::normalize(input)).ok_or_else(|| {
            PayrollError::InvalidValue {
                kind: "contract type",
                input: input.to_string(),
            }
        })
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
