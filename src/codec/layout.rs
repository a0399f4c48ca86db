//! Binary record layouts.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::PayrollError;

/// The byte layout used for every record of a data file.
///
/// The two layouts share the name, sex, contract type and province fields
/// but encode salary and hire date differently, so a file written with one
/// cannot be read with the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordLayout {
    /// Salary as decimal text, hire date as epoch milliseconds.
    #[default]
    Timestamp,
    /// Salary as a 32-bit float, hire date as year, month and day.
    Calendar,
}

impl RecordLayout {
    /// Returns the lowercase name used in configuration and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            RecordLayout::Timestamp => "timestamp",
            RecordLayout::Calendar => "calendar",
        }
    }
}

impl FromStr for RecordLayout {
    type Err = PayrollError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "timestamp" => Ok(RecordLayout::Timestamp),
            "calendar" => Ok(RecordLayout::Calendar),
            _ => Err(PayrollError::InvalidValue {
                kind: "record layout",
                input: input.to_string(),
            }),
        }
    }
}

impl fmt::Display for RecordLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
