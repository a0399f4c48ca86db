//! Andalusian provinces an employee can be posted to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::alias;
use crate::error::{PayrollError, PayrollResult};

/// Shortest name prefix accepted when parsing free text.
const MIN_PREFIX_LEN: usize = 2;

/// One of the eight provinces of Andalusia.
///
/// Ordering follows the numeric code, so collections keyed by province
/// iterate in code order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Province {
    /// Almería (code 1).
    Almeria,
    /// Cádiz (code 2).
    Cadiz,
    /// Córdoba (code 3).
    Cordoba,
    /// Granada (code 4).
    Granada,
    /// Huelva (code 5).
    Huelva,
    /// Jaén (code 6).
    Jaen,
    /// Málaga (code 7).
    Malaga,
    /// Sevilla (code 8).
    Sevilla,
}

/// Code, display name and unaccented key for each province.
const TABLE: [(Province, u8, &str, &str); 8] = [
    (Province::Almeria, 1, "Almería", "ALMERIA"),
    (Province::Cadiz, 2, "Cádiz", "CADIZ"),
    (Province::Cordoba, 3, "Córdoba", "CORDOBA"),
    (Province::Granada, 4, "Granada", "GRANADA"),
    (Province::Huelva, 5, "Huelva", "HUELVA"),
    (Province::Jaen, 6, "Jaén", "JAEN"),
    (Province::Malaga, 7, "Málaga", "MALAGA"),
    (Province::Sevilla, 8, "Sevilla", "SEVILLA"),
];

impl Province {
    /// All provinces, in code order.
    pub const ALL: [Province; 8] = [
        Province::Almeria,
        Province::Cadiz,
        Province::Cordoba,
        Province::Granada,
        Province::Huelva,
        Province::Jaen,
        Province::Malaga,
        Province::Sevilla,
    ];

    fn entry(self) -> &'static (Province, u8, &'static str, &'static str) {
        // TABLE is in code order, matching ALL
        &TABLE[self as usize]
    }

    /// Returns the numeric code stored in the data file.
    pub fn code(self) -> u8 {
        self.entry().1
    }

    /// Returns the display name.
    pub fn label(self) -> &'static str {
        self.entry().2
    }

    /// Returns true for the provinces that earn the remote posting bonus.
    pub fn has_remote_posting_bonus(self) -> bool {
        matches!(self, Province::Jaen | Province::Huelva | Province::Almeria)
    }

    /// Resolves a stored numeric code.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::UnknownCode`] for codes outside 1–8.
    pub fn from_code(code: u8) -> PayrollResult<Self> {
        TABLE
            .iter()
            .find(|(_, c, _, _)| *c == code)
            .map(|(province, ..)| *province)
            .ok_or_else(|| PayrollError::UnknownCode {
                kind: "province",
                code: code.to_string(),
            })
    }
}

impl FromStr for Province {
    type Err = PayrollError;

    /// Parses a province from its code digit or any prefix of its name of
    /// at least two letters, ignoring case and accents.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_records::models::Province;
    ///
    /// assert_eq!("jaén".parse::<Province>().unwrap(), Province::Jaen);
    /// assert_eq!("Mal".parse::<Province>().unwrap(), Province::Malaga);
    /// assert_eq!("8".parse::<Province>().unwrap(), Province::Sevilla);
    /// ```
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized = alias::normalize(input);
        let invalid = || PayrollError::InvalidValue {
            kind: "province",
            input: input.to_string(),
        };

        if let Ok(code) = normalized.parse::<u8>() {
            return Self::from_code(code).map_err(|_| invalid());
        }

        if normalized.len() < MIN_PREFIX_LEN {
            return Err(invalid());
        }

        TABLE
            .iter()
            .find(|(_, _, _, key)| key.starts_with(normalized.as_str()))
            .map(|(province, ..)| *province)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
