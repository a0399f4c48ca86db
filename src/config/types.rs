//! Configuration types for the payroll records tools.
//!
//! These structures are deserialized from a YAML file. Every field has a
//! default, so an empty file (or no file at all) is a valid configuration.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;

use crate::codec::RecordLayout;
use crate::error::PayrollError;
use crate::reports::DEFAULT_VETERAN_YEARS;

/// Default name of the employee data file.
pub const DEFAULT_DATA_FILE: &str = "FICHE.DAT";

/// Default number of lines per page of the veteran listing.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Application configuration.
///
/// # Example
///
/// ```
/// use payroll_records::codec::RecordLayout;
/// use payroll_records::config::AppConfig;
///
/// let config: AppConfig = serde_yaml::from_str("layout: calendar\npage_size: 20").unwrap();
/// assert_eq!(config.layout, RecordLayout::Calendar);
/// assert_eq!(config.page_size, 20);
/// assert_eq!(config.veteran_years, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Path of the employee data file.
    pub data_file: PathBuf,
    /// Byte layout of every record in the data file.
    pub layout: RecordLayout,
    /// Lines per page of the veteran listing; zero disables paging.
    pub page_size: usize,
    /// Seniority in years from which an employee is a veteran.
    pub veteran_years: u32,
    /// Maximum level of diagnostics written to stderr.
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            layout: RecordLayout::default(),
            page_size: DEFAULT_PAGE_SIZE,
            veteran_years: DEFAULT_VETERAN_YEARS,
            log_level: LogLevel::default(),
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,
    /// Designates lower priority information.
    Debug,
    /// Designates useful information.
    Info,
    /// Designates hazardous situations.
    #[default]
    Warn,
    /// Designates very serious errors.
    Error,
}

impl LogLevel {
    /// Returns the lowercase name used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

impl FromStr for LogLevel {
    type Err = PayrollError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(PayrollError::InvalidValue {
                kind: "log level",
                input: input.to_string(),
            }),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
