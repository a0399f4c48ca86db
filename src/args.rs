//! [`Args`] definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::codec::RecordLayout;
use crate::config::{AppConfig, LogLevel};

/// Employee records with salary supplements, kept in a binary data file.
#[derive(Debug, Parser)]
#[command(name = "payroll-records", version, about, long_about = None)]
pub struct Args {
    /// Path to a YAML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the employee data file.
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Record layout of the data file (timestamp or calendar).
    #[arg(long, global = true)]
    pub layout: Option<RecordLayout>,

    /// Maximum level of diagnostics written to stderr.
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands, one per tool of the suite.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Enter employees interactively and append them to the data file.
    Add,

    /// Append employees from a semicolon-delimited text file.
    Import {
        /// Text file with one `name;sex;salary;year;month;day;type;province` line per employee.
        input: PathBuf,
    },

    /// List veteran employees and the share they represent.
    Veterans {
        /// Write the whole listing without waiting for Enter.
        #[arg(long)]
        no_pause: bool,
    },

    /// Print the total pay of every employee.
    Payroll {
        /// Print one JSON object per employee instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print the highest total pay and every employee earning it.
    TopEarners,

    /// Print the province(s) with the most employees.
    Provinces {
        /// Print the count of every province.
        #[arg(long)]
        all: bool,
    },
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }

    /// Applies the flags given on the command line over `config`.
    pub fn apply_overrides(&self, mut config: AppConfig) -> AppConfig {
        if let Some(file) = &self.file {
            config.data_file = file.clone();
        }
        if let Some(layout) = self.layout {
            config.layout = layout;
        }
        if let Some(log_level) = self.log_level {
            config.log_level = log_level;
        }
        config
    }
}
