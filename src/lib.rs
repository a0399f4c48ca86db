//! Employee records with salary supplements.
//!
//! This crate validates employee data, computes seniority-based salary
//! supplements, stores employees in a sequential binary file and runs
//! single-pass reports over that file.

#![warn(missing_docs)]

pub mod args;
pub mod calculation;
pub mod codec;
pub mod config;
pub mod console;
pub mod error;
pub mod ingest;
pub mod models;
pub mod reports;

pub use args::{Args, Command};
pub use config::{AppConfig, ConfigLoader};
pub use error::{PayrollError, PayrollResult};
