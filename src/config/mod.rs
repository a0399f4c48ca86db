//! Configuration loading for the payroll records tools.
//!
//! Configuration comes from an optional YAML file whose keys all have
//! defaults. Command-line flags override what the file says.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, DEFAULT_DATA_FILE, DEFAULT_PAGE_SIZE, LogLevel};
