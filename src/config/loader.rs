//! Configuration loading functionality.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::types::AppConfig;
use crate::error::{PayrollError, PayrollResult};

/// Loads an [`AppConfig`] from a YAML file.
///
/// # Example
///
/// ```no_run
/// use payroll_records::config::ConfigLoader;
///
/// let config = ConfigLoader::load("payroll.yaml")?;
/// println!("Data file: {}", config.data_file.display());
/// # Ok::<(), payroll_records::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// Keys missing from the file take their default value.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read ([`PayrollError::ConfigNotFound`])
    /// - The file is not valid YAML for [`AppConfig`] ([`PayrollError::ConfigParseError`])
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<AppConfig> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content).map_err(|message| PayrollError::ConfigParseError {
            path: path_str.clone(),
            message,
        })?;

        debug!(path = %path_str, ?config, "Loaded configuration");
        Ok(config)
    }

    fn parse(content: &str) -> Result<AppConfig, String> {
        // An empty document deserializes as null rather than an empty map.
        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }
}
