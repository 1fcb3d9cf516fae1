//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from a YAML file.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::types::{PayRules, PayrollConfig};

/// Loads and validates payroll configuration.
///
/// # File Format
///
/// ```text
/// tax:
///   threshold: "50000"
///   standard_rate: "0.15"
///   high_rate: "0.20"
/// overtime:
///   weekly_threshold_hours: "40"
///   multiplier: "1.5"
/// employee_ids:
///   prefix: "EMP"
///   first_number: 1001
/// ```
///
/// Any section may be omitted, in which case its defaults apply.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml")?;
/// println!("Overtime after {} hours", loader.config().overtime.weekly_threshold_hours);
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - A value is out of range (`ConfigInvalid`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Parses configuration from YAML text.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::config::ConfigLoader;
    /// use rust_decimal::Decimal;
    ///
    /// let loader = ConfigLoader::from_yaml_str("tax:\n  threshold: \"8000\"\n  standard_rate: \"0.1\"\n  high_rate: \"0.3\"\n")?;
    /// assert_eq!(loader.config().tax.threshold, Decimal::new(8000, 0));
    /// assert_eq!(loader.config().employee_ids.prefix, "EMP");
    /// # Ok::<(), payroll_engine::error::PayrollError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> PayrollResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, path: &str) -> PayrollResult<Self> {
        let config: PayrollConfig =
            serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        Self::validate(&config)?;

        debug!(path = %path, "Loaded payroll configuration");
        Ok(Self { config })
    }

    fn validate(config: &PayrollConfig) -> PayrollResult<()> {
        Self::check_rate("tax.standard_rate", config.tax.standard_rate)?;
        Self::check_rate("tax.high_rate", config.tax.high_rate)?;

        if config.tax.threshold < Decimal::ZERO {
            return Err(PayrollError::ConfigInvalid {
                field: "tax.threshold".to_string(),
                message: "must not be negative".to_string(),
            });
        }

        if config.overtime.weekly_threshold_hours < Decimal::ZERO {
            return Err(PayrollError::ConfigInvalid {
                field: "overtime.weekly_threshold_hours".to_string(),
                message: "must not be negative".to_string(),
            });
        }

        if config.overtime.multiplier < Decimal::ONE {
            return Err(PayrollError::ConfigInvalid {
                field: "overtime.multiplier".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if config.overtime.multiplier > Decimal::TEN {
            return Err(PayrollError::ConfigInvalid {
                field: "overtime.multiplier".to_string(),
                message: "must not exceed 10".to_string(),
            });
        }

        if config.employee_ids.prefix.trim().is_empty() {
            return Err(PayrollError::ConfigInvalid {
                field: "employee_ids.prefix".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    fn check_rate(field: &str, rate: Decimal) -> PayrollResult<()> {
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(PayrollError::ConfigInvalid {
                field: field.to_string(),
                message: format!("must be between 0 and 1, got {}", rate),
            });
        }
        Ok(())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the pay rules from the loaded configuration.
    pub fn pay_rules(&self) -> PayRules {
        self.config.pay_rules()
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }
}
