//! Configuration loading and management for the Payroll Engine.
//!
//! This module provides functionality to load payroll rules from a YAML file:
//! the tax bracket, the overtime rule for hourly employees, and the employee
//! id numbering scheme.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Tax threshold: {}", loader.config().tax.threshold);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EmployeeIdScheme, OvertimeRule, PayRules, PayrollConfig, TaxBracket};
