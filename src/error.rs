//! Error types for the Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while managing employees and
//! processing payroll.

use thiserror::Error;

/// The main error type for the Payroll Engine.
///
/// Every fallible operation in the engine returns this error type. A failed
/// operation never leaves partial changes behind.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::EmployeeNotFound {
///     id: "EMP9999".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: EMP9999");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayrollError {
    /// An operation referenced an employee id that is not in the ledger.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was not found.
        id: String,
    },

    /// An employee with the same id is already in the ledger.
    #[error("Duplicate employee id: {id}")]
    DuplicateEmployee {
        /// The id that already exists.
        id: String,
    },

    /// A policy-specific operation was invoked on an employee with a different policy.
    #[error("Operation '{operation}' is not supported for {employee_type} employees")]
    InvalidOperation {
        /// The operation that was attempted.
        operation: String,
        /// The type label of the employee it was attempted on.
        employee_type: String,
    },

    /// A caller-supplied value was outside its valid domain.
    #[error("Invalid value for '{field}': {message}")]
    Validation {
        /// The field that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds an out-of-range value.
    #[error("Invalid configuration value '{field}': {message}")]
    ConfigInvalid {
        /// The configuration key that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },
}

impl PayrollError {
    /// Shorthand for a [`PayrollError::Validation`] error.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
