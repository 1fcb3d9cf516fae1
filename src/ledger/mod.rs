//! Payroll ledger for the Payroll Engine.
//!
//! This module contains the [`PayrollLedger`], which owns employees and
//! payroll history, and the [`EmployeeIdGenerator`] it uses to number
//! new employees.
//!
//! # Example
//!
//! ```
//! use payroll_engine::config::PayrollConfig;
//! use payroll_engine::ledger::PayrollLedger;
//!
//! let mut ledger = PayrollLedger::with_sample_roster(&PayrollConfig::default())?;
//! let batch = ledger.process_all();
//! assert_eq!(batch.len(), 5);
//! assert_eq!(ledger.report().history.record_count, 5);
//! # Ok::<(), payroll_engine::error::PayrollError>(())
//! ```

mod id_generator;
mod payroll_ledger;
mod sample;

pub use id_generator::EmployeeIdGenerator;
pub use payroll_ledger::PayrollLedger;
