//! Core data models for the Payroll Engine.
//!
//! This module contains the employee record, its salary policies, the payroll
//! records generated from it, and the report types built over a ledger.

mod employee;
mod payroll_record;
mod report;
mod salary_policy;

pub use employee::{Employee, EmployeeId};
pub use payroll_record::{PayrollBatch, PayrollRecord, PayrollTotals};
pub use report::{GroupSummary, HistorySummary, PayrollReport, SalaryStatistics};
pub use salary_policy::{
    EmployeeType, HourlyPolicy, MAX_PROJECTS_COMPLETED, ProjectPolicy, SalariedPolicy,
    SalaryPolicy, max_amount, max_hours_worked,
};
