//! Calculation logic for the Payroll Engine.
//!
//! This module contains the pay formulas for salaried, hourly and
//! project-based employees, and the tax bracket applied to every payroll record.

mod salary;
mod tax;

pub use salary::{
    HourlyPayResult, MONTHS_PER_YEAR, ProjectPayResult, SalariedPayResult, calculate_hourly_pay,
    calculate_project_pay, calculate_salaried_pay,
};
pub use tax::{TaxResult, calculate_tax};
