//! Payroll Engine
//!
//! This crate models employees paid under one of three salary policies
//! (salaried, hourly, project-based), turns them into immutable payroll
//! records, and keeps those records in a ledger that produces aggregate reports.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
