//! Employee model and related types.
//!
//! This module defines the [`Employee`] record and its [`EmployeeId`].

use std::fmt;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::calculate_tax;
use crate::config::PayRules;
use crate::error::{PayrollError, PayrollResult};

use super::{EmployeeType, PayrollRecord, SalaryPolicy};

/// Identifier of an employee, e.g. `EMP1001`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Wraps an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A worker's identity plus the policy their pay is computed under.
///
/// The id is fixed at construction. Name, email and department can be changed
/// freely; policy inputs can only be changed through the mutator matching the
/// employee's policy.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayRules;
/// use payroll_engine::models::{Employee, EmployeeId, SalaryPolicy};
/// use rust_decimal::Decimal;
///
/// let mut employee = Employee::new(
///     EmployeeId::new("EMP1001"),
///     "John Smith",
///     "john@company.com",
///     "Engineering",
///     SalaryPolicy::salaried(Decimal::new(75000, 0))?,
/// );
/// employee.set_bonus(Decimal::new(500, 0))?;
/// assert_eq!(employee.compute_salary(&PayRules::default()), Decimal::new(6750, 0));
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    email: String,
    department: String,
    policy: SalaryPolicy,
}

impl Employee {
    /// Creates an employee record.
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
        policy: SalaryPolicy,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            department: department.into(),
            policy,
        }
    }

    /// The employee's id.
    pub fn id(&self) -> &EmployeeId {
        &self.id
    }

    /// The employee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The employee's email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The department the employee belongs to.
    pub fn department(&self) -> &str {
        &self.department
    }

    /// The employee's salary policy.
    pub fn policy(&self) -> &SalaryPolicy {
        &self.policy
    }

    /// The employee type implied by the salary policy.
    pub fn employee_type(&self) -> EmployeeType {
        self.policy.employee_type()
    }

    /// Replaces the name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replaces the email address.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Replaces the department.
    pub fn set_department(&mut self, department: impl Into<String>) {
        self.department = department.into();
    }

    /// Computes the gross pay for the current period.
    pub fn compute_salary(&self, rules: &PayRules) -> Decimal {
        self.policy.compute_salary(rules)
    }

    /// Produces a payroll record for the current period.
    ///
    /// The employee itself is not modified; storing the record is the
    /// caller's responsibility.
    pub fn generate_payroll_record(&self, rules: &PayRules) -> PayrollRecord {
        let gross = self.compute_salary(rules);
        let tax = calculate_tax(gross, &rules.tax);

        PayrollRecord::new(
            self.id.clone(),
            self.name.clone(),
            self.employee_type(),
            gross,
            tax.tax,
            Utc::now(),
        )
    }

    /// Replaces the bonus of a salaried employee.
    pub fn set_bonus(&mut self, bonus: Decimal) -> PayrollResult<()> {
        let employee_type = self.employee_type();
        match &mut self.policy {
            SalaryPolicy::Salaried(p) => p.set_bonus(bonus),
            _ => Err(invalid_operation(employee_type, "set_bonus")),
        }
    }

    /// Replaces the annual salary of a salaried employee.
    pub fn set_annual_salary(&mut self, annual_salary: Decimal) -> PayrollResult<()> {
        let employee_type = self.employee_type();
        match &mut self.policy {
            SalaryPolicy::Salaried(p) => p.set_annual_salary(annual_salary),
            _ => Err(invalid_operation(employee_type, "set_annual_salary")),
        }
    }

    /// Records hours worked by an hourly employee. Negative hours are stored as zero.
    ///
    /// Hours above [`max_hours_worked`](super::max_hours_worked) are rejected.
    pub fn set_hours_worked(&mut self, hours: Decimal) -> PayrollResult<()> {
        let employee_type = self.employee_type();
        match &mut self.policy {
            SalaryPolicy::Hourly(p) => p.set_hours_worked(hours),
            _ => Err(invalid_operation(employee_type, "set_hours_worked")),
        }
    }

    /// Replaces the hourly rate of an hourly employee.
    pub fn set_hourly_rate(&mut self, hourly_rate: Decimal) -> PayrollResult<()> {
        let employee_type = self.employee_type();
        match &mut self.policy {
            SalaryPolicy::Hourly(p) => p.set_hourly_rate(hourly_rate),
            _ => Err(invalid_operation(employee_type, "set_hourly_rate")),
        }
    }

    /// Sets the completed project count of a contractor.
    pub fn set_projects_completed(&mut self, completed: u32) -> PayrollResult<()> {
        let employee_type = self.employee_type();
        match &mut self.policy {
            SalaryPolicy::ProjectBased(p) => p.set_projects_completed(completed),
            _ => Err(invalid_operation(employee_type, "set_projects_completed")),
        }
    }

    /// Marks one more project as completed for a contractor.
    pub fn complete_project(&mut self) -> PayrollResult<()> {
        let employee_type = self.employee_type();
        match &mut self.policy {
            SalaryPolicy::ProjectBased(p) => p.complete_project(),
            _ => Err(invalid_operation(employee_type, "complete_project")),
        }
    }
}

fn invalid_operation(employee_type: EmployeeType, operation: &str) -> PayrollError {
    PayrollError::InvalidOperation {
        operation: operation.to_string(),
        employee_type: employee_type.label().to_string(),
    }
}
