//! Salary policies and the employee type they imply.
//!
//! An employee is paid under exactly one [`SalaryPolicy`]. Each variant holds
//! the state its pay formula needs and validates that state on every change.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{calculate_hourly_pay, calculate_project_pay, calculate_salaried_pay};
use crate::config::PayRules;
use crate::error::{PayrollError, PayrollResult};

/// The kind of employee, determined by their salary policy.
///
/// # Example
///
/// ```
/// use payroll_engine::models::EmployeeType;
///
/// assert_eq!(EmployeeType::Hourly.label(), "Part-Time");
/// assert_eq!(EmployeeType::ProjectBased.to_string(), "Contract");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeType {
    /// Full-time employee on an annual salary.
    Salaried,
    /// Part-time employee paid by the hour.
    Hourly,
    /// Contractor paid per completed project.
    ProjectBased,
}

impl EmployeeType {
    /// Returns the human-readable label for this employee type.
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeType::Salaried => "Full-Time",
            EmployeeType::Hourly => "Part-Time",
            EmployeeType::ProjectBased => "Contract",
        }
    }
}

impl fmt::Display for EmployeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Largest annual salary, bonus, hourly rate or contract amount a policy accepts.
///
/// Together with [`max_hours_worked`], [`MAX_PROJECTS_COMPLETED`] and the
/// overtime multiplier cap this keeps every gross amount, and any realistic
/// sum of them, representable as a `Decimal`.
pub fn max_amount() -> Decimal {
    Decimal::new(1_000_000_000_000, 0)
}

/// Largest number of hours that can be recorded for one period.
pub fn max_hours_worked() -> Decimal {
    Decimal::new(10_000, 0)
}

/// Largest completed project count a contractor can hold.
pub const MAX_PROJECTS_COMPLETED: u32 = 1_000_000;

fn ensure_amount(field: &str, value: Decimal) -> PayrollResult<()> {
    if value < Decimal::ZERO {
        return Err(PayrollError::validation(
            field,
            format!("must not be negative, got {}", value),
        ));
    }
    if value > max_amount() {
        return Err(PayrollError::validation(
            field,
            format!("must not exceed {}, got {}", max_amount(), value),
        ));
    }
    Ok(())
}

fn ensure_projects_completed(completed: u32) -> PayrollResult<()> {
    if completed > MAX_PROJECTS_COMPLETED {
        return Err(PayrollError::validation(
            "projects_completed",
            format!("must not exceed {}, got {}", MAX_PROJECTS_COMPLETED, completed),
        ));
    }
    Ok(())
}

/// Annual salary plus a discretionary bonus, paid monthly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalariedPolicy {
    annual_salary: Decimal,
    bonus: Decimal,
}

impl SalariedPolicy {
    /// Creates a salaried policy with no bonus.
    pub fn new(annual_salary: Decimal) -> PayrollResult<Self> {
        ensure_amount("annual_salary", annual_salary)?;
        Ok(Self {
            annual_salary,
            bonus: Decimal::ZERO,
        })
    }

    /// The annual salary.
    pub fn annual_salary(&self) -> Decimal {
        self.annual_salary
    }

    /// The bonus added to each computation until replaced.
    pub fn bonus(&self) -> Decimal {
        self.bonus
    }

    /// Replaces the bonus.
    pub fn set_bonus(&mut self, bonus: Decimal) -> PayrollResult<()> {
        ensure_amount("bonus", bonus)?;
        self.bonus = bonus;
        Ok(())
    }

    /// Replaces the annual salary.
    pub fn set_annual_salary(&mut self, annual_salary: Decimal) -> PayrollResult<()> {
        ensure_amount("annual_salary", annual_salary)?;
        self.annual_salary = annual_salary;
        Ok(())
    }
}

/// Hourly rate with overtime beyond the weekly threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyPolicy {
    hourly_rate: Decimal,
    hours_worked: Decimal,
}

impl HourlyPolicy {
    /// Creates an hourly policy with no hours recorded.
    pub fn new(hourly_rate: Decimal) -> PayrollResult<Self> {
        ensure_amount("hourly_rate", hourly_rate)?;
        Ok(Self {
            hourly_rate,
            hours_worked: Decimal::ZERO,
        })
    }

    /// The hourly rate.
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    /// Hours worked in the current period.
    pub fn hours_worked(&self) -> Decimal {
        self.hours_worked
    }

    /// Records hours worked in the current period. Negative values are stored as zero.
    pub fn set_hours_worked(&mut self, hours: Decimal) -> PayrollResult<()> {
        if hours > max_hours_worked() {
            return Err(PayrollError::validation(
                "hours_worked",
                format!("must not exceed {}, got {}", max_hours_worked(), hours),
            ));
        }
        self.hours_worked = hours.max(Decimal::ZERO);
        Ok(())
    }

    /// Replaces the hourly rate.
    pub fn set_hourly_rate(&mut self, hourly_rate: Decimal) -> PayrollResult<()> {
        ensure_amount("hourly_rate", hourly_rate)?;
        self.hourly_rate = hourly_rate;
        Ok(())
    }
}

/// A fixed contract split evenly across a fixed number of projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectPolicy {
    contract_amount: Decimal,
    total_projects: u32,
    projects_completed: u32,
}

impl ProjectPolicy {
    /// Creates a project policy with no projects completed.
    ///
    /// `total_projects` is fixed for the life of the policy and must be at least one.
    pub fn new(contract_amount: Decimal, total_projects: u32) -> PayrollResult<Self> {
        ensure_amount("contract_amount", contract_amount)?;
        if total_projects == 0 {
            return Err(PayrollError::validation(
                "total_projects",
                "must be at least 1",
            ));
        }
        Ok(Self {
            contract_amount,
            total_projects,
            projects_completed: 0,
        })
    }

    /// The total contract amount.
    pub fn contract_amount(&self) -> Decimal {
        self.contract_amount
    }

    /// The number of projects the contract covers.
    pub fn total_projects(&self) -> u32 {
        self.total_projects
    }

    /// Projects completed so far.
    pub fn projects_completed(&self) -> u32 {
        self.projects_completed
    }

    /// The share of the contract paid per completed project.
    pub fn payment_per_project(&self) -> Decimal {
        self.contract_amount / Decimal::from(self.total_projects)
    }

    /// Sets the completed project count. The count may exceed `total_projects`.
    pub fn set_projects_completed(&mut self, completed: u32) -> PayrollResult<()> {
        ensure_projects_completed(completed)?;
        self.projects_completed = completed;
        Ok(())
    }

    /// Increments the completed project count by one.
    pub fn complete_project(&mut self) -> PayrollResult<()> {
        let completed = self.projects_completed.saturating_add(1);
        ensure_projects_completed(completed)?;
        self.projects_completed = completed;
        Ok(())
    }
}

/// The rule used to turn an employee's work inputs into a gross amount.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayRules;
/// use payroll_engine::models::{EmployeeType, SalaryPolicy};
/// use rust_decimal::Decimal;
///
/// let policy = SalaryPolicy::salaried(Decimal::new(75000, 0))?;
/// assert_eq!(policy.employee_type(), EmployeeType::Salaried);
/// assert_eq!(policy.compute_salary(&PayRules::default()), Decimal::new(6250, 0));
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SalaryPolicy {
    /// Annual salary paid monthly, plus bonus.
    Salaried(SalariedPolicy),
    /// Hourly rate with overtime.
    Hourly(HourlyPolicy),
    /// Per-project share of a fixed contract.
    ProjectBased(ProjectPolicy),
}

impl SalaryPolicy {
    /// Creates a salaried policy.
    pub fn salaried(annual_salary: Decimal) -> PayrollResult<Self> {
        SalariedPolicy::new(annual_salary).map(Self::Salaried)
    }

    /// Creates an hourly policy.
    pub fn hourly(hourly_rate: Decimal) -> PayrollResult<Self> {
        HourlyPolicy::new(hourly_rate).map(Self::Hourly)
    }

    /// Creates a project-based policy.
    pub fn project_based(contract_amount: Decimal, total_projects: u32) -> PayrollResult<Self> {
        ProjectPolicy::new(contract_amount, total_projects).map(Self::ProjectBased)
    }

    /// Returns the employee type this policy implies.
    pub fn employee_type(&self) -> EmployeeType {
        match self {
            SalaryPolicy::Salaried(_) => EmployeeType::Salaried,
            SalaryPolicy::Hourly(_) => EmployeeType::Hourly,
            SalaryPolicy::ProjectBased(_) => EmployeeType::ProjectBased,
        }
    }

    /// Computes the gross pay for the current period from the policy's state.
    pub fn compute_salary(&self, rules: &PayRules) -> Decimal {
        match self {
            SalaryPolicy::Salaried(p) => calculate_salaried_pay(p.annual_salary, p.bonus).total,
            SalaryPolicy::Hourly(p) => {
                calculate_hourly_pay(p.hourly_rate, p.hours_worked, &rules.overtime).total
            }
            SalaryPolicy::ProjectBased(p) => {
                calculate_project_pay(p.contract_amount, p.total_projects, p.projects_completed)
                    .total
            }
        }
    }
}
