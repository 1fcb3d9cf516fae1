//! The payroll ledger.
//!
//! The ledger owns the employee roster and the append-only payroll history,
//! issues employee ids, processes payroll and builds reports.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info, warn};

use crate::config::{PayRules, PayrollConfig};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    Employee, EmployeeId, GroupSummary, HistorySummary, PayrollBatch, PayrollRecord,
    PayrollReport, PayrollTotals, SalaryPolicy, SalaryStatistics,
};

use super::EmployeeIdGenerator;

/// Owner of all employees and of the payroll history.
///
/// Employees keep their insertion order. Payroll records are only ever
/// appended, so history order is chronological. An id, once held by any
/// employee, is never given to another one, even after removal. Both
/// collections are exposed as read-only slices; employees are changed through
/// [`PayrollLedger::employee_mut`].
///
/// # Example
///
/// ```
/// use payroll_engine::ledger::PayrollLedger;
/// use payroll_engine::models::SalaryPolicy;
/// use rust_decimal::Decimal;
///
/// let mut ledger = PayrollLedger::new();
/// let id = ledger.create_employee(
///     "John Smith",
///     "john@company.com",
///     "Engineering",
///     SalaryPolicy::salaried(Decimal::new(75000, 0))?,
/// );
///
/// let record = ledger.process_one(&id)?;
/// assert_eq!(record.net(), Decimal::new(53125, 1));
/// assert_eq!(ledger.history().len(), 1);
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PayrollLedger {
    rules: PayRules,
    ids: EmployeeIdGenerator,
    issued_ids: BTreeSet<EmployeeId>,
    employees: Vec<Employee>,
    history: Vec<PayrollRecord>,
}

impl Default for PayrollLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl PayrollLedger {
    /// Creates an empty ledger using the default configuration.
    pub fn new() -> Self {
        Self::with_config(&PayrollConfig::default())
    }

    /// Creates an empty ledger using the given configuration.
    pub fn with_config(config: &PayrollConfig) -> Self {
        Self {
            rules: config.pay_rules(),
            ids: EmployeeIdGenerator::new(&config.employee_ids),
            issued_ids: BTreeSet::new(),
            employees: Vec::new(),
            history: Vec::new(),
        }
    }

    /// The pay rules applied when computing salaries and tax.
    pub fn rules(&self) -> &PayRules {
        &self.rules
    }

    /// Creates an employee with a freshly issued id and adds it to the roster.
    pub fn create_employee(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
        policy: SalaryPolicy,
    ) -> EmployeeId {
        let mut id = self.ids.next_id();
        while self.issued_ids.contains(&id) {
            id = self.ids.next_id();
        }
        self.issued_ids.insert(id.clone());

        let employee = Employee::new(id.clone(), name, email, department, policy);
        debug!(
            employee_id = %id,
            employee_type = %employee.employee_type(),
            "Created employee"
        );
        self.employees.push(employee);
        id
    }

    /// Adds an existing employee record to the roster.
    ///
    /// Fails with `DuplicateEmployee` if the id belongs, or has ever belonged,
    /// to an employee of this ledger.
    pub fn add_employee(&mut self, employee: Employee) -> PayrollResult<()> {
        if self.issued_ids.contains(employee.id()) {
            warn!(employee_id = %employee.id(), "Rejected duplicate employee id");
            return Err(PayrollError::DuplicateEmployee {
                id: employee.id().to_string(),
            });
        }

        debug!(employee_id = %employee.id(), "Added employee");
        self.issued_ids.insert(employee.id().clone());
        self.employees.push(employee);
        Ok(())
    }

    /// Removes an employee from the roster and returns it.
    ///
    /// Payroll records already issued for the employee stay in history, and
    /// the id stays reserved.
    pub fn remove_employee(&mut self, id: &EmployeeId) -> PayrollResult<Employee> {
        let index = self.require_position(id)?;
        let employee = self.employees.remove(index);
        debug!(employee_id = %id, "Removed employee");
        Ok(employee)
    }

    /// Looks up an employee by id.
    pub fn employee(&self, id: &EmployeeId) -> PayrollResult<&Employee> {
        let index = self.require_position(id)?;
        Ok(&self.employees[index])
    }

    /// Looks up an employee by id for modification.
    pub fn employee_mut(&mut self, id: &EmployeeId) -> PayrollResult<&mut Employee> {
        let index = self.require_position(id)?;
        Ok(&mut self.employees[index])
    }

    /// All current employees in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Every payroll record issued, oldest first.
    pub fn history(&self) -> &[PayrollRecord] {
        &self.history
    }

    /// The most recent `limit` payroll records, oldest first.
    pub fn recent_history(&self, limit: usize) -> &[PayrollRecord] {
        let start = self.history.len().saturating_sub(limit);
        &self.history[start..]
    }

    /// Finds employees whose id or name contains `term`, ignoring case.
    pub fn search(&self, term: &str) -> Vec<&Employee> {
        let term = term.to_lowercase();
        self.employees
            .iter()
            .filter(|e| {
                e.id().as_str().to_lowercase().contains(&term)
                    || e.name().to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Generates a payroll record for every current employee and appends them to history.
    pub fn process_all(&mut self) -> PayrollBatch {
        let records: Vec<PayrollRecord> = self
            .employees
            .iter()
            .map(|e| e.generate_payroll_record(&self.rules))
            .collect();

        self.history.extend(records.iter().cloned());
        let batch = PayrollBatch::new(records);

        info!(
            employees = batch.len(),
            total_gross = %batch.totals.gross,
            total_tax = %batch.totals.tax,
            total_net = %batch.totals.net,
            "Processed payroll for all employees"
        );
        batch
    }

    /// Generates a payroll record for one employee and appends it to history.
    pub fn process_one(&mut self, id: &EmployeeId) -> PayrollResult<PayrollRecord> {
        let index = self.require_position(id)?;
        let record = self.employees[index].generate_payroll_record(&self.rules);
        self.history.push(record.clone());

        info!(
            employee_id = %id,
            gross = %record.gross(),
            net = %record.net(),
            "Processed payroll for employee"
        );
        Ok(record)
    }

    /// Builds a report over the current roster and the full history.
    ///
    /// Computed from scratch on every call.
    pub fn report(&self) -> PayrollReport {
        let mut by_type = BTreeMap::new();
        let mut by_department: BTreeMap<String, GroupSummary> = BTreeMap::new();
        let mut salaries = Vec::with_capacity(self.employees.len());

        for employee in &self.employees {
            let salary = employee.compute_salary(&self.rules);
            by_type
                .entry(employee.employee_type())
                .or_insert_with(GroupSummary::default)
                .add(salary);
            by_department
                .entry(employee.department().to_string())
                .or_default()
                .add(salary);
            salaries.push(salary);
        }

        PayrollReport {
            employee_count: self.employees.len(),
            by_type,
            by_department,
            salaries: SalaryStatistics::from_salaries(salaries),
            history: HistorySummary {
                record_count: self.history.len(),
                totals: PayrollTotals::from_records(&self.history),
            },
        }
    }

    fn position(&self, id: &EmployeeId) -> Option<usize> {
        self.employees.iter().position(|e| e.id() == id)
    }

    fn require_position(&self, id: &EmployeeId) -> PayrollResult<usize> {
        self.position(id).ok_or_else(|| {
            warn!(employee_id = %id, "Employee not found");
            PayrollError::EmployeeNotFound { id: id.to_string() }
        })
    }
}
