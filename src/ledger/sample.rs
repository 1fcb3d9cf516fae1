//! Sample roster for demonstrations and smoke tests.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PayrollConfig;
use crate::error::PayrollResult;
use crate::models::SalaryPolicy;

use super::PayrollLedger;

impl PayrollLedger {
    /// Creates a ledger seeded with five sample employees.
    ///
    /// | Name | Type | Terms |
    /// |---|---|---|
    /// | John Smith | salaried | 75000 / year |
    /// | Sarah Johnson | salaried | 65000 / year |
    /// | Mike Wilson | hourly | 25.00 / hour, 35 hours |
    /// | Lisa Brown | hourly | 22.00 / hour, 40 hours |
    /// | David Lee | contract | 50000 over 10 projects, 3 completed |
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::config::PayrollConfig;
    /// use payroll_engine::ledger::PayrollLedger;
    ///
    /// let ledger = PayrollLedger::with_sample_roster(&PayrollConfig::default())?;
    /// assert_eq!(ledger.employees().len(), 5);
    /// # Ok::<(), payroll_engine::error::PayrollError>(())
    /// ```
    pub fn with_sample_roster(config: &PayrollConfig) -> PayrollResult<Self> {
        let mut ledger = Self::with_config(config);

        ledger.create_employee(
            "John Smith",
            "john@company.com",
            "Engineering",
            SalaryPolicy::salaried(Decimal::new(75000, 0))?,
        );
        ledger.create_employee(
            "Sarah Johnson",
            "sarah@company.com",
            "Marketing",
            SalaryPolicy::salaried(Decimal::new(65000, 0))?,
        );
        let mike = ledger.create_employee(
            "Mike Wilson",
            "mike@company.com",
            "Support",
            SalaryPolicy::hourly(Decimal::new(25, 0))?,
        );
        let lisa = ledger.create_employee(
            "Lisa Brown",
            "lisa@company.com",
            "Sales",
            SalaryPolicy::hourly(Decimal::new(22, 0))?,
        );
        let david = ledger.create_employee(
            "David Lee",
            "david@company.com",
            "Consulting",
            SalaryPolicy::project_based(Decimal::new(50000, 0), 10)?,
        );

        ledger
            .employee_mut(&mike)?
            .set_hours_worked(Decimal::new(35, 0))?;
        ledger
            .employee_mut(&lisa)?
            .set_hours_worked(Decimal::new(40, 0))?;
        ledger.employee_mut(&david)?.set_projects_completed(3)?;

        debug!(employees = ledger.employees().len(), "Seeded sample roster");
        Ok(ledger)
    }
}
