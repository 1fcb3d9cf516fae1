//! Payroll report models.
//!
//! A [`PayrollReport`] combines two independent views: statistics over the
//! current employee roster, and totals over the full payroll history.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{EmployeeType, PayrollTotals};

/// Head count and summed current salary for a group of employees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Number of employees in the group.
    pub employee_count: usize,
    /// Sum of the employees' current computed salaries.
    pub total_salary: Decimal,
}

impl GroupSummary {
    pub(crate) fn add(&mut self, salary: Decimal) {
        self.employee_count += 1;
        self.total_salary += salary;
    }
}

/// Statistics over the current computed salaries of all employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryStatistics {
    /// Sum of all current salaries.
    pub total: Decimal,
    /// `total` divided by the number of employees.
    pub average: Decimal,
    /// Highest current salary.
    pub highest: Decimal,
    /// Lowest current salary.
    pub lowest: Decimal,
}

impl SalaryStatistics {
    /// Computes statistics over a set of salaries, or `None` if there are none.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::SalaryStatistics;
    /// use rust_decimal::Decimal;
    ///
    /// let stats = SalaryStatistics::from_salaries([Decimal::new(100, 0), Decimal::new(300, 0)]).unwrap();
    /// assert_eq!(stats.average, Decimal::new(200, 0));
    /// assert!(SalaryStatistics::from_salaries([]).is_none());
    /// ```
    pub fn from_salaries(salaries: impl IntoIterator<Item = Decimal>) -> Option<Self> {
        let mut salaries = salaries.into_iter();
        let first = salaries.next()?;

        let mut count: u64 = 1;
        let mut stats = Self {
            total: first,
            average: first,
            highest: first,
            lowest: first,
        };

        for salary in salaries {
            count += 1;
            stats.total += salary;
            stats.highest = stats.highest.max(salary);
            stats.lowest = stats.lowest.min(salary);
        }

        stats.average = stats.total / Decimal::from(count);
        Some(stats)
    }
}

/// Totals over every payroll record ever issued.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySummary {
    /// Number of payroll records.
    pub record_count: usize,
    /// Summed gross, tax and net.
    pub totals: PayrollTotals,
}

/// Aggregate report over a ledger.
///
/// Groups are held in ordered maps so two reports over the same state compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// Number of current employees.
    pub employee_count: usize,
    /// Current employees grouped by type.
    pub by_type: BTreeMap<EmployeeType, GroupSummary>,
    /// Current employees grouped by department.
    pub by_department: BTreeMap<String, GroupSummary>,
    /// Salary statistics, absent when there are no employees.
    pub salaries: Option<SalaryStatistics>,
    /// Totals over the payroll history.
    pub history: HistorySummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_statistics_over_sample_salaries() {
        let stats = SalaryStatistics::from_salaries([
            dec("6250"),
            dec("875"),
            dec("15000"),
        ])
        .unwrap();

        assert_eq!(stats.total, dec("22125"));
        assert_eq!(stats.average, dec("7375"));
        assert_eq!(stats.highest, dec("15000"));
        assert_eq!(stats.lowest, dec("875"));
    }

    #[test]
    fn test_statistics_single_salary() {
        let stats = SalaryStatistics::from_salaries([dec("0")]).unwrap();
        assert_eq!(stats.highest, Decimal::ZERO);
        assert_eq!(stats.lowest, Decimal::ZERO);
        assert_eq!(stats.average, Decimal::ZERO);
    }

    #[test]
    fn test_statistics_empty_is_none() {
        assert!(SalaryStatistics::from_salaries(Vec::new()).is_none());
    }

    #[test]
    fn test_group_summary_add() {
        let mut group = GroupSummary::default();
        group.add(dec("100"));
        group.add(dec("50.5"));

        assert_eq!(group.employee_count, 2);
        assert_eq!(group.total_salary, dec("150.5"));
    }

    #[test]
    fn test_report_serializes_type_keys_in_snake_case() {
        let mut by_type = BTreeMap::new();
        by_type.insert(EmployeeType::ProjectBased, GroupSummary::default());

        let report = PayrollReport {
            employee_count: 0,
            by_type,
            by_department: BTreeMap::new(),
            salaries: None,
            history: HistorySummary::default(),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["by_type"].get("project_based").is_some());
        assert!(json["salaries"].is_null());
    }
}
