//! Salary calculation for the three pay policies.
//!
//! Each function is a pure computation over the policy's inputs and returns
//! the intermediate figures alongside the total so callers can show how a
//! gross amount was reached.

use rust_decimal::Decimal;

use crate::config::OvertimeRule;

/// Number of pay periods in a year for salaried employees.
pub const MONTHS_PER_YEAR: u32 = 12;

/// The result of a salaried pay calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalariedPayResult {
    /// The annual salary divided by [`MONTHS_PER_YEAR`].
    pub monthly_base: Decimal,
    /// The bonus added on top of the monthly base.
    pub bonus: Decimal,
    /// Monthly base plus bonus.
    pub total: Decimal,
}

/// Calculates monthly pay for a salaried employee.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_salaried_pay;
/// use rust_decimal::Decimal;
///
/// let result = calculate_salaried_pay(Decimal::new(75000, 0), Decimal::ZERO);
/// assert_eq!(result.total, Decimal::new(6250, 0));
/// ```
pub fn calculate_salaried_pay(annual_salary: Decimal, bonus: Decimal) -> SalariedPayResult {
    let monthly_base = annual_salary / Decimal::from(MONTHS_PER_YEAR);

    SalariedPayResult {
        monthly_base,
        bonus,
        total: monthly_base + bonus,
    }
}

/// The result of an hourly pay calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyPayResult {
    /// Hours paid at the ordinary rate.
    pub regular_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
    /// Pay for the regular hours.
    pub regular_pay: Decimal,
    /// Pay for the overtime hours.
    pub overtime_pay: Decimal,
    /// Regular pay plus overtime pay.
    pub total: Decimal,
}

/// Calculates pay for an hourly employee, splitting regular and overtime hours.
///
/// Hours up to the rule's threshold are paid at `hourly_rate`; hours beyond it
/// are paid at `hourly_rate * multiplier`. Negative hours are treated as zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_hourly_pay;
/// use payroll_engine::config::OvertimeRule;
/// use rust_decimal::Decimal;
///
/// let result = calculate_hourly_pay(
///     Decimal::new(25, 0),
///     Decimal::new(45, 0),
///     &OvertimeRule::default(),
/// );
/// assert_eq!(result.regular_pay, Decimal::new(1000, 0));
/// assert_eq!(result.overtime_pay, Decimal::new(1875, 1));
/// assert_eq!(result.total, Decimal::new(11875, 1));
/// ```
pub fn calculate_hourly_pay(
    hourly_rate: Decimal,
    hours_worked: Decimal,
    rule: &OvertimeRule,
) -> HourlyPayResult {
    let hours = hours_worked.max(Decimal::ZERO);
    let regular_hours = hours.min(rule.weekly_threshold_hours);
    let overtime_hours = (hours - rule.weekly_threshold_hours).max(Decimal::ZERO);

    let regular_pay = regular_hours * hourly_rate;
    let overtime_pay = overtime_hours * hourly_rate * rule.multiplier;

    HourlyPayResult {
        regular_hours,
        overtime_hours,
        regular_pay,
        overtime_pay,
        total: regular_pay + overtime_pay,
    }
}

/// The result of a project-based pay calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPayResult {
    /// The contract amount divided by the number of contracted projects.
    pub payment_per_project: Decimal,
    /// Projects completed this period.
    pub projects_completed: u32,
    /// Completed projects times the payment per project.
    pub total: Decimal,
}

/// Calculates pay for a project-based contractor.
///
/// `total_projects` must be at least one; a zero is reported as zero pay
/// rather than dividing by zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_project_pay;
/// use rust_decimal::Decimal;
///
/// let result = calculate_project_pay(Decimal::new(50000, 0), 10, 3);
/// assert_eq!(result.payment_per_project, Decimal::new(5000, 0));
/// assert_eq!(result.total, Decimal::new(15000, 0));
/// ```
pub fn calculate_project_pay(
    contract_amount: Decimal,
    total_projects: u32,
    projects_completed: u32,
) -> ProjectPayResult {
    let payment_per_project = if total_projects == 0 {
        Decimal::ZERO
    } else {
        contract_amount / Decimal::from(total_projects)
    };

    ProjectPayResult {
        payment_per_project,
        projects_completed,
        total: Decimal::from(projects_completed) * payment_per_project,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_salaried_without_bonus() {
        let result = calculate_salaried_pay(dec("75000"), Decimal::ZERO);
        assert_eq!(result.monthly_base, dec("6250"));
        assert_eq!(result.bonus, Decimal::ZERO);
        assert_eq!(result.total, dec("6250"));
    }

    #[test]
    fn test_salaried_with_bonus() {
        let result = calculate_salaried_pay(dec("60000"), dec("500.25"));
        assert_eq!(result.total, dec("5500.25"));
    }

    #[test]
    fn test_salaried_non_terminating_division_stays_exact_enough() {
        let result = calculate_salaried_pay(dec("65000"), Decimal::ZERO);
        assert_eq!(result.total.round_dp(2), dec("5416.67"));
    }

    #[test]
    fn test_hourly_under_threshold_has_no_overtime() {
        let result = calculate_hourly_pay(dec("25"), dec("35"), &OvertimeRule::default());
        assert_eq!(result.regular_hours, dec("35"));
        assert_eq!(result.overtime_hours, Decimal::ZERO);
        assert_eq!(result.total, dec("875"));
    }

    #[test]
    fn test_hourly_exactly_at_threshold() {
        let result = calculate_hourly_pay(dec("22"), dec("40"), &OvertimeRule::default());
        assert_eq!(result.overtime_hours, Decimal::ZERO);
        assert_eq!(result.total, dec("880"));
    }

    #[test]
    fn test_hourly_with_overtime() {
        let result = calculate_hourly_pay(dec("25"), dec("45"), &OvertimeRule::default());
        assert_eq!(result.regular_hours, dec("40"));
        assert_eq!(result.overtime_hours, dec("5"));
        assert_eq!(result.regular_pay, dec("1000"));
        assert_eq!(result.overtime_pay, dec("187.5"));
        assert_eq!(result.total, dec("1187.5"));
    }

    #[test]
    fn test_hourly_negative_hours_pay_nothing() {
        let result = calculate_hourly_pay(dec("25"), dec("-8"), &OvertimeRule::default());
        assert_eq!(result.regular_hours, Decimal::ZERO);
        assert_eq!(result.total, Decimal::ZERO);
    }

    #[test]
    fn test_hourly_custom_overtime_rule() {
        let rule = OvertimeRule {
            weekly_threshold_hours: dec("38"),
            multiplier: dec("2"),
        };
        let result = calculate_hourly_pay(dec("10"), dec("40"), &rule);
        assert_eq!(result.regular_pay, dec("380"));
        assert_eq!(result.overtime_pay, dec("40"));
    }

    #[test]
    fn test_project_pay() {
        let result = calculate_project_pay(dec("50000"), 10, 3);
        assert_eq!(result.payment_per_project, dec("5000"));
        assert_eq!(result.projects_completed, 3);
        assert_eq!(result.total, dec("15000"));
    }

    #[test]
    fn test_project_pay_nothing_completed() {
        let result = calculate_project_pay(dec("50000"), 10, 0);
        assert_eq!(result.total, Decimal::ZERO);
    }

    #[test]
    fn test_project_pay_zero_total_projects() {
        let result = calculate_project_pay(dec("50000"), 0, 2);
        assert_eq!(result.payment_per_project, Decimal::ZERO);
        assert_eq!(result.total, Decimal::ZERO);
    }

    proptest! {
        #[test]
        fn salaried_is_annual_over_twelve_plus_bonus(
            annual_cents in 0i64..100_000_000,
            bonus_cents in 0i64..10_000_000,
        ) {
            let annual = Decimal::new(annual_cents, 2);
            let bonus = Decimal::new(bonus_cents, 2);
            let result = calculate_salaried_pay(annual, bonus);
            prop_assert_eq!(result.total, annual / Decimal::from(12) + bonus);
        }

        #[test]
        fn hourly_matches_overtime_formula(
            rate_cents in 0i64..20_000,
            hours in -20i64..120,
        ) {
            let rate = Decimal::new(rate_cents, 2);
            let h = Decimal::from(hours).max(Decimal::ZERO);
            let forty = Decimal::from(40);
            let expected = h.min(forty) * rate
                + (h - forty).max(Decimal::ZERO) * rate * dec("1.5");

            let result = calculate_hourly_pay(rate, Decimal::from(hours), &OvertimeRule::default());
            prop_assert_eq!(result.total, expected);
            prop_assert!(result.total >= Decimal::ZERO);
        }

        #[test]
        fn project_pay_is_completed_times_share(
            contract_cents in 0i64..100_000_000,
            total in 1u32..50,
            completed in 0u32..60,
        ) {
            let contract = Decimal::new(contract_cents, 2);
            let result = calculate_project_pay(contract, total, completed);
            prop_assert_eq!(
                result.total,
                Decimal::from(completed) * (contract / Decimal::from(total))
            );
        }
    }
}
