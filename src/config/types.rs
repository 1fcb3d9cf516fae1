//! Configuration types for payroll processing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The tax bracket applied to each payroll record.
///
/// A gross amount strictly above `threshold` is taxed at `high_rate`;
/// anything at or below it is taxed at `standard_rate`. The threshold is
/// compared against the gross of a single payroll run, not an annualized figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Gross amount above which the high rate applies.
    pub threshold: Decimal,
    /// Rate applied at or below the threshold (e.g., 0.15).
    pub standard_rate: Decimal,
    /// Rate applied above the threshold (e.g., 0.20).
    pub high_rate: Decimal,
}

impl Default for TaxBracket {
    fn default() -> Self {
        Self {
            threshold: Decimal::new(50000, 0),
            standard_rate: Decimal::new(15, 2),
            high_rate: Decimal::new(20, 2),
        }
    }
}

/// Overtime rule for hourly employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeRule {
    /// Hours per period paid at the ordinary rate.
    pub weekly_threshold_hours: Decimal,
    /// Multiplier applied to hours beyond the threshold.
    pub multiplier: Decimal,
}

impl Default for OvertimeRule {
    fn default() -> Self {
        Self {
            weekly_threshold_hours: Decimal::new(40, 0),
            multiplier: Decimal::new(15, 1),
        }
    }
}

/// How the ledger numbers new employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeIdScheme {
    /// Prefix placed before the sequence number (e.g., "EMP").
    pub prefix: String,
    /// Number given to the first employee created.
    pub first_number: u32,
}

impl Default for EmployeeIdScheme {
    fn default() -> Self {
        Self {
            prefix: "EMP".to_string(),
            first_number: 1001,
        }
    }
}

/// The rules a pay computation depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRules {
    /// Tax bracket configuration.
    pub tax: TaxBracket,
    /// Overtime configuration.
    pub overtime: OvertimeRule,
}

/// The complete payroll configuration loaded from YAML.
///
/// The defaults match the bundled `config/payroll.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollConfig {
    /// Tax bracket configuration.
    #[serde(default)]
    pub tax: TaxBracket,
    /// Overtime configuration.
    #[serde(default)]
    pub overtime: OvertimeRule,
    /// Employee id numbering.
    #[serde(default)]
    pub employee_ids: EmployeeIdScheme,
}

impl PayrollConfig {
    /// Returns the pay rules subset of this configuration.
    pub fn pay_rules(&self) -> PayRules {
        PayRules {
            tax: self.tax.clone(),
            overtime: self.overtime.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_tax_bracket() {
        let tax = TaxBracket::default();
        assert_eq!(tax.threshold, dec("50000"));
        assert_eq!(tax.standard_rate, dec("0.15"));
        assert_eq!(tax.high_rate, dec("0.20"));
    }

    #[test]
    fn test_default_overtime_rule() {
        let overtime = OvertimeRule::default();
        assert_eq!(overtime.weekly_threshold_hours, dec("40"));
        assert_eq!(overtime.multiplier, dec("1.5"));
    }

    #[test]
    fn test_default_id_scheme() {
        let ids = EmployeeIdScheme::default();
        assert_eq!(ids.prefix, "EMP");
        assert_eq!(ids.first_number, 1001);
    }

    #[test]
    fn test_pay_rules_copies_tax_and_overtime() {
        let mut config = PayrollConfig::default();
        config.tax.high_rate = dec("0.30");
        config.overtime.multiplier = dec("2.0");

        let rules = config.pay_rules();
        assert_eq!(rules.tax.high_rate, dec("0.30"));
        assert_eq!(rules.overtime.multiplier, dec("2.0"));
    }
}
