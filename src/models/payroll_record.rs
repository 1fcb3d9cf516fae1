//! Payroll record models.
//!
//! This module contains the [`PayrollRecord`] produced for one employee on one
//! payroll run, and the [`PayrollTotals`] and [`PayrollBatch`] types used when
//! several records are summarized together.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EmployeeId, EmployeeType};

/// An immutable snapshot of one pay computation for one employee.
///
/// The employee's name is copied at generation time, so later renames do not
/// alter history. `net` always equals `gross - tax`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    record_id: Uuid,
    employee_id: EmployeeId,
    employee_name: String,
    employee_type: EmployeeType,
    gross: Decimal,
    tax: Decimal,
    net: Decimal,
    created_at: DateTime<Utc>,
}

impl PayrollRecord {
    pub(crate) fn new(
        employee_id: EmployeeId,
        employee_name: String,
        employee_type: EmployeeType,
        gross: Decimal,
        tax: Decimal,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            record_id: Uuid::new_v4(),
            employee_id,
            employee_name,
            employee_type,
            gross,
            tax,
            net: gross - tax,
            created_at,
        }
    }

    /// Unique identifier of this record.
    pub fn record_id(&self) -> Uuid {
        self.record_id
    }

    /// The id of the employee this record was generated for.
    pub fn employee_id(&self) -> &EmployeeId {
        &self.employee_id
    }

    /// The employee's name when the record was generated.
    pub fn employee_name(&self) -> &str {
        &self.employee_name
    }

    /// The employee's type when the record was generated.
    pub fn employee_type(&self) -> EmployeeType {
        self.employee_type
    }

    /// Gross pay.
    pub fn gross(&self) -> Decimal {
        self.gross
    }

    /// Tax withheld.
    pub fn tax(&self) -> Decimal {
        self.tax
    }

    /// Net pay.
    pub fn net(&self) -> Decimal {
        self.net
    }

    /// When the record was generated.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl fmt::Display for PayrollRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Date: {} | ID: {} | Name: {} | Type: {} | Gross: ${:.2} | Tax: ${:.2} | Net: ${:.2}",
            self.created_at.format("%Y-%m-%d"),
            self.employee_id,
            self.employee_name,
            self.employee_type,
            self.gross,
            self.tax,
            self.net
        )
    }
}

/// Summed gross, tax and net across a set of payroll records.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollTotals;
/// use rust_decimal::Decimal;
///
/// let totals = PayrollTotals::default();
/// assert_eq!(totals.gross, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Sum of gross pay.
    pub gross: Decimal,
    /// Sum of tax withheld.
    pub tax: Decimal,
    /// Sum of net pay.
    pub net: Decimal,
}

impl PayrollTotals {
    /// Adds one record to the totals.
    pub fn add(&mut self, record: &PayrollRecord) {
        self.gross += record.gross;
        self.tax += record.tax;
        self.net += record.net;
    }

    /// Sums a sequence of records.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a PayrollRecord>) -> Self {
        records.into_iter().fold(Self::default(), |mut totals, record| {
            totals.add(record);
            totals
        })
    }
}

/// The records produced by one payroll run, with their totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBatch {
    /// Records in employee order.
    pub records: Vec<PayrollRecord>,
    /// Totals across `records`.
    pub totals: PayrollTotals,
}

impl PayrollBatch {
    /// Builds a batch, computing totals from the records.
    pub fn new(records: Vec<PayrollRecord>) -> Self {
        let totals = PayrollTotals::from_records(&records);
        Self { records, totals }
    }

    /// Number of records in the batch.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the batch has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_record(id: &str, gross: &str, tax: &str) -> PayrollRecord {
        PayrollRecord::new(
            EmployeeId::new(id),
            "John Smith".to_string(),
            EmployeeType::Salaried,
            dec(gross),
            dec(tax),
            Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_net_is_gross_minus_tax() {
        let record = create_sample_record("EMP1001", "6250", "937.5");
        assert_eq!(record.net(), dec("5312.5"));
    }

    #[test]
    fn test_records_get_distinct_ids() {
        let a = create_sample_record("EMP1001", "100", "15");
        let b = create_sample_record("EMP1001", "100", "15");
        assert_ne!(a.record_id(), b.record_id());
    }

    #[test]
    fn test_display_formats_two_decimal_places() {
        let record = create_sample_record("EMP1001", "6250", "937.5");
        assert_eq!(
            record.to_string(),
            "Date: 2026-01-15 | ID: EMP1001 | Name: John Smith | Type: Full-Time | \
             Gross: $6250.00 | Tax: $937.50 | Net: $5312.50"
        );
    }

    #[test]
    fn test_totals_from_records() {
        let records = vec![
            create_sample_record("EMP1001", "6250", "937.5"),
            create_sample_record("EMP1002", "1187.5", "178.125"),
        ];

        let totals = PayrollTotals::from_records(&records);
        assert_eq!(totals.gross, dec("7437.5"));
        assert_eq!(totals.tax, dec("1115.625"));
        assert_eq!(totals.net, dec("6321.875"));
    }

    #[test]
    fn test_batch_totals_match_records() {
        let batch = PayrollBatch::new(vec![
            create_sample_record("EMP1001", "100", "15"),
            create_sample_record("EMP1002", "200", "30"),
        ]);

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.totals.gross, dec("300"));
        assert_eq!(batch.totals.net, dec("255"));
    }

    #[test]
    fn test_empty_batch() {
        let batch = PayrollBatch::new(vec![]);
        assert!(batch.is_empty());
        assert_eq!(batch.totals, PayrollTotals::default());
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let record = create_sample_record("EMP1001", "6250", "937.5");
        let json = serde_json::to_string(&record).unwrap();
        let parsed: PayrollRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
