//! Tax bracket calculation.

use rust_decimal::Decimal;

use crate::config::TaxBracket;

/// The result of applying the tax bracket to a gross amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxResult {
    /// The rate that was applied.
    pub rate: Decimal,
    /// The tax withheld.
    pub tax: Decimal,
    /// Gross minus tax.
    pub net: Decimal,
}

/// Applies the tax bracket to a gross amount.
///
/// A gross strictly above the threshold is taxed at the high rate; a gross at
/// or below it is taxed at the standard rate. The whole amount is taxed at the
/// selected rate.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_tax;
/// use payroll_engine::config::TaxBracket;
/// use rust_decimal::Decimal;
///
/// let result = calculate_tax(Decimal::new(6250, 0), &TaxBracket::default());
/// assert_eq!(result.tax, Decimal::new(9375, 1));
/// assert_eq!(result.net, Decimal::new(53125, 1));
/// ```
pub fn calculate_tax(gross: Decimal, bracket: &TaxBracket) -> TaxResult {
    let rate = if gross > bracket.threshold {
        bracket.high_rate
    } else {
        bracket.standard_rate
    };
    let tax = gross * rate;

    TaxResult {
        rate,
        tax,
        net: gross - tax,
    }
}
