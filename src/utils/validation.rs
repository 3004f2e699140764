//! Guards applied to operator input before it reaches a [`BudgetRecord`].
//!
//! [`BudgetRecord`]: crate::ledger::BudgetRecord

use crate::errors::{FinanceError, Result};
use crate::ledger::BudgetPeriod;

/// Returns `value` unchanged when it is strictly greater than zero.
///
/// ```
/// use finance_tracker::utils::ensure_positive;
///
/// assert_eq!(ensure_positive(12.5).unwrap(), 12.5);
/// assert!(ensure_positive(0.0).is_err());
/// ```
pub fn ensure_positive(value: f64) -> Result<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(FinanceError::InvalidAmount(
            "value must be greater than zero".into(),
        ))
    }
}

/// Parses operator text as an amount and applies [`ensure_positive`].
pub fn parse_amount(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| FinanceError::InvalidAmount(format!("`{}` is not a number", trimmed)))?;
    if !value.is_finite() {
        return Err(FinanceError::InvalidAmount(format!(
            "`{}` is not a finite amount",
            trimmed
        )));
    }
    ensure_positive(value)
}

/// Accepts `weekly` or `monthly` in any letter case.
pub fn parse_period(raw: &str) -> Result<BudgetPeriod> {
    match raw.trim().to_lowercase().as_str() {
        "weekly" => Ok(BudgetPeriod::Weekly),
        "monthly" => Ok(BudgetPeriod::Monthly),
        other => Err(FinanceError::InvalidPeriod(format!(
            "`{}` is not one of weekly, monthly",
            other
        ))),
    }
}
