//! Currency rendering for reports and snapshots.

const CURRENCY_SYMBOL: &str = "$";

/// Renders `amount` with exactly two fractional digits behind a `$` prefix.
///
/// Negative amounts keep their sign so an over-budget remainder stays
/// visible. Values that round to zero render as `$0.00`.
///
/// ```
/// use finance_tracker::currency::format_currency;
///
/// assert_eq!(format_currency(1234.5), "$1234.50");
/// assert_eq!(format_currency(-12.3), "$-12.30");
/// ```
pub fn format_currency(amount: f64) -> String {
    let digits = format!("{:.2}", amount);
    let digits = match digits.strip_prefix('-') {
        Some(magnitude) if magnitude.chars().all(|ch| ch == '0' || ch == '.') => magnitude,
        _ => digits.as_str(),
    };
    format!("{CURRENCY_SYMBOL}{digits}")
}
