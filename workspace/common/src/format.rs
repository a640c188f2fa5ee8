//! Compact number formatting for report badges, axis ticks and tables.
//!
//! Magnitudes follow the South-Asian convention used by the sales team:
//! crore (10^7) and lakh (10^5) above the plain thousands bracket.

const CRORE: f64 = 10_000_000.0;
const LAKH: f64 = 100_000.0;
const THOUSAND: f64 = 1_000.0;

/// Formats `value` as a short human-readable magnitude.
///
/// ```
/// use common::format_magnitude;
///
/// assert_eq!(format_magnitude(1500.0), "1.5K");
/// assert_eq!(format_magnitude(150_000.0), "1.50 Lac");
/// assert_eq!(format_magnitude(15_000_000.0), "1.50 Cr");
/// ```
///
/// Non-numeric input (NaN or infinite) yields `"0"`.
pub fn format_magnitude(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    if value >= CRORE {
        format!("{:.2} Cr", value / CRORE)
    } else if value >= LAKH {
        format!("{:.2} Lac", value / LAKH)
    } else if value >= THOUSAND {
        format!("{:.1}K", value / THOUSAND)
    } else {
        let rounded = format!("{:.0}", value);
        // "-0" reads oddly for tiny negative values
        if rounded == "-0" { "0".to_string() } else { rounded }
    }
}

/// Formats a revenue figure with the rupee sign.
pub fn format_currency(value: f64) -> String {
    format!("₹{}", format_magnitude(value))
}
