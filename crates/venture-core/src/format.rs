//! Display formatting for amounts, percentages and dates.

use chrono::NaiveDate;

/// `12.5` -> `"12.5%"`; whole numbers drop the decimal.
pub fn percent(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}%")
    } else {
        format!("{rounded:.1}%")
    }
}

/// Compact USD: `$950`, `$250K`, `$2.5M`, `$1.2B`.
///
/// The unit is picked after rounding, so `999_950` renders as `$1M`.
pub fn currency(amount: f64) -> String {
    const UNITS: [(f64, &str); 4] = [(1.0, ""), (1e3, "K"), (1e6, "M"), (1e9, "B")];

    let sign = if amount < 0.0 { "-" } else { "" };
    let magnitude = amount.abs();
    let mut tier = UNITS
        .iter()
        .rposition(|(scale, _)| magnitude >= *scale)
        .unwrap_or(0);
    loop {
        let (scale, suffix) = UNITS[tier];
        let scaled = if tier == 0 {
            magnitude.round()
        } else {
            ((magnitude / scale) * 10.0).round() / 10.0
        };
        if scaled >= 1000.0 && tier + 1 < UNITS.len() {
            tier += 1;
            continue;
        }
        return if scaled.fract() == 0.0 {
            format!("{sign}${scaled:.0}{suffix}")
        } else {
            format!("{sign}${scaled:.1}{suffix}")
        };
    }
}

/// Investment multiple, `2.35` -> `"2.4x"`.
pub fn multiple(value: f64) -> String {
    format!("{value:.1}x")
}

pub fn date(value: NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// Placeholder for absent values in tables.
pub const MISSING: &str = "-";

pub fn optional<T>(value: Option<T>, render: impl FnOnce(T) -> String) -> String {
    value.map_or_else(|| MISSING.to_string(), render)
}
