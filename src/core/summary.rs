use crate::domain::model::{RouteSummary, SummaryText, OPTIMIZED_ORDER_PLACEHOLDER};

const MINUTES_UNIT: &str = "دقیقه";
const KILOMETRES_UNIT: &str = "کیلومتر";

/// Whole minutes, e.g. `"25 دقیقه"`. Exact halves go to the even minute.
pub fn duration_text(seconds: f64) -> String {
    let minutes = (seconds / 60.0).round_ties_even() as i64;
    format!("{} {}", minutes, MINUTES_UNIT)
}

/// Kilometres rounded to two decimals, e.g. `"12.35 کیلومتر"` or `"5.0 کیلومتر"`.
pub fn distance_text(metres: f64) -> String {
    // `{:.2}` rounds the exact binary value, so 0.015 (stored just below) gives 0.01.
    let rounded = format!("{:.2}", metres / 1000.0);
    let km = rounded.parse::<f64>().unwrap_or(metres / 1000.0);
    format!("{} {}", format_decimal(km), KILOMETRES_UNIT)
}

// Whole values keep one trailing zero so clients always see a decimal point.
fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

pub fn summarize(summary: &RouteSummary) -> SummaryText {
    SummaryText {
        duration_text: duration_text(summary.duration),
        distance_text: distance_text(summary.distance),
        optimized_order: OPTIMIZED_ORDER_PLACEHOLDER.to_string(),
    }
}
