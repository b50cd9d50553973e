//! Locale-independent formatting for route metrics.

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_DAY: u64 = 86_400;

/// Formats a duration as `"{d}d {h}h {m}m"`, `"{h}h {m}m"` or `"{m}m"`.
///
/// Zero-valued leading units are omitted; seconds are truncated. Negative
/// and non-finite inputs render as `"0m"`.
pub fn format_duration(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };

    let days = total / SECONDS_PER_DAY;
    let hours = (total / SECONDS_PER_HOUR) % 24;
    let minutes = (total / SECONDS_PER_MINUTE) % 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Formats a distance in meters as kilometres with two decimals.
pub fn format_distance_km(meters: f64) -> String {
    format!("{:.2} km", meters / 1000.0)
}
