//! Clock-time helpers for fractional hours of the day.

/// Fractional hour of the day from clock components.
pub fn hour_of_day(hour: u32, minute: u32, second: u32) -> f64 {
    hour as f64 + minute as f64 / 60.0 + second as f64 / 3600.0
}

/// Format a fractional hour as a 12-hour clock string, e.g. `"6:05 AM"`.
///
/// Minutes are rounded to the nearest whole minute. Hours outside [0, 24)
/// (possible for polar sunrise/sunset) wrap around the clock face.
pub fn format_hour_12(hour: f64) -> String {
    let total_minutes = (hour * 60.0).round() as i64;
    let total_minutes = total_minutes.rem_euclid(24 * 60);
    let h = total_minutes / 60;
    let m = total_minutes % 60;
    let period = if h >= 12 { "PM" } else { "AM" };
    let display_hour = match h % 12 {
        0 => 12,
        x => x,
    };
    format!("{display_hour}:{m:02} {period}")
}
