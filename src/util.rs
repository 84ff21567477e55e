/// `part / whole` as a whole-number percentage, rounding halves up.
/// An empty `whole` yields 0 rather than a non-number.
pub fn percentage(part: u32, whole: u32) -> u32 {
    match whole {
        0 => 0,
        positive => ((part as f64 / positive as f64) * 100.0).round() as u32,
    }
}

/// Format a duration as seconds with one decimal, e.g. `9.5`
pub fn format_secs(d: std::time::Duration) -> String {
    format!("{:.1}", d.as_secs_f64())
}
