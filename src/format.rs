//! Display formatting for predicted premiums.
//!
//! The presentation layer shows premiums as a thousands-separated rupee
//! amount with two decimals, e.g. `13,225.75 ₹`. Non-finite values fall back
//! to the raw float rendering instead of panicking.

/// Format a premium as `<grouped>.<2 decimals> ₹`.
pub fn format_premium(value: f32) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }

    // Round to whole paise in f64 to keep cents exact for display.
    let cents = (f64::from(value).abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{}.{fraction:02} ₹", group_thousands(whole))
}

/// Insert a comma every three digits, right to left.
fn group_thousands(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut groups = Vec::new();
    while value > 0 {
        groups.push((value % 1000) as u16);
        value /= 1000;
    }

    let mut out = groups.pop().map(|g| g.to_string()).unwrap_or_default();
    while let Some(group) = groups.pop() {
        out.push_str(&format!(",{group:03}"));
    }
    out
}
