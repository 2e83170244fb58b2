// Display formatting for stat cards and the pages table

/// Format an integer with comma thousands separators ("24,891")
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Percent-change line shown under a stat value
///
/// A `+` sign is added only for strictly positive changes.
pub fn change_text(change: f64) -> String {
    let sign = if change > 0.0 { "+" } else { "" };
    format!("{}{:.1}% vs previous period", sign, change)
}

/// Average time on page ("2m 05s")
pub fn duration_text(minutes: u64, seconds: u64) -> String {
    format!("{}m {:02}s", minutes, seconds)
}
