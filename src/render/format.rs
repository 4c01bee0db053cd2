//! Number formatting for German-style display

/// Format whole euros with dot thousands separators, e.g. `12.450 €`
pub fn format_revenue(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);

    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }

    out.push_str(" €");
    out
}

/// Format a percentage, e.g. `85%`
pub fn format_percent(value: impl std::fmt::Display) -> String {
    format!("{}%", value)
}
