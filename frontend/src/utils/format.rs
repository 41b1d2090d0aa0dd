/// Two-decimal amount without grouping, e.g. `10000.00`.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Display currency with thousands separators, e.g. `$12,345.60`.
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}${}.{}", sign, grouped, cents)
}

pub fn format_count(value: u32) -> String {
    let raw = value.to_string();
    let mut out = String::new();
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_change_pct(change: Option<f64>) -> Option<String> {
    change.map(|pct| {
        if pct >= 0.0 {
            format!("+{:.1}%", pct)
        } else {
            format!("{:.1}%", pct)
        }
    })
}

/// Keeps only the last four characters visible.
pub fn mask_account_number(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() <= 4 {
        return digits.into_iter().collect();
    }
    let visible: String = digits[digits.len() - 4..].iter().collect();
    format!("{}{}", "•".repeat(digits.len() - 4), visible)
}
