use chrono::{DateTime, NaiveDate, Utc};

pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%b %d, %Y").to_string()
}

pub fn format_optional_date(value: Option<&DateTime<Utc>>) -> String {
    value.map(format_date).unwrap_or_else(|| "—".to_string())
}

pub fn format_period(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    match (start, end) {
        (Some(start), Some(end)) => format!(
            "{} – {}",
            start.format("%b %d"),
            end.format("%b %d, %Y")
        ),
        (Some(start), None) => format!("Since {}", start.format("%b %d, %Y")),
        (None, Some(end)) => format!("Until {}", end.format("%b %d, %Y")),
        (None, None) => "Current period".to_string(),
    }
}
