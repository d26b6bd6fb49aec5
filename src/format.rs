//! Display Formatting
//!
//! Currency and timestamp renderings used by the cards and timelines.

use chrono::{DateTime, Utc};

/// Thai-baht style currency: `฿1,234.56`.
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!(
        "{}฿{}.{:02}",
        if negative { "-" } else { "" },
        grouped,
        fraction
    )
}

/// `dd-mm-yyyy HH:MM`, as shown on stock cards.
pub fn format_date_time(t: &DateTime<Utc>) -> String {
    t.format("%d-%m-%Y %H:%M").to_string()
}

/// Long date for memory cards, e.g. `June 1, 2025`.
pub fn format_long_date(t: &DateTime<Utc>) -> String {
    t.format("%B %-d, %Y").to_string()
}

/// `dd-Month-yyyy` for event rows.
pub fn format_event_date(t: &DateTime<Utc>) -> String {
    t.format("%d-%B-%Y").to_string()
}

/// Optional timestamps render as `N/A` when the snapshot has no value yet.
pub fn format_optional(t: Option<DateTime<Utc>>, render: fn(&DateTime<Utc>) -> String) -> String {
    t.map(|t| render(&t)).unwrap_or_else(|| "N/A".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "฿0.00");
        assert_eq!(format_currency(5.5), "฿5.50");
        assert_eq!(format_currency(1234.56), "฿1,234.56");
        assert_eq!(format_currency(1_000_000.0), "฿1,000,000.00");
    }

    #[test]
    fn currency_rounds_to_cents() {
        assert_eq!(format_currency(19.999), "฿20.00");
        assert_eq!(format_currency(-42.1), "-฿42.10");
    }

    #[test]
    fn timestamp_renderings() {
        let t = Utc.with_ymd_and_hms(2025, 6, 1, 9, 5, 0).unwrap();
        assert_eq!(format_date_time(&t), "01-06-2025 09:05");
        assert_eq!(format_long_date(&t), "June 1, 2025");
        assert_eq!(format_event_date(&t), "01-June-2025");
    }

    #[test]
    fn missing_timestamp_is_na() {
        assert_eq!(format_optional(None, format_date_time), "N/A");
        let t = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(format_optional(Some(t), format_long_date), "June 1, 2025");
    }
}
