//! Form Validation
//!
//! Client-side checks for the registration and stock forms. The backend
//! rejects nothing, so this is the only write-time validation there is.

/// Registration: display name must be non-blank.
pub fn name_error(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some("Name is required")
    } else {
        None
    }
}

/// Registration: rough shape check, one `@` with a dotted domain.
pub fn email_error(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some("Email is required");
    }
    let mut parts = value.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Some("Invalid email format"),
    };
    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.is_empty();
    if local.is_empty() || !domain_ok || value.contains(char::is_whitespace) {
        Some("Invalid email format")
    } else {
        None
    }
}

/// Registration password rules; returns the messages for every rule the
/// password does not yet satisfy, in display order.
pub fn password_failures(value: &str) -> Vec<&'static str> {
    let rules: [(&'static str, fn(&str) -> bool); 3] = [
        ("At least 6 characters long", |v| v.chars().count() >= 6),
        ("At least one uppercase letter", |v| {
            v.chars().any(|c| c.is_ascii_uppercase())
        }),
        ("At least one number", |v| v.chars().any(|c| c.is_ascii_digit())),
    ];
    rules
        .into_iter()
        .filter(|(_, test)| !test(value))
        .map(|(message, _)| message)
        .collect()
}

/// Stock form: non-negative integer (quantity, minimum stock).
pub fn parse_quantity(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

/// Stock form: non-negative price.
pub fn parse_price(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_requires_non_blank() {
        assert!(name_error("").is_some());
        assert!(name_error("   ").is_some());
        assert!(name_error("Alice").is_none());
    }

    #[test]
    fn email_shape_checks() {
        assert_eq!(email_error(""), Some("Email is required"));
        assert!(email_error("a@b.co").is_none());
        assert!(email_error("not-an-email").is_some());
        assert!(email_error("a@b").is_some());
        assert!(email_error("a@.com").is_some());
        assert!(email_error("a b@c.com").is_some());
        assert!(email_error("a@b@c.com").is_some());
    }

    #[test]
    fn password_rules_accumulate() {
        assert_eq!(
            password_failures(""),
            vec![
                "At least 6 characters long",
                "At least one uppercase letter",
                "At least one number",
            ]
        );
        assert_eq!(password_failures("abcdef"), vec![
            "At least one uppercase letter",
            "At least one number",
        ]);
        assert_eq!(password_failures("Abcde1"), Vec::<&str>::new());
    }

    #[test]
    fn quantity_parsing_rejects_negatives_and_garbage() {
        assert_eq!(parse_quantity("10"), Some(10));
        assert_eq!(parse_quantity(" 0 "), Some(0));
        assert_eq!(parse_quantity("-1"), None);
        assert_eq!(parse_quantity("ten"), None);
        assert_eq!(parse_quantity(""), None);
    }

    #[test]
    fn price_parsing() {
        assert_eq!(parse_price("19.99"), Some(19.99));
        assert_eq!(parse_price("0"), Some(0.0));
        assert_eq!(parse_price("-0.5"), None);
        assert_eq!(parse_price("abc"), None);
    }
}
