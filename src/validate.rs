//! Field validators shared by the wizards
//!
//! Everything here is a pure function over the raw input strings. Step
//! completeness predicates in [`crate::state`] combine these with
//! required-field presence checks.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum number of characters kept for a company name.
pub const MAX_COMPANY_NAME_LENGTH: usize = 40;

/// Minimum number of digits in a phone number.
pub const MIN_PHONE_DIGITS: usize = 8;

pub const MIN_PASSWORD_LENGTH: usize = 6;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("time pattern is valid"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Strips every non-digit character from a phone input.
pub fn sanitize_phone(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Hyphenates a Korean phone number for display, `010-1234-5678`.
///
/// Seoul numbers keep their two digit area code. Digit counts other than
/// 9 to 11 come back unchanged.
pub fn format_phone(input: &str) -> String {
    let digits = sanitize_phone(input);
    let area = if digits.starts_with("02") { 2 } else { 3 };
    let len = digits.len();
    if !(9..=11).contains(&len) || len - area < 7 {
        return digits;
    }
    let tail = len - 4;
    format!("{}-{}-{}", &digits[..area], &digits[area..tail], &digits[tail..])
}

/// A phone number is valid when its digits number at least [`MIN_PHONE_DIGITS`].
pub fn is_valid_phone(input: &str) -> bool {
    sanitize_phone(input).len() >= MIN_PHONE_DIGITS
}

pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Truncates a company name to [`MAX_COMPANY_NAME_LENGTH`] characters.
///
/// Over-long input is cut rather than rejected, counting characters and
/// not bytes so Hangul names are not split mid-codepoint.
pub fn truncate_company_name(input: &str) -> String {
    input.chars().take(MAX_COMPANY_NAME_LENGTH).collect()
}

pub fn is_valid_company_name(name: &str) -> bool {
    is_present(name) && name.chars().count() <= MAX_COMPANY_NAME_LENGTH
}

pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

/// `HH:MM`, 24 hour clock.
pub fn is_valid_time(value: &str) -> bool {
    TIME_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("worker.kim@example.co.kr"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a.b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_phone() {
        assert_eq!(sanitize_phone("010-1234-5678"), "01012345678");
        assert!(is_valid_phone("1012345678"));
        assert!(is_valid_phone("1234-5678"));
        assert!(!is_valid_phone("123"));
        assert!(!is_valid_phone("abc-defg-hijk"));
    }

    #[test]
    fn test_company_name_is_truncated_not_rejected() {
        let long = "가".repeat(45);
        let truncated = truncate_company_name(&long);
        assert_eq!(truncated.chars().count(), MAX_COMPANY_NAME_LENGTH);
        assert!(is_valid_company_name(&truncated));
        assert!(!is_valid_company_name("   "));
        assert_eq!(truncate_company_name("한빛식당"), "한빛식당");
    }

    #[test]
    fn test_format_phone() {
        assert_eq!(format_phone("01012345678"), "010-1234-5678");
        assert_eq!(format_phone("0212345678"), "02-1234-5678");
        assert_eq!(format_phone("021234567"), "02-123-4567");
        assert_eq!(format_phone("0311234567"), "031-123-4567");
        assert_eq!(format_phone("1234"), "1234");
    }

    #[test]
    fn test_password_length() {
        assert!(!is_valid_password("12345"));
        assert!(is_valid_password("123456"));
        assert!(is_valid_password("비밀번호입력"));
    }

    #[test]
    fn test_time() {
        assert!(is_valid_time("09:00"));
        assert!(is_valid_time("23:59"));
        assert!(!is_valid_time("24:00"));
        assert!(!is_valid_time("9:00"));
    }
}
