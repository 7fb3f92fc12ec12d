use crate::error::{AppError, AppResult};
use regex::Regex;
use std::sync::OnceLock;

fn phone_regex() -> &'static Regex {
    static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
    PHONE_REGEX.get_or_init(|| Regex::new(r"^\+?\d{8,15}$").expect("valid phone regex"))
}

/// Strip the separators people type into phone fields, keeping a leading `+`.
pub fn normalize_phone(phone: &str) -> String {
    let trimmed = phone.trim();
    let digits: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();
    if trimmed.starts_with('+') {
        format!("+{digits}")
    } else {
        digits
    }
}

/// Validate a client phone number (local or international, 8 to 15 digits).
pub fn validate_phone(phone: &str) -> AppResult<()> {
    if !phone_regex().is_match(&normalize_phone(phone)) {
        return Err(AppError::ValidationError(format!(
            "Invalid phone number: {phone}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+225 07 12 34 56 78").is_ok());
        assert!(validate_phone("0712345678").is_ok());
        assert!(validate_phone("+1 (234) 567-8901").is_ok());
        assert!(validate_phone("1234").is_err());
        assert!(validate_phone("").is_err());
        assert!(validate_phone("call me").is_err());
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("+225 07 12 34 56 78"), "+2250712345678");
        assert_eq!(normalize_phone(" 07-12-34-56-78 "), "0712345678");
    }
}
