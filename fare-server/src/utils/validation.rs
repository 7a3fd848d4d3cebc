//! Input validation helpers
//!
//! Length limits and checks shared by the admin handlers. SQLite TEXT has
//! no built-in length enforcement, so limits live here.

use rust_decimal::Decimal;

use crate::pricing::money::{self, PriceError};
use crate::utils::{AppError, ErrorCode};

/// Zone names
pub const MAX_NAME_LEN: usize = 100;

/// Trim a required string and check it is non-empty and within the limit
///
/// Returns the trimmed value, which is what gets stored.
pub fn validate_required_text<'a>(
    value: &'a str,
    field: &str,
    max_len: usize,
) -> Result<&'a str, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    let len = trimmed.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(trimmed)
}

/// Validate an admin-supplied price and convert it to stored cents
pub fn validate_price(price: Decimal) -> Result<i64, AppError> {
    money::to_cents(price).map_err(|e: PriceError| {
        AppError::with_message(ErrorCode::InvalidPrice, e.to_string())
            .with_detail("price", price.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_is_trimmed() {
        assert_eq!(
            validate_required_text("  Zone 4 ", "name", MAX_NAME_LEN).unwrap(),
            "Zone 4"
        );
    }

    #[test]
    fn test_required_text_rejects_blank_and_long() {
        let err = validate_required_text("   ", "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let long = "z".repeat(MAX_NAME_LEN + 1);
        let err = validate_required_text(&long, "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let exact = "z".repeat(MAX_NAME_LEN);
        assert!(validate_required_text(&exact, "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn test_multibyte_names_count_chars() {
        let name = "é".repeat(MAX_NAME_LEN);
        assert!(validate_required_text(&name, "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn test_validate_price() {
        assert_eq!(validate_price(Decimal::new(5550, 2)).unwrap(), 5550);
        assert_eq!(validate_price(Decimal::ZERO).unwrap(), 0);

        let err = validate_price(Decimal::new(-1, 0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPrice);
        let err = validate_price(Decimal::new(1001, 3)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPrice);
    }
}
