//! Validation helpers for customer and employee contact details.
//!
//! Request DTOs derive [`validator::Validate`] for the declarative checks
//! (email format, lengths); the rules that do not fit an attribute live here.

use validator::Validate;

use crate::error::CoreError;

/// Minimum number of digits in a phone number.
pub const MIN_PHONE_DIGITS: usize = 7;

/// Maximum number of digits in a phone number (E.164 allows 15).
pub const MAX_PHONE_DIGITS: usize = 15;

/// Minimum length of an employee password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Run the derived validator on `input`, flattening all field errors into a
/// single [`CoreError::Validation`] message.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input.validate().map_err(|errors| {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let reasons: Vec<String> = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                format!("{field}: {}", reasons.join(", "))
            })
            .collect();
        fields.sort();
        CoreError::Validation(fields.join("; "))
    })
}

/// Validate a phone number.
///
/// Accepts digits plus the usual separators (`+`, `-`, `.`, spaces and
/// parentheses). The digit count must fall within
/// [`MIN_PHONE_DIGITS`]..=[`MAX_PHONE_DIGITS`].
pub fn validate_phone(phone: &str) -> Result<(), CoreError> {
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | ' ' | '(' | ')');
    if !phone.chars().all(allowed) {
        return Err(CoreError::Validation(format!(
            "Invalid phone number '{phone}'. Only digits, spaces and + - . ( ) are allowed"
        )));
    }

    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) {
        return Err(CoreError::Validation(format!(
            "Invalid phone number '{phone}'. Expected {MIN_PHONE_DIGITS}-{MAX_PHONE_DIGITS} digits"
        )));
    }

    Ok(())
}

/// Reject blank required text fields.
pub fn require_non_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Validate that a password meets the minimum length.
pub fn validate_password_strength(password: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    Ok(())
}

/// Turn a free-text customer search into an `ILIKE` pattern.
///
/// The query is trimmed and must not be empty. `%`, `_` and `\` are escaped
/// so they match literally, then the whole term is wrapped in `%...%`.
pub fn search_pattern(query: &str) -> Result<String, CoreError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Search query cannot be empty".to_string(),
        ));
    }

    let mut pattern = String::with_capacity(trimmed.len() + 2);
    pattern.push('%');
    for c in trimmed.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    Ok(pattern)
}
