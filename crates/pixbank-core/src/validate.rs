//! Shared field validation helpers.

use crate::error::ValidationError;

pub(crate) fn require_non_empty(
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}

/// Shape check only: one `@`, a non-empty local part, and a domain
/// with an interior dot. Deliverability is someone else's problem.
pub(crate) fn email_shape_ok(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.split_once('.') {
        Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
        None => false,
    }
}

/// CPF as registered with the directory: exactly 11 digits, no
/// punctuation.
pub(crate) fn cpf_shape_ok(value: &str) -> bool {
    value.len() == 11 && value.bytes().all(|b| b.is_ascii_digit())
}
