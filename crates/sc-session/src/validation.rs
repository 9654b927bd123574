use crate::{SessionError, SessionResult};

/// Trims `value`, failing with a validation error when nothing is left.
#[track_caller]
pub(crate) fn require_trimmed<'a>(
    field: &'static str,
    value: &'a str,
    message: &str,
) -> SessionResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SessionError::validation(field, message));
    }
    Ok(trimmed)
}

/// `local@domain.tld` with no whitespace and a single `@`.
pub(crate) fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
