//! Form validation helpers shared by the auth pages.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Trim and lowercase an email address, rejecting anything without exactly
/// one `@` separating two non-empty parts.
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

/// First failed check for a new password pair, if any.
#[must_use]
pub fn password_issue(password: &str, confirm: &str) -> Option<&'static str> {
    if password != confirm {
        return Some("Passwords do not match");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Some("Password must be at least 6 characters long");
    }
    None
}
