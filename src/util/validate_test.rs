use super::*;

// =============================================================
// Email normalization
// =============================================================

#[test]
fn normalize_email_trims_and_lowercases() {
    assert_eq!(
        normalize_email("  Ana@Example.COM "),
        Some("ana@example.com".to_owned())
    );
}

#[test]
fn normalize_email_rejects_malformed_addresses() {
    assert_eq!(normalize_email(""), None);
    assert_eq!(normalize_email("no-at-sign"), None);
    assert_eq!(normalize_email("@host"), None);
    assert_eq!(normalize_email("user@"), None);
    assert_eq!(normalize_email("a@b@c"), None);
}

// =============================================================
// Password checks
// =============================================================

#[test]
fn password_issue_flags_mismatch_first() {
    assert_eq!(password_issue("abc", "abd"), Some("Passwords do not match"));
}

#[test]
fn password_issue_flags_short_passwords() {
    assert_eq!(
        password_issue("abc", "abc"),
        Some("Password must be at least 6 characters long")
    );
}

#[test]
fn password_issue_accepts_matching_long_enough() {
    assert_eq!(password_issue("secret", "secret"), None);
}
