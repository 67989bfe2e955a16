use super::*;

// =============================================================
// URL construction
// =============================================================

#[test]
fn api_base_defaults_to_localhost() {
    assert_eq!(api_base(), "http://localhost:8000");
}

#[test]
fn taxonomy_image_url_joins_base_and_id() {
    assert_eq!(
        taxonomy_image_url("abc123"),
        "http://localhost:8000/taxonomy/image/abc123"
    );
}

// =============================================================
// Error display
// =============================================================

#[test]
fn server_errors_display_the_detail_verbatim() {
    let err = ApiError::Server("Invalid username or password".into());
    assert_eq!(err.to_string(), "Invalid username or password");
}

#[test]
fn network_errors_keep_their_prefix() {
    let err = ApiError::Network("connection refused".into());
    assert_eq!(err.to_string(), "network error: connection refused");
}

#[test]
fn unsupported_reads_as_a_browser_only_hint() {
    assert_eq!(
        ApiError::Unsupported.to_string(),
        "not available outside the browser"
    );
}
