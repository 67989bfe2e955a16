use super::*;

// =============================================================
// SessionState lifecycle
// =============================================================

#[test]
fn default_state_is_checking() {
    let state = SessionState::default();
    assert_eq!(state.status, SessionStatus::Checking);
    assert!(state.username.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn authenticate_stores_username() {
    let mut state = SessionState::default();
    state.authenticate("ana");
    assert!(state.is_authenticated());
    assert_eq!(state.username.as_deref(), Some("ana"));
}

#[test]
fn clear_resets_to_anonymous() {
    let mut state = SessionState::default();
    state.authenticate("ana");
    state.clear();
    assert_eq!(state.status, SessionStatus::Anonymous);
    assert!(state.username.is_none());
}
