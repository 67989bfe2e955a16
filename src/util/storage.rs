//! localStorage persistence for the session and the activity log.
//!
//! Requires a browser environment; native builds read nothing and write
//! nowhere so the state layer stays testable off-target.

use crate::state::activity::ActivityEntry;

#[cfg(feature = "hydrate")]
const SESSION_KEY: &str = "lexboard_session";
#[cfg(feature = "hydrate")]
const USER_KEY: &str = "lexboard_user";
#[cfg(feature = "hydrate")]
const ACTIVITY_KEY: &str = "lexboard_activity";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// The stored session token, if any.
pub fn session_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(SESSION_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// The username stored alongside the session token.
pub fn stored_username() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(USER_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a fresh login.
pub fn store_session(token: &str, username: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(SESSION_KEY, token);
            let _ = storage.set_item(USER_KEY, username);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, username);
    }
}

/// Drop the stored session, e.g. on logout or a failed verify.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(SESSION_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}

/// Reload the persisted activity log; malformed or missing data yields an
/// empty log rather than an error.
pub fn load_activity() -> Vec<ActivityEntry> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage().and_then(|s| s.get_item(ACTIVITY_KEY).ok().flatten());
        match raw {
            Some(json) => serde_json::from_str(&json).unwrap_or_default(),
            None => Vec::new(),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Persist the current activity log.
pub fn save_activity(entries: &[ActivityEntry]) {
    #[cfg(feature = "hydrate")]
    {
        if let Ok(json) = serde_json::to_string(entries) {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(ACTIVITY_KEY, &json);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = entries;
    }
}
