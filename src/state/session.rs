#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Where the session check currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Checking,
    Authenticated,
    Anonymous,
}

/// Session state shared through context: the gate status plus the signed-in
/// username for display. The token itself stays in localStorage.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub status: SessionStatus,
    pub username: Option<String>,
}

impl SessionState {
    pub fn authenticate(&mut self, username: impl Into<String>) {
        self.status = SessionStatus::Authenticated;
        self.username = Some(username.into());
    }

    pub fn clear(&mut self) {
        self.status = SessionStatus::Anonymous;
        self.username = None;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }
}
