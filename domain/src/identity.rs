use serde::{Deserialize, Serialize};

/// The persisted identity pair. Both ids are opaque server-issued
/// strings; `None` means the backend has never issued one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: Option<String>,
    pub session_id: Option<String>,
}

/// Identity pair returned by a session bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStart {
    pub user_id: String,
    pub session_id: String,
}

impl Identity {
    /// True once both ids are known, i.e. chat calls are allowed.
    pub fn is_established(&self) -> bool {
        self.user_id.is_some() && self.session_id.is_some()
    }

    /// Replace both ids with a freshly bootstrapped pair.
    pub fn establish(&mut self, start: SessionStart) {
        self.user_id = Some(start.user_id);
        self.session_id = Some(start.session_id);
    }

    /// Borrow the pair as `(user_id, session_id)` if established.
    pub fn pair(&self) -> Option<(&str, &str)> {
        match (self.user_id.as_deref(), self.session_id.as_deref()) {
            (Some(u), Some(s)) => Some((u, s)),
            _ => None,
        }
    }
}
