//! Session state shared by guards, navigation and the CLI

use crate::role::normalize_role;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Persisted entry keys of the session store
pub mod keys {
    pub const IS_AUTHENTICATED: &str = "isAuthenticated";
    pub const USERNAME: &str = "username";
    pub const USER_ROLE: &str = "userRole";
    pub const TOKEN: &str = "token";

    /// All four keys, in write order
    pub const ALL: [&str; 4] = [IS_AUTHENTICATED, USERNAME, USER_ROLE, TOKEN];
}

/// Marker value of the authenticated flag in the persisted entry map
pub const AUTHENTICATED_FLAG: &str = "true";

/// Authentication state of the dashboard client.
///
/// All fields of a login are set together; logout clears everything. The
/// role is kept raw as issued by the backend - display and matching always
/// go through [`Session::normalized_role`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum Session {
    LoggedOut,
    #[serde(rename_all = "camelCase")]
    LoggedIn {
        username: String,
        role: String,
        token: String,
    },
}

impl Session {
    /// Create an authenticated session
    pub fn logged_in(
        username: impl Into<String>,
        role: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self::LoggedIn {
            username: username.into(),
            role: role.into(),
            token: token.into(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::LoggedIn { .. })
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Self::LoggedIn { username, .. } => Some(username),
            Self::LoggedOut => None,
        }
    }

    /// The raw role string as issued by the backend
    pub fn raw_role(&self) -> Option<&str> {
        match self {
            Self::LoggedIn { role, .. } => Some(role),
            Self::LoggedOut => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::LoggedIn { token, .. } => Some(token),
            Self::LoggedOut => None,
        }
    }

    /// Canonical display role, derived on every call and never stored
    pub fn normalized_role(&self) -> String {
        normalize_role(self.raw_role())
    }

    /// Render the session as the persisted entry map.
    ///
    /// A logged-out session produces no entries at all - the four keys are
    /// written together or not at all.
    pub fn to_entries(&self) -> HashMap<String, String> {
        let mut entries = HashMap::new();
        if let Self::LoggedIn {
            username,
            role,
            token,
        } = self
        {
            entries.insert(keys::IS_AUTHENTICATED.to_string(), AUTHENTICATED_FLAG.to_string());
            entries.insert(keys::USERNAME.to_string(), username.clone());
            entries.insert(keys::USER_ROLE.to_string(), role.clone());
            entries.insert(keys::TOKEN.to_string(), token.clone());
        }
        entries
    }

    /// Rebuild a session from a persisted entry map.
    ///
    /// The authenticated flag must be exactly `"true"`; any other value (or
    /// its absence) yields `LoggedOut`. Missing companion keys degrade to
    /// empty strings so a blank role still normalizes to the default.
    pub fn from_entries(entries: &HashMap<String, String>) -> Self {
        if entries.get(keys::IS_AUTHENTICATED).map(String::as_str) != Some(AUTHENTICATED_FLAG) {
            return Self::LoggedOut;
        }

        let field = |key: &str| entries.get(key).cloned().unwrap_or_default();
        Self::LoggedIn {
            username: field(keys::USERNAME),
            role: field(keys::USER_ROLE),
            token: field(keys::TOKEN),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::LoggedOut
    }
}
