//! SessionResolver - turn a backend login response into a session

use serde::{Deserialize, Serialize};
use shared::{Logger, Session, DEFAULT_ROLE};
use std::sync::Arc;

/// Payload of a successful `/auth/login` call.
///
/// Field names match the backend wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub role: Option<String>,

    #[serde(default)]
    pub username: Option<String>,

    pub access_token: String,
}

/// Resolves a login response into an authenticated [`Session`].
///
/// A missing role never fails the login: the session falls back to the
/// default role and a diagnostic is emitted through the injected logger.
pub struct SessionResolver {
    logger: Arc<dyn Logger>,
    default_role: String,
}

impl SessionResolver {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            logger,
            default_role: DEFAULT_ROLE.to_string(),
        }
    }

    /// Builder: override the fallback role
    pub fn with_default_role(mut self, role: impl Into<String>) -> Self {
        self.default_role = role.into();
        self
    }

    /// Build the session for a login.
    ///
    /// `submitted_username` is the identifier the user typed into the login
    /// form; when the backend omits a username the local part of that email
    /// is used instead. The role is stored raw, exactly as issued.
    pub fn resolve(&self, submitted_username: &str, response: LoginResponse) -> Session {
        let username = response
            .username
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| local_part(submitted_username).to_string());

        let role = match response.role.filter(|r| !r.is_empty()) {
            Some(role) => role,
            None => {
                self.logger.error(
                    &format!(
                        "Role missing in login response, defaulting to '{}'",
                        self.default_role
                    ),
                    None,
                );
                self.default_role.clone()
            }
        };

        Session::logged_in(username, role, response.access_token)
    }
}

fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
