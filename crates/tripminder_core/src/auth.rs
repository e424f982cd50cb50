//! Demo authentication session.
//!
//! # Responsibility
//! - Track the logged-in demo user for the UI's mutation gate.
//! - Check the hardcoded demo credentials.
//!
//! # Invariants
//! - The store performs no authorization checks itself; gating mutating
//!   actions behind `is_authenticated` is the caller's concern.
//! - This is a demo gate, not real authentication: credentials are baked in
//!   and nothing is persisted.

use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEMO_USERNAME: &str = "admin";
const DEMO_PASSWORD: &str = "password";

/// Login failure for the demo gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    InvalidCredentials,
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "invalid username or password"),
        }
    }
}

impl Error for AuthError {}

/// In-memory session state for the demo login gate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthSession {
    user: Option<String>,
}

impl AuthSession {
    /// Creates a logged-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts a demo login.
    ///
    /// # Errors
    /// - `InvalidCredentials` when the pair does not match the demo
    ///   credentials.
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        if username != DEMO_USERNAME || password != DEMO_PASSWORD {
            info!("event=auth_login module=auth status=rejected");
            return Err(AuthError::InvalidCredentials);
        }
        self.user = Some(username.to_string());
        info!("event=auth_login module=auth status=ok user={username}");
        Ok(())
    }

    /// Clears the session. Logging out twice is harmless.
    pub fn logout(&mut self) {
        if self.user.take().is_some() {
            info!("event=auth_logout module=auth status=ok");
        }
    }

    /// Whether a user is currently logged in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Name of the logged-in user, if any.
    pub fn current_user(&self) -> Option<&str> {
        self.user.as_deref()
    }
}
