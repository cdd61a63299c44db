//! # Session state: the single authentication entity of the console
//!
//! [`SessionState`] replaces the "loading flag + is-authenticated flag + nullable
//! user" triple with one exhaustive enum:
//!
//! | Variant | Meaning |
//! |---------|---------|
//! | [`SessionState::Initializing`] | Application just started; persisted storage not read yet. |
//! | [`SessionState::Unauthenticated`] | No usable session on this device. |
//! | [`SessionState::Authenticated`] | A [`Session`] (user + token) is active. |
//!
//! A user and a token only ever exist together inside [`Session`], and
//! [`Session::new`] refuses an empty email or an empty token, so a half-built
//! session cannot be represented.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The operator identity returned by the authentication endpoint and stored
/// under the user-record key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }
}

/// Opaque bearer credential.
///
/// Only the HTTP client needs the raw value; everything else treats it as a
/// black box. `Debug` never prints it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw credential, for the `Authorization` header and the token key.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

/// An authenticated session: the user and the credential issued for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: User,
    token: Token,
}

impl Session {
    /// Build a session, or `None` if either half is unusable.
    pub fn new(user: User, token: Token) -> Option<Self> {
        if user.email.trim().is_empty() || token.is_empty() {
            return None;
        }
        Some(Self { user, token })
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn token(&self) -> &Token {
        &self.token
    }
}

/// Authentication status of the running console.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Initializing,
    Unauthenticated,
    Authenticated(Session),
}

impl SessionState {
    pub fn is_initializing(&self) -> bool {
        matches!(self, SessionState::Initializing)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    /// The signed-in user, present only when authenticated.
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(session) => Some(session.user()),
            _ => None,
        }
    }

    /// Short label used in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            SessionState::Initializing => "initializing",
            SessionState::Unauthenticated => "unauthenticated",
            SessionState::Authenticated(_) => "authenticated",
        }
    }
}
