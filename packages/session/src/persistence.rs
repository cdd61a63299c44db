//! # Persistence adapter: the three session keys
//!
//! [`SessionPersistence`] wraps a [`KeyValueStore`] and knows the fixed keys a
//! session occupies:
//!
//! | Key | Contents |
//! |-----|----------|
//! | [`AUTH_FLAG_KEY`] (`"isAuthenticated"`) | `"true"` while signed in |
//! | [`USER_KEY`] (`"user"`) | JSON `{email, name?}` |
//! | [`TOKEN_KEY`] (`"jwt"`) | opaque bearer token, also read by the HTTP client |
//!
//! Decoding never fails loudly. A malformed user record comes back as `None`
//! and the session store decides what to do with the inconsistency.

use crate::state::{Session, Token, User};
use crate::storage::KeyValueStore;

pub const AUTH_FLAG_KEY: &str = "isAuthenticated";
pub const USER_KEY: &str = "user";
pub const TOKEN_KEY: &str = "jwt";

/// Raw view of the persisted keys, after decoding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoredSession {
    pub flag: bool,
    pub user: Option<User>,
    pub token: Option<Token>,
}

impl StoredSession {
    /// True when nothing at all is stored.
    pub fn is_empty(&self) -> bool {
        !self.flag && self.user.is_none() && self.token.is_none()
    }
}

/// Session-shaped access to a key-value store.
#[derive(Clone, Debug)]
pub struct SessionPersistence<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionPersistence<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read and decode all three keys.
    pub fn load(&self) -> StoredSession {
        StoredSession {
            flag: self.auth_flag(),
            user: self.user(),
            token: self.token(),
        }
    }

    /// The auth flag. Anything other than `"true"` reads as false.
    pub fn auth_flag(&self) -> bool {
        self.storage.get(AUTH_FLAG_KEY).as_deref() == Some("true")
    }

    /// The stored user record, or `None` if missing or unparsable.
    pub fn user(&self) -> Option<User> {
        let raw = self.storage.get(USER_KEY)?;
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Ignoring malformed {USER_KEY} record: {e}");
                None
            }
        }
    }

    /// The stored token, or `None` if missing or empty.
    pub fn token(&self) -> Option<Token> {
        self.storage
            .get(TOKEN_KEY)
            .filter(|raw| !raw.is_empty())
            .map(Token::new)
    }

    /// Write a session under all three keys.
    ///
    /// The token goes first and the flag last, so an interrupted write never
    /// leaves a `"true"` flag without the rest.
    pub fn save(&self, session: &Session) {
        let user = match serde_json::to_string(session.user()) {
            Ok(user) => user,
            Err(e) => {
                tracing::error!("Failed to serialize user record: {e}");
                self.clear();
                return;
            }
        };
        self.storage.set(TOKEN_KEY, session.token().expose());
        self.storage.set(USER_KEY, &user);
        self.storage.set(AUTH_FLAG_KEY, "true");
    }

    /// Remove all three keys. Idempotent.
    pub fn clear(&self) {
        self.storage.remove(AUTH_FLAG_KEY);
        self.storage.remove(USER_KEY);
        self.storage.remove(TOKEN_KEY);
    }
}
