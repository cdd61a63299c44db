//! # Session store: the authentication state machine
//!
//! [`SessionStore`] is the single writer of [`SessionState`] and of the three
//! persisted session keys. Views get a clone of the store (through context in
//! the UI crate) and only read from it; the only mutations are the three
//! operations below.
//!
//! ```text
//! Initializing    --check_auth, valid session-->  Authenticated
//! Initializing    --check_auth, none/invalid-->   Unauthenticated
//! Unauthenticated --login ok-->                   Authenticated
//! Unauthenticated --login err-->                  Unauthenticated
//! Authenticated   --logout-->                     Unauthenticated
//! ```
//!
//! | Operation | Storage effect | Navigation |
//! |-----------|----------------|------------|
//! | [`check_auth`](SessionStore::check_auth) | clears all keys when they do not describe a complete session | none |
//! | [`login`](SessionStore::login) | writes all keys on success, clears all keys on failure | default protected route on success |
//! | [`logout`](SessionStore::logout) | clears all keys | login route, every call |
//!
//! ## Where the state lives
//!
//! The store writes its state into a [`StateCell`]. [`LocalCell`] is a plain
//! shared cell for native use and tests; the UI crate supplies a cell backed by
//! a reactive signal so every write re-renders the route guard.
//!
//! ## Caller obligations
//!
//! - `check_auth` runs once, when the application mounts, before any transition.
//! - At most one `login` is in flight; the login view disables its submit button.

use std::cell::RefCell;
use std::rc::Rc;

use crate::auth::{Authenticator, Credentials};
use crate::error::LoginError;
use crate::navigator::Navigator;
use crate::persistence::SessionPersistence;
use crate::state::{Session, SessionState, User};
use crate::storage::KeyValueStore;

/// Where the store keeps the current [`SessionState`].
pub trait StateCell {
    fn get(&self) -> SessionState;
    fn set(&self, state: SessionState);
}

/// Non-reactive shared cell.
#[derive(Clone, Debug, Default)]
pub struct LocalCell(Rc<RefCell<SessionState>>);

impl LocalCell {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateCell for LocalCell {
    fn get(&self) -> SessionState {
        self.0.borrow().clone()
    }

    fn set(&self, state: SessionState) {
        *self.0.borrow_mut() = state;
    }
}

/// Owner of the console's authentication state.
#[derive(Clone)]
pub struct SessionStore<S, N, C = LocalCell> {
    persistence: SessionPersistence<S>,
    navigator: N,
    state: C,
}

impl<S: KeyValueStore, N: Navigator> SessionStore<S, N, LocalCell> {
    pub fn new(storage: S, navigator: N) -> Self {
        Self::with_cell(storage, navigator, LocalCell::new())
    }
}

impl<S: KeyValueStore, N: Navigator, C: StateCell> SessionStore<S, N, C> {
    /// Build a store writing into `state`, which is reset to `Initializing`.
    pub fn with_cell(storage: S, navigator: N, state: C) -> Self {
        state.set(SessionState::Initializing);
        Self {
            persistence: SessionPersistence::new(storage),
            navigator,
            state,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    pub fn user(&self) -> Option<User> {
        self.state.get().user().cloned()
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn persistence(&self) -> &SessionPersistence<S> {
        &self.persistence
    }

    /// Resolve the session from persisted storage.
    ///
    /// Never fails: anything short of a complete, consistent session resolves
    /// to `Unauthenticated` and leaves all session keys removed.
    pub fn check_auth(&self) -> SessionState {
        let stored = self.persistence.load();

        let next = if !stored.flag {
            if !stored.is_empty() {
                tracing::debug!("Auth flag not set, clearing stale session keys");
            }
            self.persistence.clear();
            SessionState::Unauthenticated
        } else {
            let has_user = stored.user.is_some();
            let has_token = stored.token.is_some();
            match stored
                .user
                .zip(stored.token)
                .and_then(|(user, token)| Session::new(user, token))
            {
                Some(session) => SessionState::Authenticated(session),
                None => {
                    tracing::warn!(
                        "Stored session is unusable (user: {has_user}, token: {has_token}), clearing it"
                    );
                    self.persistence.clear();
                    SessionState::Unauthenticated
                }
            }
        };

        tracing::info!("Session resolved as {}", next.label());
        self.state.set(next.clone());
        next
    }

    /// Exchange credentials for a session.
    ///
    /// On success the session is persisted, the state becomes `Authenticated`
    /// and the navigator goes to the default protected route. On any failure
    /// the session keys are removed, the state is `Unauthenticated`, and the
    /// error is returned for the login view to show.
    pub async fn login<A: Authenticator>(
        &self,
        authenticator: &A,
        credentials: Credentials,
    ) -> Result<User, LoginError> {
        let result = match credentials.check_required() {
            Ok(()) => authenticator
                .authenticate(&credentials)
                .await
                .and_then(|response| {
                    Session::new(response.user, response.token).ok_or_else(|| {
                        LoginError::MalformedResponse("empty email or token".to_string())
                    })
                }),
            Err(e) => Err(e),
        };

        match result {
            Ok(session) => {
                self.persistence.save(&session);
                let user = session.user().clone();
                self.state.set(SessionState::Authenticated(session));
                tracing::info!("Logged in as {}", user.email);
                self.navigator.go_to_default_protected_route();
                Ok(user)
            }
            Err(e) => {
                tracing::warn!("Login for {} failed: {e}", credentials.email);
                self.persistence.clear();
                if self.state.get() != SessionState::Unauthenticated {
                    self.state.set(SessionState::Unauthenticated);
                }
                Err(e)
            }
        }
    }

    /// End the session. Unconditional and idempotent.
    pub fn logout(&self) {
        self.persistence.clear();
        if let Some(user) = self.state.get().user() {
            tracing::info!("Logged out {}", user.email);
        }
        self.state.set(SessionState::Unauthenticated);
        self.navigator.go_to_login(None);
    }
}
