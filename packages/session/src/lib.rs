//! # Session crate: operator authentication for the inmate console
//!
//! Everything that decides whether the operator is signed in lives here, free
//! of any UI dependency so it can be tested natively.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`state`] | [`SessionState`], [`Session`], [`User`], [`Token`] |
//! | [`storage`] | [`KeyValueStore`] trait, [`MemoryStorage`], platform selection |
//! | [`persistence`] | [`SessionPersistence`]: the three persisted keys and their decoding |
//! | [`auth`] | [`Credentials`], [`LoginResponse`], the [`Authenticator`] seam |
//! | [`navigator`] | [`Navigator`] trait and the config-driven [`PathNavigator`] |
//! | [`guard`] | Route guard decision from the current state |
//! | [`store`] | [`SessionStore`]: `check_auth`, `login`, `logout` |
//! | [`config`] | [`ConsoleConfig`] (`console.toml`) |
//! | [`error`] | [`LoginError`] |

pub mod auth;
pub mod config;
pub mod error;
pub mod guard;
pub mod navigator;
pub mod persistence;
pub mod state;
pub mod storage;
pub mod store;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use auth::{Authenticator, Credentials, LoginResponse};
pub use config::{ApiConfig, ConsoleConfig, RoutesConfig, TablesConfig};
pub use error::LoginError;
pub use guard::GuardDecision;
pub use navigator::{Navigator, PathNavigator};
pub use persistence::{SessionPersistence, StoredSession, AUTH_FLAG_KEY, TOKEN_KEY, USER_KEY};
pub use state::{Session, SessionState, Token, User};
pub use storage::{platform_storage, KeyValueStore, MemoryStorage, PlatformStorage};
pub use store::{LocalCell, SessionStore, StateCell};
