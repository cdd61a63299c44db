//! # API crate: the console's REST collaborators
//!
//! Everything here talks HTTP through `reqwest`, which compiles to `fetch` on
//! the web target and to a native client elsewhere.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base URL joining, bearer token from the session's storage, JSON helpers |
//! | [`auth`] | [`HttpAuthenticator`]: `POST /account/login`, implements [`session::Authenticator`] |
//! | [`resources`] | Inmate, booking (including release) and charge endpoints |
//! | [`models`] | Wire types: [`Inmate`], [`BookingListItem`], [`NewBooking`], [`Charge`], [`Page`], [`ListQuery`] |
//! | [`error`] | [`ApiError`] and operator-facing messages |

pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod resources;

#[cfg(test)]
mod test_server;

pub use auth::HttpAuthenticator;
pub use client::ApiClient;
pub use error::ApiError;
pub use models::{BookingListItem, Charge, Gender, Inmate, ListQuery, NewBooking, Page, ReleaseRequest};
