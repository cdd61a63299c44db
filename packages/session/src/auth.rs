//! Credentials and the authentication endpoint seam.
//!
//! The console does not check passwords itself. It hands [`Credentials`] to an
//! [`Authenticator`] and gets back either a [`LoginResponse`] or a
//! [`LoginError`]. The HTTP implementation lives in the `api` crate; tests use
//! scripted ones.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LoginError;
use crate::state::{Token, User};

/// Email + password as submitted by the login view.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields are required. Format rules belong to the login form.
    pub fn check_required(&self) -> Result<(), LoginError> {
        if self.email.trim().is_empty() {
            return Err(LoginError::MissingField("email"));
        }
        if self.password.is_empty() {
            return Err(LoginError::MissingField("password"));
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Success body of the authentication endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: Token,
}

/// Exchanges credentials for a user and token.
///
/// Browser futures are not `Send`, so neither is this one.
pub trait Authenticator {
    fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> impl std::future::Future<Output = Result<LoginResponse, LoginError>>;
}

impl<A: Authenticator + ?Sized> Authenticator for &A {
    fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> impl std::future::Future<Output = Result<LoginResponse, LoginError>> {
        (**self).authenticate(credentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_required() {
        assert!(Credentials::new("a@b.com", "secret123").check_required().is_ok());
        assert_eq!(
            Credentials::new(" ", "secret123").check_required(),
            Err(LoginError::MissingField("email"))
        );
        assert_eq!(
            Credentials::new("a@b.com", "").check_required(),
            Err(LoginError::MissingField("password"))
        );
    }

    #[test]
    fn test_debug_hides_password() {
        let debug = format!("{:?}", Credentials::new("a@b.com", "secret123"));
        assert!(debug.contains("a@b.com"));
        assert!(!debug.contains("secret123"));
    }

    #[test]
    fn test_login_response_json() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"user":{"email":"a@b.com"},"token":"T"}"#).unwrap();
        assert_eq!(response.user, User::new("a@b.com"));
        assert_eq!(response.token.expose(), "T");
    }
}
