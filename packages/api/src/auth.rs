//! HTTP authentication endpoint: `POST /account/login`.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use session::{ApiConfig, Authenticator, Credentials, LoginError, LoginResponse};

use crate::error::error_message_from_body;

pub const LOGIN_PATH: &str = "account/login";

/// [`Authenticator`] backed by the console's REST backend.
#[derive(Clone, Debug)]
pub struct HttpAuthenticator {
    http: reqwest::Client,
    url: String,
}

impl HttpAuthenticator {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: format!("{}/{LOGIN_PATH}", config.base_url.trim_end_matches('/')),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Decode the body of a login response with the given status.
pub fn decode_login_response(status: u16, body: &str) -> Result<LoginResponse, LoginError> {
    if !(200..300).contains(&status) {
        return Err(LoginError::Rejected {
            status,
            message: error_message_from_body(body),
        });
    }
    serde_json::from_str::<LoginResponse>(body)
        .map_err(|e| LoginError::MalformedResponse(e.to_string()))
}

impl Authenticator for HttpAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<LoginResponse, LoginError> {
        let response = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(credentials)
            .send()
            .await
            .map_err(|e| LoginError::Unreachable(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| LoginError::Unreachable(e.to_string()))?;
        decode_login_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server;
    use session::User;

    #[test]
    fn test_url() {
        let config = ApiConfig {
            base_url: "http://api.test/api/".to_string(),
        };
        assert_eq!(
            HttpAuthenticator::new(&config).url(),
            "http://api.test/api/account/login"
        );
    }

    #[test]
    fn test_decode_success() {
        let response =
            decode_login_response(200, r#"{"user":{"email":"a@b.com"},"token":"T"}"#).unwrap();
        assert_eq!(response.user, User::new("a@b.com"));
        assert_eq!(response.token.expose(), "T");
    }

    #[test]
    fn test_decode_rejection_keeps_server_message() {
        let err = decode_login_response(401, r#"{"message":"Invalid credentials"}"#).unwrap_err();
        assert_eq!(
            err,
            LoginError::Rejected {
                status: 401,
                message: Some("Invalid credentials".to_string()),
            }
        );
        assert_eq!(err.user_message(), "Invalid credentials");
    }

    #[test]
    fn test_decode_rejection_without_body() {
        let err = decode_login_response(500, "").unwrap_err();
        assert_eq!(err, LoginError::Rejected { status: 500, message: None });
    }

    #[test]
    fn test_decode_success_without_token() {
        let err = decode_login_response(200, r#"{"user":{"email":"a@b.com"}}"#).unwrap_err();
        assert!(matches!(err, LoginError::MalformedResponse(_)));
    }

    fn authenticator(base_url: String) -> HttpAuthenticator {
        HttpAuthenticator::new(&ApiConfig { base_url })
    }

    #[tokio::test]
    async fn test_authenticate_against_backend() {
        let (base_url, server) =
            test_server::serve_once("200 OK", r#"{"user":{"email":"a@b.com"},"token":"T"}"#).await;

        let credentials = Credentials::new("a@b.com", "secret123");
        let response = authenticator(base_url).authenticate(&credentials).await.unwrap();
        assert_eq!(response.user, User::new("a@b.com"));
        assert_eq!(response.token.expose(), "T");

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/account/login "));
        assert!(request.contains(r#""email":"a@b.com""#));
        assert!(request.contains(r#""password":"secret123""#));
    }

    #[tokio::test]
    async fn test_authenticate_rejected_by_backend() {
        let (base_url, server) =
            test_server::serve_once("401 Unauthorized", r#"{"message":"Invalid credentials"}"#).await;

        let credentials = Credentials::new("a@b.com", "wrong");
        let err = authenticator(base_url).authenticate(&credentials).await.unwrap_err();
        assert_eq!(
            err,
            LoginError::Rejected {
                status: 401,
                message: Some("Invalid credentials".to_string()),
            }
        );
        server.await.unwrap();
    }
}
