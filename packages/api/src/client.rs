//! # HTTP client carrying the session token
//!
//! [`ApiClient`] is how every view talks to the backend. It never holds a
//! token of its own. Each request reads [`TOKEN_KEY`] from the same
//! [`KeyValueStore`] the session store writes to and, when a token is there,
//! attaches it as `Authorization: Bearer <token>`. Login and logout therefore
//! take effect on the very next request with no extra wiring.

use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use session::{ApiConfig, KeyValueStore, TOKEN_KEY};

use crate::error::ApiError;

#[derive(Clone, Debug)]
pub struct ApiClient<S> {
    http: reqwest::Client,
    base_url: String,
    storage: S,
}

impl<S: KeyValueStore> ApiClient<S> {
    pub fn new(config: &ApiConfig, storage: S) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            storage,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Start a request with JSON `Accept` and, if signed in, the bearer token.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, self.url(path))
            .header(ACCEPT, "application/json");
        match self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty()) {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::warn!("API request failed with {status}");
        Err(ApiError::from_status(status.as_u16(), &body))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.request(Method::GET, path)).await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn get_json_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self
            .send(self.request(Method::GET, path).query(query))
            .await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send(self.request(Method::POST, path).json(body)).await?;
        Ok(())
    }

    pub async fn put_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send(self.request(Method::PUT, path).json(body)).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;
    use session::MemoryStorage;

    fn client(storage: MemoryStorage) -> ApiClient<MemoryStorage> {
        let config = ApiConfig {
            base_url: "http://api.test/api/".to_string(),
        };
        ApiClient::new(&config, storage)
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = client(MemoryStorage::new());
        assert_eq!(client.base_url(), "http://api.test/api");
        assert_eq!(client.url("/booking"), "http://api.test/api/booking");
        assert_eq!(client.url("booking"), "http://api.test/api/booking");
    }

    #[test]
    fn test_no_token_no_authorization_header() {
        let client = client(MemoryStorage::new());
        let request = client.request(Method::GET, "booking").build().unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
        assert_eq!(request.headers()[ACCEPT], "application/json");
    }

    #[test]
    fn test_token_is_read_per_request() {
        let storage = MemoryStorage::new();
        let client = client(storage.clone());

        storage.set(TOKEN_KEY, "T");
        let request = client.request(Method::GET, "booking").build().unwrap();
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer T");

        // Logout removes the key; the next request goes out bare
        storage.remove(TOKEN_KEY);
        let request = client.request(Method::GET, "booking").build().unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }
}
