//! # Console configuration: `console.toml`
//!
//! Defines the TOML configuration the web entry point embeds at build time
//! (filename: [`ConsoleConfig::filename`] = `"console.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [routes]
//! login = "/auth/login"            # public login route
//! default_protected = "/inmates"   # where a successful login lands
//!
//! [api]
//! base_url = "http://localhost:5000/api"
//!
//! [tables]
//! default_page_size = 10
//! search_debounce_ms = 500
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ConsoleConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`RoutesConfig`] | Login route and default protected landing route used by the navigator. |
//! | [`ApiConfig`] | Base URL of the REST backend (authentication endpoint included). |
//! | [`TablesConfig`] | Paging and search defaults for the list views. |
//!
//! All structs derive or implement `Default`, so a missing or empty file is
//! equivalent to the default configuration.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `console.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub routes: RoutesConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub tables: TablesConfig,
}

/// Route paths the session layer redirects to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutesConfig {
    #[serde(default = "default_login_route")]
    pub login: String,
    #[serde(default = "default_protected_route")]
    pub default_protected: String,
}

fn default_login_route() -> String {
    "/auth/login".to_string()
}

fn default_protected_route() -> String {
    "/inmates".to_string()
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            login: default_login_route(),
            default_protected: default_protected_route(),
        }
    }
}

/// Characters escaped in the `from` query value. `/` stays readable.
const RETURN_TO: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?');

impl RoutesConfig {
    /// Login location carrying the page the operator was trying to reach.
    ///
    /// The path is percent-encoded, so a return target with its own query or
    /// fragment survives the trip through `?from=`.
    pub fn login_location(&self, return_to: Option<&str>) -> String {
        match return_to.filter(|path| !path.is_empty() && *path != self.login) {
            Some(path) => format!("{}?from={}", self.login, utf8_percent_encode(path, RETURN_TO)),
            None => self.login.clone(),
        }
    }

    /// Undo the encoding applied by [`login_location`](Self::login_location).
    pub fn return_target(from: &str) -> String {
        percent_decode_str(from).decode_utf8_lossy().into_owned()
    }
}

/// REST backend settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// List view defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablesConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    #[serde(default = "default_search_debounce")]
    pub search_debounce_ms: u32,
}

fn default_page_size() -> u32 {
    10
}

fn default_search_debounce() -> u32 {
    500
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            search_debounce_ms: default_search_debounce(),
        }
    }
}

impl ConsoleConfig {
    /// Builder method to point at another backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "console.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse from TOML, falling back to defaults on error.
    pub fn from_toml_or_default(s: &str) -> Self {
        match Self::from_toml(s) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Invalid {}: {e}; using defaults", Self::filename());
                Self::default()
            }
        }
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ConsoleConfig::from_toml("").unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.routes.login, "/auth/login");
        assert_eq!(config.routes.default_protected, "/inmates");
        assert_eq!(config.tables.default_page_size, 10);
    }

    #[test]
    fn test_partial_sections() {
        let config = ConsoleConfig::from_toml(
            r#"
            [routes]
            default_protected = "/booking"

            [api]
            base_url = "https://jail.example/api"
            "#,
        )
        .unwrap();
        assert_eq!(config.routes.login, "/auth/login");
        assert_eq!(config.routes.default_protected, "/booking");
        assert_eq!(config.api.base_url, "https://jail.example/api");
        assert_eq!(config.tables.search_debounce_ms, 500);
    }

    #[test]
    fn test_invalid_toml_falls_back() {
        let config = ConsoleConfig::from_toml_or_default("[routes\nlogin = ");
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ConsoleConfig::default().with_base_url("http://api.test");
        let text = config.to_toml().unwrap();
        assert_eq!(ConsoleConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_login_location() {
        let routes = RoutesConfig::default();
        assert_eq!(routes.login_location(None), "/auth/login");
        assert_eq!(routes.login_location(Some("")), "/auth/login");
        assert_eq!(routes.login_location(Some("/auth/login")), "/auth/login");
        assert_eq!(
            routes.login_location(Some("/booking")),
            "/auth/login?from=/booking"
        );
    }

    #[test]
    fn test_login_location_encodes_query_in_return_target() {
        let routes = RoutesConfig::default();
        let location = routes.login_location(Some("/inmates?search=doe&page=2#top"));
        assert_eq!(location, "/auth/login?from=/inmates%3Fsearch%3Ddoe%26page%3D2%23top");

        let (_, from) = location.split_once("?from=").unwrap();
        assert!(!from.contains('&'));
        assert_eq!(
            RoutesConfig::return_target(from),
            "/inmates?search=doe&page=2#top"
        );
        assert_eq!(RoutesConfig::return_target("/booking"), "/booking");
    }
}
