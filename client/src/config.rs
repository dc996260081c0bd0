use std::{env, fmt, time::Duration};

use serde::Deserialize;
use url::Url;

use crate::Error;

pub const TOKEN_ENV: &str = "PRINTFUL_TOKEN";
pub const BASE_URL_ENV: &str = "PRINTFUL_BASE_URL";
pub const HTTP_TIMEOUT_ENV: &str = "PRINTFUL_HTTP_TIMEOUT_SECS";

#[derive(Clone, Deserialize)]
pub struct Config {
    #[serde(default = "defaults::base_url")]
    pub base_url: Url,
    #[serde(default)]
    pub token: Option<String>,
    /// Upper bound for a single request. Unset means the transport default
    /// (no timeout).
    #[serde(default)]
    pub http_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            token: None,
            http_timeout: None,
        }
    }
}

// The token must never show up in logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url.as_str())
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

impl Config {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = Some(timeout);
        self
    }

    /// Read `PRINTFUL_TOKEN`, `PRINTFUL_BASE_URL` and
    /// `PRINTFUL_HTTP_TIMEOUT_SECS`; unset variables keep their defaults.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let mut config = Self::default();
        if let Some(url) = lookup(BASE_URL_ENV) {
            config.base_url =
                Url::parse(&url).map_err(|e| Error::Config(format!("{BASE_URL_ENV}: {e}")))?;
        }
        config.token = lookup(TOKEN_ENV).filter(|t| !t.is_empty());
        if let Some(secs) = lookup(HTTP_TIMEOUT_ENV) {
            let secs: u64 = secs
                .parse()
                .map_err(|e| Error::Config(format!("{HTTP_TIMEOUT_ENV}: {e}")))?;
            config.http_timeout = Some(Duration::from_secs(secs));
        }
        Ok(config)
    }
}

mod defaults {
    use url::Url;

    pub fn base_url() -> Url {
        Url::parse(printful_core::DEFAULT_BASE_URL).expect("default base url is valid")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_printful() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.base_url.as_str(), "https://api.printful.com/");
        assert!(config.token.is_none());
        assert!(config.http_timeout.is_none());
    }

    #[test]
    fn env_overrides() {
        let config = Config::from_lookup(lookup(&[
            (TOKEN_ENV, "abc"),
            (BASE_URL_ENV, "http://127.0.0.1:3000"),
            (HTTP_TIMEOUT_ENV, "15"),
        ]))
        .unwrap();
        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:3000/");
        assert_eq!(config.http_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn bad_timeout_is_rejected() {
        let err = Config::from_lookup(lookup(&[(HTTP_TIMEOUT_ENV, "soon")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn debug_redacts_token() {
        let config = Config::default().token("super-secret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: Config = serde_json::from_str(r#"{"token":"t"}"#).unwrap();
        assert_eq!(config.token.as_deref(), Some("t"));
        assert_eq!(config.base_url.as_str(), "https://api.printful.com/");
    }
}
