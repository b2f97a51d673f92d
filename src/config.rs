//! Widget configuration.
//!
//! A [`Config`] is built once in `main` from the two positional credential
//! arguments (falling back to build-time defaults) plus a few environment
//! overrides, then passed by reference to everything that needs it.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::RequestError;

pub const DEFAULT_API_BASE: &str = "https://a.wunderlist.com";

const BUILD_ACCESS_TOKEN: Option<&str> = option_env!("WUNDERLIST_ACCESS_TOKEN");
const BUILD_CLIENT_ID: Option<&str> = option_env!("WUNDERLIST_CLIENT_ID");

/// Language of the rendered widget text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Zh,
    En,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh" | "cn" | "zh-cn" => Ok(Self::Zh),
            "en" | "en-us" | "en-gb" => Ok(Self::En),
            other => Err(format!("unknown locale: {other}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub access_token: String,
    pub client_id: String,
    /// Scheme and host of the API, without trailing slash.
    pub api_base: String,
    /// Directory holding the cached rendering.
    pub cache_dir: PathBuf,
    pub locale: Locale,
    /// Optional per-request timeout. `None` leaves it to the transport.
    pub timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            access_token: BUILD_ACCESS_TOKEN.unwrap_or_default().to_owned(),
            client_id: BUILD_CLIENT_ID.unwrap_or_default().to_owned(),
            api_base: DEFAULT_API_BASE.to_owned(),
            cache_dir: env::temp_dir(),
            locale: Locale::default(),
            timeout_seconds: None,
        }
    }
}

impl Config {
    /// Builds the configuration from the positional credentials and the
    /// `WUNDERLIST_*` environment overrides.
    pub fn from_args(access_token: Option<String>, client_id: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(token) = access_token {
            config.access_token = token;
        }
        if let Some(id) = client_id {
            config.client_id = id;
        }
        config.apply_env();
        config
    }

    fn apply_env(&mut self) {
        if let Ok(base) = env::var("WUNDERLIST_API_BASE") {
            self.api_base = base.trim_end_matches('/').to_owned();
        }
        if let Ok(dir) = env::var("WUNDERLIST_CACHE_DIR") {
            self.cache_dir = PathBuf::from(dir);
        }
        if let Ok(locale) = env::var("WUNDERLIST_LOCALE") {
            match locale.parse() {
                Ok(locale) => self.locale = locale,
                Err(err) => tracing::warn!(%err, "ignoring WUNDERLIST_LOCALE"),
            }
        }
        if let Ok(secs) = env::var("WUNDERLIST_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(0) => self.timeout_seconds = None,
                Ok(secs) => self.timeout_seconds = Some(secs),
                Err(err) => tracing::warn!(%err, "ignoring WUNDERLIST_TIMEOUT_SECS"),
            }
        }
    }

    /// Checks that `api_base` is an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), RequestError> {
        let url = reqwest::Url::parse(&self.api_base)
            .map_err(|e| RequestError::Other(format!("api_base is not a URL: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(RequestError::Other(format!(
                "api_base must be http or https, got {}",
                url.scheme()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_wunderlist() {
        let config = Config::default();
        assert_eq!(config.api_base, "https://a.wunderlist.com");
        assert_eq!(config.locale, Locale::Zh);
        assert!(config.timeout_seconds.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn positional_credentials_override_defaults() {
        let config = Config::from_args(Some("token".into()), Some("client".into()));
        assert_eq!(config.access_token, "token");
        assert_eq!(config.client_id, "client");
    }

    #[test]
    fn locale_parses_common_spellings() {
        assert_eq!("zh".parse::<Locale>(), Ok(Locale::Zh));
        assert_eq!("CN".parse::<Locale>(), Ok(Locale::Zh));
        assert_eq!(" en ".parse::<Locale>(), Ok(Locale::En));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn non_http_api_base_rejected() {
        let config = Config {
            api_base: "ftp://a.wunderlist.com".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("http"));
    }

    #[test]
    fn relative_api_base_rejected() {
        let config = Config {
            api_base: "a.wunderlist.com".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
