use crate::{Error, Result};

use std::{env::VarError, time::Duration};

pub const DEFAULT_BASE_URL: &str = "https://kztimerglobal.com/api/v2/";
pub const DEFAULT_HEALTH_URL: &str =
    "https://health.global-api.com/api/v1/endpoints/_globalapi/statuses?page=1";
pub const DEFAULT_KZGO_URL: &str = "https://kzgo.eu/api/";
pub const DEFAULT_STATUS_URL: &str = "https://status.global-api.com/api/v2/summary.json";
pub const DEFAULT_MAPCYCLE_URL: &str = "https://maps.cawkz.net/mapcycles/gokz.txt";

/// Where the client sends its requests and how long it is willing to wait for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base of every GlobalAPI route, with a trailing slash.
    pub base_url: String,
    pub health_url: String,
    /// Base of the KZ:GO mirror, with a trailing slash.
    pub kzgo_url: String,
    /// Summary document of the public status page.
    pub status_url: String,
    /// Plain text map cycle, one map name per line.
    pub mapcycle_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            health_url: DEFAULT_HEALTH_URL.to_owned(),
            kzgo_url: DEFAULT_KZGO_URL.to_owned(),
            status_url: DEFAULT_STATUS_URL.to_owned(),
            mapcycle_url: DEFAULT_MAPCYCLE_URL.to_owned(),
            timeout: Duration::from_secs(10),
            user_agent: concat!("gokz_api/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

/// Reads an optional environment variable, failing only if it is set to something unparseable.
fn env_var<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    let invalid = |reason: &dyn std::fmt::Display| {
        Error::invalid_input("Config::from_env", format!("Invalid {}: {}", name, reason))
    };
    match std::env::var(name) {
        Ok(value) => value.parse().map(Some).map_err(|e| invalid(&e)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e @ VarError::NotUnicode(_)) => Err(invalid(&e)),
    }
}

impl Config {
    /// Starts from [`Config::default`] and applies `GLOBAL_API_URL`, `GLOBAL_API_HEALTH_URL`,
    /// `KZGO_API_URL`, `GLOBAL_API_STATUS_URL`, `MAPCYCLE_URL`, `GLOBAL_API_TIMEOUT` (e.g. `10s`)
    /// and `GLOBAL_API_USER_AGENT`.
    /// A `.env` file in the working directory is loaded first if there is one.
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenv::dotenv() {
            log::debug!("not loading .env: {}", e);
        }

        let mut config = Self::default();
        if let Some(url) = env_var::<String>("GLOBAL_API_URL")? {
            config.base_url = with_trailing_slash(url);
        }
        if let Some(url) = env_var("GLOBAL_API_HEALTH_URL")? {
            config.health_url = url;
        }
        if let Some(url) = env_var::<String>("KZGO_API_URL")? {
            config.kzgo_url = with_trailing_slash(url);
        }
        if let Some(url) = env_var("GLOBAL_API_STATUS_URL")? {
            config.status_url = url;
        }
        if let Some(url) = env_var("MAPCYCLE_URL")? {
            config.mapcycle_url = url;
        }
        if let Some(timeout) = env_var::<humantime::Duration>("GLOBAL_API_TIMEOUT")? {
            config.timeout = timeout.into();
        }
        if let Some(user_agent) = env_var("GLOBAL_API_USER_AGENT")? {
            config.user_agent = user_agent;
        }

        Ok(config)
    }
}

fn with_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}
