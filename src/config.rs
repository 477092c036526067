use crate::error::BrokerError;
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Environment prefix for every setting, e.g. `DWAAS_DATABASE_URL`.
pub const ENV_PREFIX: &str = "DWAAS_";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Admin connection used to create and drop roles; also the base of bound URIs.
    pub database_url: String,
    pub loglevel: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    /// Apply alphanumeric validation to caller-supplied credentials as well.
    pub validate_adopted: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "postgres://gpadmin@localhost:5432/gpadmin".to_string(),
            loglevel: "info".to_string(),
            max_connections: 5,
            acquire_timeout_secs: 30,
            validate_adopted: false,
        }
    }
}

impl Config {
    /// Defaults overlaid with `DWAAS_*` environment variables.
    pub fn load() -> Result<Self, BrokerError> {
        Self::figment().extract().map_err(BrokerError::from)
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn base_url(&self) -> Result<Url, BrokerError> {
        Ok(Url::parse(&self.database_url)?)
    }

    /// The admin URL with its password stripped, for logging.
    pub fn redacted_database_url(&self) -> String {
        match Url::parse(&self.database_url) {
            Ok(mut url) => {
                if url.password().is_some() {
                    let _ = url.set_password(Some("***"));
                }
                url.to_string()
            }
            Err(_) => "<unparseable>".to_string(),
        }
    }
}
