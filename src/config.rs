use crate::error::{Error, Result};
use crate::navigatum::{NavigatumClient, DEFAULT_BASE_URL};
use config::{Config, Environment, Source};
use log::LevelFilter;
use reqwest::{Client, ClientBuilder};
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct HelperConfig {
    pub navigatum: NavigatumConfig,
    pub http: HttpConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize)]
pub struct NavigatumConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub connect_timeout_secs: u64,
    pub timeout_secs: u64,
    pub pool_idle_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

impl LogConfig {
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.level)
            .map_err(|_| Error::Configuration(format!("Unknown log level {:?}.", self.level)))
    }
}

impl HelperConfig {
    /// Reads `CAMPUS_HELPER_*` variables, e.g. `CAMPUS_HELPER_NAVIGATUM__BASE_URL`.
    pub fn new() -> Result<Self> {
        let environment = Environment::new().prefix("campus_helper").separator("__");
        HelperConfig::load(environment)
    }

    pub fn load<S>(source: S) -> Result<Self>
    where
        S: Source + Send + Sync + 'static,
    {
        let mut config = Config::new();
        config.set_default("navigatum.base_url", DEFAULT_BASE_URL)?;
        config.set_default("http.connect_timeout_secs", 5i64)?;
        config.set_default("http.timeout_secs", 10i64)?;
        config.set_default("http.pool_idle_timeout_secs", 60i64)?;
        config.set_default("log.level", "info")?;

        config.merge(source)?;
        let config = config.try_into()?;

        Ok(config)
    }

    pub fn navigatum_client(&self) -> Result<NavigatumClient> {
        NavigatumClient::new(&self.navigatum.base_url)
    }

    pub fn http_client(&self) -> Result<Client> {
        let client = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(self.http.connect_timeout_secs))
            .timeout(Duration::from_secs(self.http.timeout_secs))
            .pool_idle_timeout(Duration::from_secs(self.http.pool_idle_timeout_secs))
            .build()?;
        Ok(client)
    }
}
