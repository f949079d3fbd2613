use config::{Config, ConfigError, Environment, File};
use dotenv::dotenv;
use serde::Deserialize;
use std::{env, fmt, str::FromStr, time::Duration};
use url::Url;

use crate::constants::DEFAULT_API_BASE_URL;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct ClientConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_api_base_url")]
    pub api_base_url: Url,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_api_base_url() -> Url {
    // The constant is a compile-time known valid URL.
    Url::parse(DEFAULT_API_BASE_URL).expect("default API base URL must parse")
}
fn default_request_timeout() -> u64 {
    30
}
fn default_user_agent() -> String {
    format!("lessin-client/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("LESSIN_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid LESSIN_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name.to_string().to_lowercase())).required(false))
            .add_source(Environment::with_prefix("LESSIN").ignore_empty(true));

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.request_timeout_secs == 0 {
            errors.push("REQUEST_TIMEOUT_SECS must be greater than zero");
        }
        if self.api_base_url.cannot_be_a_base() {
            errors.push("API_BASE_URL must be an absolute http(s) URL");
        }
        if self.is_production() && self.api_base_url.scheme() != "https" {
            errors.push("API_BASE_URL must use https in production");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            env: default_env(),
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}
