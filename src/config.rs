use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} is not valid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Runtime configuration, read from the environment (and `.env` when present).
///
/// | Env Var            | Default                 |
/// |--------------------|-------------------------|
/// | `BIND_ADDR`        | `127.0.0.1:3000`        |
/// | `API_BASE_URL`     | `http://localhost:8080` |
/// | `API_TIMEOUT_SECS` | `30`                    |
/// | `MAX_WORKERS`      | `8`                     |
/// | `SIGNIN_URL`       | `/auth/signin`          |
/// | `REGISTER_URL`     | `/auth/register`        |
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub api_base_url: Url,
    pub api_timeout: Duration,
    pub max_workers: usize,
    /// Where anonymous visitors are sent to sign in.
    pub signin_url: String,
    pub register_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind_addr = parse("BIND_ADDR", &value("BIND_ADDR", "127.0.0.1:3000"))?;

        let api_base_url = Url::parse(&value("API_BASE_URL", "http://localhost:8080"))
            .map_err(|e| ConfigError::Invalid {
                key: "API_BASE_URL",
                reason: e.to_string(),
            })?;

        let timeout_secs: u64 = parse("API_TIMEOUT_SECS", &value("API_TIMEOUT_SECS", "30"))?;

        let max_workers: usize = parse("MAX_WORKERS", &value("MAX_WORKERS", "8"))?;
        if max_workers == 0 {
            return Err(ConfigError::Invalid {
                key: "MAX_WORKERS",
                reason: "must be at least 1".into(),
            });
        }

        Ok(Self {
            bind_addr,
            api_base_url,
            api_timeout: Duration::from_secs(timeout_secs),
            max_workers,
            signin_url: value("SIGNIN_URL", "/auth/signin"),
            register_url: value("REGISTER_URL", "/auth/register"),
        })
    }
}

fn parse<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: format!("{raw:?}: {e}"),
    })
}
