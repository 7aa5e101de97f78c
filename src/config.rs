use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;

use crate::money::CurrencyFormat;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub currency: CurrencyFormat,
    /// Screen the client is sent to after an order goes through.
    pub home_screen: String,
    pub listen_addr: SocketAddr,
    pub session_idle_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api = ApiConfig {
            base_url: lookup("API_BASE_URL")
                .unwrap_or_else(|| "http://localhost:3333".into())
                .trim_end_matches('/')
                .to_string(),
            timeout_secs: lookup("API_TIMEOUT_SECS")
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(10),
        };
        let currency = match lookup("CURRENCY").as_deref() {
            None | Some("BRL") => CurrencyFormat::brl(),
            Some("USD") => CurrencyFormat::usd(),
            Some(other) => anyhow::bail!("unsupported CURRENCY {other:?}, expected BRL or USD"),
        };
        let home_screen = lookup("HOME_SCREEN").unwrap_or_else(|| "MainBottom".into());
        let host = lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = lookup("APP_PORT").unwrap_or_else(|| "8080".into());
        let listen_addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .with_context(|| format!("invalid listen address {host}:{port}"))?;
        let session_idle_secs = lookup("SESSION_IDLE_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(30 * 60);
        Ok(Self {
            api,
            currency,
            home_screen,
            listen_addr,
            session_idle_secs,
        })
    }

    /// How long an untouched screen session is kept around.
    pub fn session_idle(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs)
    }
}
