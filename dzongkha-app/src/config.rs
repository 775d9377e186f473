use std::{env, fmt::Display, str::FromStr};

use anyhow::anyhow;
use tracing::{info, warn};

pub const DEFAULT_PORT: &str = "5000";
pub const DEFAULT_STORE_URL: &str = "json:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub store_url: String,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            port: try_load(&lookup, "PORT", DEFAULT_PORT)?,
            store_url: try_load(&lookup, "STORE_URL", DEFAULT_STORE_URL)?,
        })
    }

    pub fn with_store_url(mut self, store_url: Option<String>) -> Self {
        if let Some(url) = store_url {
            self.store_url = url;
        }
        self
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> anyhow::Result<T>
where
    T::Err: Display,
{
    lookup(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
            anyhow!("invalid {key}: {e}")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.port, 5000);
        assert_eq!(cfg.store_url, "json:");
    }

    #[test]
    fn reads_environment() {
        let vars: HashMap<&str, &str> =
            [("PORT", "5001"), ("STORE_URL", "sqlite://cards.db")].into();
        let cfg = Config::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(cfg.port, 5001);
        assert_eq!(cfg.store_url, "sqlite://cards.db");
    }

    #[test]
    fn bad_port_is_an_error() {
        let res = Config::from_lookup(|k| (k == "PORT").then(|| "http".to_string()));
        assert!(res.is_err());
    }

    #[test]
    fn flag_overrides_store_url() {
        let cfg = Config::from_lookup(|_| None)
            .unwrap()
            .with_store_url(Some("memory:".into()));
        assert_eq!(cfg.store_url, "memory:");
    }
}
