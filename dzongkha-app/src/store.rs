use anyhow::{bail, Result};
use dzongkha_core::{memory::MemoryStore, CardStore};
use dzongkha_json::JsonStore;
use dzongkha_pg::PgStore;
use dzongkha_sqlite::SqliteStore;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

/// A parsed store connection address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAddr {
    Memory,
    /// `None` means the platform data directory.
    Json(Option<PathBuf>),
    Sqlite(PathBuf),
    SqliteMemory,
    Postgres(String),
}

impl FromStr for StoreAddr {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s == "memory:" {
            Ok(StoreAddr::Memory)
        } else if s == "sqlite::memory:" {
            Ok(StoreAddr::SqliteMemory)
        } else if let Some(rest) = s.strip_prefix("sqlite://") {
            if rest.is_empty() {
                bail!("sqlite store address needs a path");
            }
            Ok(StoreAddr::Sqlite(PathBuf::from(rest)))
        } else if s.starts_with("postgres://") || s.starts_with("postgresql://") {
            Ok(StoreAddr::Postgres(s.to_string()))
        } else if let Some(rest) = s.strip_prefix("json:") {
            Ok(StoreAddr::Json((!rest.is_empty()).then(|| PathBuf::from(rest))))
        } else if s.ends_with(".json") {
            Ok(StoreAddr::Json(Some(PathBuf::from(s))))
        } else {
            bail!("unrecognized store address: {s}")
        }
    }
}

pub async fn open_store(url: &str) -> Result<Arc<dyn CardStore>> {
    let addr: StoreAddr = url.parse()?;
    info!(?addr, "opening card store");
    let store: Arc<dyn CardStore> = match addr {
        StoreAddr::Memory => Arc::new(MemoryStore::new()),
        StoreAddr::Json(None) => Arc::new(JsonStore::open_default().await?),
        StoreAddr::Json(Some(p)) => Arc::new(JsonStore::open(p).await?),
        StoreAddr::Sqlite(p) => {
            if let Some(parent) = p.parent() {
                std::fs::create_dir_all(parent).ok();
            }
            Arc::new(SqliteStore::open_file(&p).await?)
        }
        StoreAddr::SqliteMemory => Arc::new(SqliteStore::open_memory().await?),
        StoreAddr::Postgres(url) => Arc::new(PgStore::connect(&url).await?),
    };
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_schemes() {
        assert_eq!("memory:".parse::<StoreAddr>().unwrap(), StoreAddr::Memory);
        assert_eq!("json:".parse::<StoreAddr>().unwrap(), StoreAddr::Json(None));
        assert_eq!(
            "json:/tmp/cards.json".parse::<StoreAddr>().unwrap(),
            StoreAddr::Json(Some("/tmp/cards.json".into()))
        );
        assert_eq!(
            "./cards.json".parse::<StoreAddr>().unwrap(),
            StoreAddr::Json(Some("./cards.json".into()))
        );
        assert_eq!(
            "sqlite://data/cards.sqlite3".parse::<StoreAddr>().unwrap(),
            StoreAddr::Sqlite("data/cards.sqlite3".into())
        );
        assert_eq!(
            "sqlite::memory:".parse::<StoreAddr>().unwrap(),
            StoreAddr::SqliteMemory
        );
        assert_eq!(
            "postgresql://u@localhost/dzongkha".parse::<StoreAddr>().unwrap(),
            StoreAddr::Postgres("postgresql://u@localhost/dzongkha".into())
        );
    }

    #[test]
    fn rejects_unknown_addresses() {
        assert!("mongodb://127.0.0.1:27017/dzongkha_learning"
            .parse::<StoreAddr>()
            .is_err());
        assert!("sqlite://".parse::<StoreAddr>().is_err());
    }

    #[tokio::test]
    async fn opens_memory_store() {
        let store = open_store("memory:").await.unwrap();
        assert!(store.list_cards().await.unwrap().is_empty());
    }
}
