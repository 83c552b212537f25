use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Default artifact time-to-live: five minutes.
pub const DEFAULT_TTL_SECS: u64 = 300;
/// Default background reclamation period: one minute.
pub const DEFAULT_RECLAIM_INTERVAL_SECS: u64 = 60;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the server binds to.
    pub bind_addr: SocketAddr,
    /// Base URL embedded in returned artifact links. Defaults to
    /// `http://<bind_addr>` when unset.
    pub public_url: Option<String>,
    /// Directory for artifact bytes. Artifacts live in memory when unset.
    pub storage_root: Option<PathBuf>,
    /// Seconds an artifact stays retrievable after creation.
    pub ttl_secs: u64,
    /// Seconds between background reclamation sweeps.
    pub reclaim_interval_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".parse().unwrap(),
            public_url: None,
            storage_root: None,
            ttl_secs: DEFAULT_TTL_SECS,
            reclaim_interval_secs: DEFAULT_RECLAIM_INTERVAL_SECS,
        }
    }
}

impl ServerConfig {
    /// Load a config from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> ServerResult<Self> {
        let raw = fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// The artifact time-to-live.
    pub fn ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.ttl_secs as i64)
    }

    /// The background reclamation period.
    pub fn reclaim_interval(&self) -> Duration {
        Duration::from_secs(self.reclaim_interval_secs)
    }

    /// The base URL for returned artifact links.
    pub fn public_url(&self) -> String {
        match &self.public_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://{}", self.bind_addr),
        }
    }
}
