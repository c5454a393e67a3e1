// File: src/config.rs
// Purpose: Route table parsing from routes.toml

use anyhow::{Context, Result};
use path_trie::Router;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::Level;

/// Route table configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,

    /// Routes in definition order; earlier routes take precedence
    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// One of trace, debug, info, warn, error (default: "warn")
    #[serde(default = "default_level")]
    pub level: String,
}

/// A single pattern → handler entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteConfig {
    pub pattern: String,
    pub handler: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LogConfig {
    /// Parsed tracing level
    pub fn level(&self) -> Result<Level> {
        self.level
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid log level: {:?}", self.level))
    }
}

impl Config {
    /// Load the route table from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read route table: {:?}", path))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse route table: {:?}", path))
    }

    /// Parse a route table from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Define every route, in file order, on a fresh router
    ///
    /// Stops at the first route the router rejects.
    pub fn build_router(&self) -> Result<Router<String>> {
        let mut router = Router::new();

        for (index, route) in self.routes.iter().enumerate() {
            router
                .define(&route.pattern, route.handler.clone())
                .with_context(|| format!("Route #{} ({}) is invalid", index + 1, route.pattern))?;
        }

        tracing::info!(
            routes = self.routes.len(),
            nodes = router.node_count(),
            "route table built"
        );

        Ok(router)
    }
}
