//! Client-side context management.
//!
//! Reads/writes `~/.supplydash/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use supplydash_core::DashboardConfig;

/// A named backend connection profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    /// Context name (e.g. "warehouse-staging").
    pub name: String,

    /// API base URL (e.g. "http://localhost:8080/api").
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub server: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_stock_threshold: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_delay_ms: Option<u64>,
}

/// Client configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Name of the currently active context.
    #[serde(rename = "current-context", default)]
    pub current_context: String,

    #[serde(default)]
    pub contexts: Vec<Context>,
}

/// Values given on the command line; they win over file and environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub server: Option<String>,
    pub threshold: Option<i64>,
}

impl ClientConfig {
    /// Default config file path: ~/.supplydash/config.toml.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    /// Load config from disk, or return default if file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn current(&self) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == self.current_context)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Context> {
        self.contexts.iter_mut().find(|c| c.name == name)
    }

    /// Add or replace a context by name.
    pub fn upsert_context(&mut self, ctx: Context) {
        if let Some(existing) = self.get_mut(&ctx.name) {
            *existing = ctx;
        } else {
            self.contexts.push(ctx);
        }
    }

    /// Remove a context by name. Returns true if it was found.
    pub fn remove_context(&mut self, name: &str) -> bool {
        let len = self.contexts.len();
        self.contexts.retain(|c| c.name != name);
        if self.current_context == name {
            self.current_context.clear();
        }
        self.contexts.len() < len
    }

    /// Pipeline settings: defaults, then the current context, then
    /// `SUPPLYDASH_*` variables from `lookup`, then `overrides`.
    pub fn dashboard_config<F>(&self, overrides: &Overrides, lookup: F) -> anyhow::Result<DashboardConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = DashboardConfig::default();
        if let Some(ctx) = self.current() {
            if !ctx.server.is_empty() {
                config.base_url = ctx.server.clone();
            }
            if let Some(t) = ctx.low_stock_threshold {
                config.low_stock_threshold = t;
            }
            if let Some(n) = ctx.max_attempts {
                config.max_attempts = n;
            }
            if let Some(ms) = ctx.initial_delay_ms {
                config.initial_delay_ms = ms;
            }
        }
        config.apply_env(lookup)?;
        if let Some(server) = &overrides.server {
            config.base_url = server.clone();
        }
        if let Some(t) = overrides.threshold {
            config.low_stock_threshold = t;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Return the supplydash config directory (~/.supplydash).
fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".supplydash")
}
