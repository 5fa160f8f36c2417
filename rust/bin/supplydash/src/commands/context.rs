//! Context management commands.

use std::path::Path;

use anyhow::Result;
use supplydash_core::DashboardConfig;

use crate::config::{ClientConfig, Context};

/// Optional fields for `context set`.
#[derive(Debug, Default)]
pub struct ContextUpdate {
    pub server: Option<String>,
    pub low_stock_threshold: Option<i64>,
    pub max_attempts: Option<u32>,
    pub initial_delay_ms: Option<u64>,
}

/// Register a new context. The first context created becomes current.
pub fn create(
    name: &str,
    server: &str,
    low_stock_threshold: Option<i64>,
    client_config_path: &Path,
) -> Result<()> {
    let mut config = ClientConfig::load(client_config_path)?;
    if config.contexts.iter().any(|c| c.name == name) {
        anyhow::bail!("Context \"{}\" already exists. Use `supplydash context set {}`.", name, name);
    }

    let ctx = Context {
        name: name.to_string(),
        server: server.to_string(),
        low_stock_threshold,
        ..Default::default()
    };
    check(&ctx)?;
    config.upsert_context(ctx);
    if config.current_context.is_empty() {
        config.current_context = name.to_string();
    }
    config.save(client_config_path)?;

    println!("Context \"{}\" created.", name);
    println!("  Server: {}", server);
    Ok(())
}

pub fn list(client_config_path: &Path) -> Result<()> {
    let config = ClientConfig::load(client_config_path)?;

    if config.contexts.is_empty() {
        println!("No contexts configured.");
        println!("Run: supplydash context create <name> --server <url>");
        return Ok(());
    }

    println!("{:2} {:20} {:40} {:9}", "", "NAME", "SERVER", "THRESHOLD");
    for ctx in &config.contexts {
        let marker = if ctx.name == config.current_context { "*" } else { " " };
        let server = if ctx.server.is_empty() { "-" } else { &ctx.server };
        let threshold = ctx
            .low_stock_threshold
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("{:2} {:20} {:40} {:9}", marker, ctx.name, server, threshold);
    }
    Ok(())
}

pub fn use_context(name: &str, client_config_path: &Path) -> Result<()> {
    let mut config = ClientConfig::load(client_config_path)?;

    if !config.contexts.iter().any(|c| c.name == name) {
        anyhow::bail!(
            "Context \"{}\" not found. Run `supplydash context list` to see available contexts.",
            name
        );
    }

    config.current_context = name.to_string();
    config.save(client_config_path)?;
    println!("Switched to context \"{}\".", name);
    Ok(())
}

pub fn set(name: &str, update: ContextUpdate, client_config_path: &Path) -> Result<()> {
    let mut config = ClientConfig::load(client_config_path)?;

    let ctx = config
        .get_mut(name)
        .ok_or_else(|| anyhow::anyhow!("Context \"{}\" not found.", name))?;

    if let Some(server) = update.server {
        ctx.server = server;
    }
    if update.low_stock_threshold.is_some() {
        ctx.low_stock_threshold = update.low_stock_threshold;
    }
    if update.max_attempts.is_some() {
        ctx.max_attempts = update.max_attempts;
    }
    if update.initial_delay_ms.is_some() {
        ctx.initial_delay_ms = update.initial_delay_ms;
    }
    check(ctx)?;

    config.save(client_config_path)?;
    println!("Context \"{}\" updated.", name);
    Ok(())
}

/// Delete a context. Clears the current context if it was the one removed.
pub fn delete(name: &str, client_config_path: &Path) -> Result<()> {
    let mut config = ClientConfig::load(client_config_path)?;

    if !config.remove_context(name) {
        anyhow::bail!("Context \"{}\" not found.", name);
    }

    config.save(client_config_path)?;
    println!("Context \"{}\" deleted.", name);
    Ok(())
}

/// Reject a context whose settings could never build a pipeline.
fn check(ctx: &Context) -> Result<()> {
    let defaults = DashboardConfig::default();
    let config = DashboardConfig {
        base_url: ctx.server.clone(),
        low_stock_threshold: ctx.low_stock_threshold.unwrap_or(defaults.low_stock_threshold),
        max_attempts: ctx.max_attempts.unwrap_or(defaults.max_attempts),
        initial_delay_ms: ctx.initial_delay_ms.unwrap_or(defaults.initial_delay_ms),
    };
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Context \"{}\": {}", ctx.name, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_sets_first_context_current() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        create("local", "http://localhost:8080/api", None, &path).unwrap();
        create("staging", "https://staging/api", Some(40), &path).unwrap();

        let config = ClientConfig::load(&path).unwrap();
        assert_eq!(config.current_context, "local");
        assert_eq!(config.contexts.len(), 2);
        assert_eq!(config.contexts[1].low_stock_threshold, Some(40));
    }

    #[test]
    fn test_create_rejects_duplicates_and_bad_urls() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        assert!(create("local", "localhost:8080", None, &path).is_err());
        assert!(!path.exists());

        create("local", "http://localhost:8080/api", None, &path).unwrap();
        assert!(create("local", "http://other/api", None, &path).is_err());
    }

    #[test]
    fn test_use_set_delete() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        create("a", "http://a/api", None, &path).unwrap();
        create("b", "http://b/api", None, &path).unwrap();

        use_context("b", &path).unwrap();
        assert!(use_context("missing", &path).is_err());

        set(
            "b",
            ContextUpdate {
                max_attempts: Some(5),
                initial_delay_ms: Some(250),
                ..Default::default()
            },
            &path,
        )
        .unwrap();
        assert!(set("b", ContextUpdate { max_attempts: Some(0), ..Default::default() }, &path).is_err());

        let config = ClientConfig::load(&path).unwrap();
        let b = config.current().unwrap();
        assert_eq!(b.name, "b");
        assert_eq!(b.max_attempts, Some(5));
        assert_eq!(b.initial_delay_ms, Some(250));

        delete("b", &path).unwrap();
        let config = ClientConfig::load(&path).unwrap();
        assert!(config.current().is_none());
        assert!(delete("b", &path).is_err());
    }
}
