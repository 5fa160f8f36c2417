//! `supplydash`: supply-chain dashboard in the terminal.
//!
//! Manages backend contexts, loads the six collections with retries and
//! prints the dashboard panels or a single collection as a table.

mod commands;
mod config;
mod table;

use std::io::IsTerminal;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::config::{ClientConfig, Overrides};

#[derive(Parser, Debug)]
#[command(name = "supplydash", about = "Supply-chain dashboard CLI")]
struct Cli {
    /// Path to client config file (default: ~/.supplydash/config.toml).
    #[arg(long = "config", global = true)]
    config: Option<String>,

    #[arg(long = "output", short = 'o', global = true, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,

    /// API base URL, overriding the current context.
    #[arg(long)]
    server: Option<String>,

    /// Low-stock threshold, overriding the current context.
    #[arg(long)]
    threshold: Option<i64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage backend contexts.
    #[command(name = "context")]
    Context {
        #[command(subcommand)]
        action: ContextAction,
    },

    /// Switch the current context.
    #[command(name = "use")]
    Use {
        #[command(subcommand)]
        what: UseWhat,
    },

    /// Load everything and show the dashboard.
    Dashboard,

    /// List one collection.
    Get {
        /// orders, inventories, shipments, suppliers, items or warehouses.
        resource: String,
        /// Sort the table by this column.
        #[arg(long)]
        sort: Option<String>,
        /// Sort descending.
        #[arg(long)]
        desc: bool,
        /// Only inventory at or below the low-stock threshold.
        #[arg(long = "low-stock")]
        low_stock: bool,
    },

    /// Check backend reachability.
    Status,

    /// Show version.
    Version,
}

#[derive(Subcommand, Debug)]
enum ContextAction {
    /// Create a new context.
    Create {
        name: String,
        /// API base URL (e.g. http://localhost:8080/api).
        #[arg(long)]
        server: String,
        #[arg(long = "threshold")]
        low_stock_threshold: Option<i64>,
    },
    /// List all contexts.
    List,
    /// Set properties on a context.
    Set {
        name: String,
        #[arg(long)]
        server: Option<String>,
        #[arg(long = "threshold")]
        low_stock_threshold: Option<i64>,
        #[arg(long)]
        max_attempts: Option<u32>,
        #[arg(long)]
        initial_delay_ms: Option<u64>,
    },
    /// Delete a context.
    Delete { name: String },
}

#[derive(Subcommand, Debug)]
enum UseWhat {
    /// Switch to a context.
    Context { name: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Degraded endpoints are reported in the output, not the log.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "error".into()))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();

    let config_path = cli
        .config
        .map(std::path::PathBuf::from)
        .unwrap_or_else(ClientConfig::default_path);
    let output_json = cli.output == OutputFormat::Json;
    let overrides = Overrides {
        server: cli.server,
        threshold: cli.threshold,
    };

    match cli.command {
        Commands::Context { action } => match action {
            ContextAction::Create {
                name,
                server,
                low_stock_threshold,
            } => {
                commands::context::create(&name, &server, low_stock_threshold, &config_path)?;
            }
            ContextAction::List => {
                commands::context::list(&config_path)?;
            }
            ContextAction::Set {
                name,
                server,
                low_stock_threshold,
                max_attempts,
                initial_delay_ms,
            } => {
                let update = commands::context::ContextUpdate {
                    server,
                    low_stock_threshold,
                    max_attempts,
                    initial_delay_ms,
                };
                commands::context::set(&name, update, &config_path)?;
            }
            ContextAction::Delete { name } => {
                commands::context::delete(&name, &config_path)?;
            }
        },

        Commands::Use { what } => match what {
            UseWhat::Context { name } => {
                commands::context::use_context(&name, &config_path)?;
            }
        },

        Commands::Dashboard => {
            let client_config = ClientConfig::load(&config_path)?;
            let config = client_config.dashboard_config(&overrides, |k| std::env::var(k).ok())?;
            commands::dashboard::show(&config, output_json).await?;
        }

        Commands::Get {
            resource,
            sort,
            desc,
            low_stock,
        } => {
            let client_config = ClientConfig::load(&config_path)?;
            let config = client_config.dashboard_config(&overrides, |k| std::env::var(k).ok())?;
            let opts = commands::resource::GetOptions {
                sort,
                descending: desc,
                low_stock,
            };
            commands::resource::get(&resource, &opts, output_json, &config).await?;
        }

        Commands::Status => {
            let client_config = ClientConfig::load(&config_path)?;
            let config = client_config.dashboard_config(&overrides, |k| std::env::var(k).ok())?;
            let context = client_config.current().map(|c| c.name.as_str());
            commands::status::status(context, &config, output_json).await?;
        }

        Commands::Version => {
            println!("supplydash v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
