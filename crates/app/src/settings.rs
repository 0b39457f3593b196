//! Handles settings for the application.
//!
//! Sources, from lowest to highest priority: built-in defaults, an optional
//! `settings.toml`, `EXPENSES_*` environment variables (nested keys separated
//! by `__`, e.g. `EXPENSES_RPC__PORT`) and command line flags.
use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Expense ledger served over gRPC and JSON/HTTP.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Cli {
    /// Configuration file, without or with extension.
    #[arg(long, default_value = "settings")]
    pub config: String,
    /// gRPC server port.
    #[arg(long)]
    pub grpc_port: Option<u16>,
    /// HTTP gateway port.
    #[arg(long)]
    pub http_port: Option<u16>,
    /// Log level for the service crates.
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Rpc {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct Http {
    pub bind: String,
    pub port: u16,
    /// Where the gateway dials the gRPC server. Defaults to the local one.
    pub rpc_endpoint: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub rpc: Rpc,
    pub http: Http,
}

impl Settings {
    pub fn new(cli: &Cli) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("app.level", "info")?
            .set_default("rpc.bind", "0.0.0.0")?
            .set_default("rpc.port", 8091)?
            .set_default("http.bind", "0.0.0.0")?
            .set_default("http.port", 8092)?
            .add_source(File::with_name(&cli.config).required(false))
            .add_source(
                Environment::with_prefix("EXPENSES")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("rpc.port", cli.grpc_port.map(i64::from))?
            .set_override_option("http.port", cli.http_port.map(i64::from))?
            .set_override_option("app.level", cli.log_level.clone())?
            .build()?;

        settings.try_deserialize()
    }

    pub fn rpc_addr(&self) -> String {
        format!("{}:{}", self.rpc.bind, self.rpc.port)
    }

    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.http.bind, self.http.port)
    }

    /// URL the gateway uses to reach the gRPC server.
    pub fn rpc_endpoint(&self) -> String {
        self.http
            .rpc_endpoint
            .clone()
            .unwrap_or_else(|| format!("http://127.0.0.1:{}", self.rpc.port))
    }
}
