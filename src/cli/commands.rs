//! CLI command implementations

use std::fs;
use std::path::{Path, PathBuf};

use super::args::Command;
use super::errors::{CliError, CliResult};
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event_with_fields, Event};
use crate::storage::BookStore;

/// Flags accepted by `serve`
#[derive(Debug, Clone, Default)]
pub struct ServeOptions {
    pub config: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub data: Option<PathBuf>,
}

/// Parse CLI args and run the command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            host,
            port,
            data,
        } => serve(ServeOptions {
            config,
            host,
            port,
            data,
        }),
        Command::Init { data, force } => init(&data, force),
    }
}

/// Build the server configuration: defaults, then the optional config
/// file, then individual flags.
pub fn resolve_config(options: &ServeOptions) -> CliResult<HttpServerConfig> {
    let mut config = match &options.config {
        Some(path) => {
            let content = fs::read_to_string(path)
                .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;
            serde_json::from_str(&content)
                .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?
        }
        None => HttpServerConfig::default(),
    };

    if let Some(host) = &options.host {
        config.host = host.clone();
    }
    if let Some(port) = options.port {
        config.port = port;
    }
    if let Some(data) = &options.data {
        config.data_path = data.clone();
    }
    Ok(config)
}

/// Start the HTTP server and block until it stops
pub fn serve(options: ServeOptions) -> CliResult<()> {
    let config = resolve_config(&options)?;
    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server.start().await.map_err(|e| {
            log_event_with_fields(Event::ServerFailed, &[("error", e.to_string().as_str())]);
            CliError::serve_failed(format!("HTTP server failed: {}", e))
        })
    })
}

/// Write an empty collection to `data_path`
pub fn init(data_path: &Path, force: bool) -> CliResult<()> {
    let store = BookStore::local(data_path);
    if !store.initialize(force)? {
        return Err(CliError::already_initialized(store.path()));
    }

    log_event_with_fields(Event::StoreInitialized, &[("data_path", store.path())]);
    Ok(())
}
