//! CLI argument definitions using clap
//!
//! Commands:
//! - bookshelf serve [--config <path>] [--host <host>] [--port <port>] [--data <path>]
//! - bookshelf init [--data <path>] [--force]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::http_server::config::DEFAULT_DATA_PATH;

/// bookshelf - CRUD over a JSON file of books
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Optional JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,

        /// Path to the books file
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Create an empty books file
    Init {
        /// Path to the books file
        #[arg(long, default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,

        /// Overwrite an existing books file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["bookshelf", "serve"]).unwrap();
        match cli.command {
            Command::Serve { config, host, port, data } => {
                assert!(config.is_none());
                assert!(host.is_none());
                assert!(port.is_none());
                assert!(data.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::try_parse_from(["bookshelf", "serve", "--port", "8080", "--data", "/tmp/b.json"])
            .unwrap();
        match cli.command {
            Command::Serve { port, data, .. } => {
                assert_eq!(port, Some(8080));
                assert_eq!(data, Some(PathBuf::from("/tmp/b.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_init_defaults() {
        let cli = Cli::try_parse_from(["bookshelf", "init"]).unwrap();
        match cli.command {
            Command::Init { data, force } => {
                assert_eq!(data, PathBuf::from(DEFAULT_DATA_PATH));
                assert!(!force);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["bookshelf", "serve", "--port", "http"]).is_err());
    }
}
