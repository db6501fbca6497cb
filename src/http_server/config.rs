//! HTTP Server Configuration
//!
//! Host, port, and the location of the books file. Defaults are fixed
//! constants; nothing is read from the environment.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Port the service listens on unless overridden on the command line
pub const DEFAULT_PORT: u16 = 3000;

/// Location of the persisted collection
pub const DEFAULT_DATA_PATH: &str = "data/books.json";

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Books file (default: "data/books.json")
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_path: default_data_path(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
