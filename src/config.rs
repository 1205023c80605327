//! Process configuration.
//!
//! Runtime settings are read from the environment at startup, with
//! defaults suitable for local development. A `.env` file is honoured
//! when present.

use std::env;
use std::net::{SocketAddr, ToSocketAddrs as _};
use std::path::PathBuf;

use tracing::info;

use crate::error::{EngineError, EngineResult};

/// Address the HTTP server binds to when `HOST_ADDRESS` is not set.
pub const DEFAULT_HOST_ADDRESS: &str = "127.0.0.1:8000";

/// Attendance data file used when `ATTENDANCE_DATA` is not set.
pub const DEFAULT_ATTENDANCE_DATA: &str = "data/attendance.json";

/// Runtime configuration for the engine process.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address the HTTP server listens on.
    pub host_address: SocketAddr,

    /// Path to the attendance data file.
    pub data_path: PathBuf,
}

impl Config {
    /// Builds a configuration from the process environment.
    ///
    /// # Returns
    ///
    /// Returns the configuration, or `InvalidConfig` if `HOST_ADDRESS` is
    /// set to something that does not resolve to a socket address.
    pub fn from_env() -> EngineResult<Self> {
        Ok(Self {
            host_address: load_host_address()?,
            data_path: load_data_path(),
        })
    }
}

fn load_host_address() -> EngineResult<SocketAddr> {
    info!("Loading environment `HOST_ADDRESS`");

    let var = env::var("HOST_ADDRESS").unwrap_or_else(|_| DEFAULT_HOST_ADDRESS.to_string());
    parse_host_address(&var)
}

fn parse_host_address(value: &str) -> EngineResult<SocketAddr> {
    value
        .to_socket_addrs()
        .map_err(|e| EngineError::InvalidConfig {
            name: "HOST_ADDRESS".to_string(),
            message: e.to_string(),
        })?
        .next()
        .ok_or_else(|| EngineError::InvalidConfig {
            name: "HOST_ADDRESS".to_string(),
            message: format!("unable to resolve host from '{}'", value),
        })
}

fn load_data_path() -> PathBuf {
    info!("Loading environment `ATTENDANCE_DATA`");

    let var = env::var("ATTENDANCE_DATA").unwrap_or_else(|_| DEFAULT_ATTENDANCE_DATA.to_string());
    PathBuf::from(var)
}
