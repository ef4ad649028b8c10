//! Environment configuration for the `derrick` binary.
//!
//! Every setting has a default; a missing variable is logged and the default
//! used, a malformed one is an error. Command-line flags override these, and
//! a variable shadowed by a flag is never read. The server variables are only
//! read by `derrick serve`.

use std::{
    env,
    fmt::Display,
    net::{IpAddr, SocketAddr},
    str::FromStr,
};

use anyhow::{anyhow, Result};
use log::{info, warn};

/// Default address the REST server binds to.
pub const DEFAULT_BIND: &str = "127.0.0.1";
/// Default REST server port.
pub const DEFAULT_PORT: &str = "4000";

/// Settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub strict_status: bool,
}

impl Config {
    /// Reads `DERRICK_STRICT_STATUS`.
    pub fn load() -> Result<Self> {
        Ok(Self {
            strict_status: try_flag("DERRICK_STRICT_STATUS")?,
        })
    }
}

/// Resolves the server address from the `--bind`/`--port` flags, falling
/// back to `DERRICK_BIND` and `DERRICK_PORT` for whichever is absent.
pub fn server_addr(bind: Option<IpAddr>, port: Option<u16>) -> Result<SocketAddr> {
    let bind = match bind {
        Some(bind) => bind,
        None => try_load("DERRICK_BIND", DEFAULT_BIND)?,
    };
    let port = match port {
        Some(port) => port,
        None => try_load("DERRICK_PORT", DEFAULT_PORT)?,
    };
    Ok(SocketAddr::new(bind, port))
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let value = var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.trim().parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        anyhow!("Invalid {key} value '{value}': {e}")
    })
}

fn try_flag(key: &str) -> Result<bool> {
    match var(key) {
        None => Ok(false),
        Some(value) => parse_flag(&value).ok_or_else(|| {
            warn!("Invalid {key} value: {value}");
            anyhow!("Invalid {key} value '{value}': expected true/false, yes/no, on/off or 1/0")
        }),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
