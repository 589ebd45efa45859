//! Server configuration from environment variables

use std::net::SocketAddr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use daily_maze::{parse_instant, Clock, Error, FixedClock, Result, SystemClock};

pub const BIND_VAR: &str = "DAILY_MAZE_BIND";
pub const WORKERS_VAR: &str = "DAILY_MAZE_WORKERS";
pub const FIXED_TIME_VAR: &str = "DAILY_MAZE_FIXED_TIME";

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind: SocketAddr,
    /// Worker thread count; actix picks one per core when unset
    pub workers: Option<usize>,
    /// Serve every request as if it were this instant
    pub fixed_time: Option<DateTime<Utc>>,
}

impl ServerConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key/value source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_raw = lookup(BIND_VAR).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw.parse::<SocketAddr>().map_err(|e| Error::InvalidConfig {
            key: BIND_VAR,
            value: bind_raw.clone(),
            reason: e.to_string(),
        })?;

        let workers = match lookup(WORKERS_VAR) {
            None => None,
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => Some(n),
                Ok(_) => {
                    return Err(Error::InvalidConfig {
                        key: WORKERS_VAR,
                        value: raw,
                        reason: "must be at least 1".to_string(),
                    })
                }
                Err(e) => {
                    return Err(Error::InvalidConfig {
                        key: WORKERS_VAR,
                        value: raw,
                        reason: e.to_string(),
                    })
                }
            },
        };

        let fixed_time = lookup(FIXED_TIME_VAR)
            .map(|raw| parse_instant(&raw))
            .transpose()?;

        Ok(Self {
            bind,
            workers,
            fixed_time,
        })
    }

    /// The clock requests should read
    pub fn clock(&self) -> Arc<dyn Clock> {
        match self.fixed_time {
            Some(at) => Arc::new(FixedClock(at)),
            None => Arc::new(SystemClock),
        }
    }
}
