//! Server configuration loaded from the environment.
//!
//! Defaults mirror the pipeline's built-in constants; CLI flags may override
//! the resolved values before validation.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, bail};
use redeemd_core::{OCCURRENCE_THRESHOLD, ValidatorConfig};

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub coupon: CouponConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct CouponConfig {
    /// Directory of line-oriented coupon source files, resolved relative to
    /// the working directory.
    pub data_dir: PathBuf,
    pub workers: usize,
    pub queue_capacity: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = ValidatorConfig::default();

        Ok(Self {
            server: ServerConfig {
                host: env::var("REDEEMD_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: parse_env("REDEEMD_PORT", 8080)?,
            },
            coupon: CouponConfig {
                data_dir: env::var("REDEEMD_DATA_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("data")),
                workers: parse_env("REDEEMD_SCAN_WORKERS", defaults.workers)?,
                queue_capacity: parse_env("REDEEMD_QUEUE_CAPACITY", defaults.queue_capacity)?,
            },
        })
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        // Workers retire after their first match; a pool below the occurrence
        // threshold could never report enough matches to accept any code.
        if self.coupon.workers < OCCURRENCE_THRESHOLD {
            bail!("REDEEMD_SCAN_WORKERS must be at least {OCCURRENCE_THRESHOLD}");
        }
        if self.coupon.queue_capacity == 0 {
            bail!("REDEEMD_QUEUE_CAPACITY must be at least 1");
        }
        Ok(())
    }

    pub fn validator_config(&self) -> ValidatorConfig {
        ValidatorConfig {
            workers: self.coupon.workers,
            queue_capacity: self.coupon.queue_capacity,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}

fn parse_env<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {key}: {raw:?}")),
        Err(_) => Ok(default),
    }
}
