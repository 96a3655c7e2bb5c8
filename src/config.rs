use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{config_error, Error};

pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    pub request_timeout: Duration,
    pub ensure_schema: bool,
}

impl Config {
    /// Reads the configuration from the process environment, after loading
    /// a `.env` file if one is present.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(env::VarError::NotPresent)?;
        let timeout_secs = parse_or(
            &lookup,
            "POI_REQUEST_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?;

        Ok(Self {
            database_url,
            max_connections: parse_or(
                &lookup,
                "POI_MAX_CONNECTIONS",
                DEFAULT_MAX_CONNECTIONS,
            )?,
            bind_addr: match lookup("POI_BIND_ADDR") {
                Some(value) => parse(&value, "POI_BIND_ADDR")?,
                None => parse(DEFAULT_BIND_ADDR, "POI_BIND_ADDR")?,
            },
            request_timeout: Duration::from_secs(timeout_secs),
            ensure_schema: parse_or(&lookup, "POI_ENSURE_SCHEMA", true)?,
        })
    }
}

fn parse<T: FromStr>(value: &str, key: &str) -> Result<T, Error> {
    value.trim().parse().map_err(|_| config_error(key, value))
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T, Error>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => parse(&value, key),
        None => Ok(default),
    }
}
