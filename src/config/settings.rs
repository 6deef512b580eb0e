//! Process settings read from the environment (`.env` is loaded by the binary first).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/customer";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Which `CustomerStore` backs the service for the lifetime of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    /// Hand-written SQL.
    Sql,
    /// Statements generated from the customer record mapping.
    Query,
    /// In-process map, no database.
    Memory,
}

impl StoreKind {
    pub fn uses_database(self) -> bool {
        !matches!(self, StoreKind::Memory)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StoreKind::Sql => "sql",
            StoreKind::Query => "query",
            StoreKind::Memory => "memory",
        }
    }
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sql" | "jdbc" => Ok(StoreKind::Sql),
            "query" | "jpa" => Ok(StoreKind::Query),
            "memory" => Ok(StoreKind::Memory),
            _ => Err(ConfigError::Invalid {
                key: "CUSTOMER_STORE",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub store: StoreKind,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    /// Random customers registered at startup.
    pub seed_customers: u32,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let store = match lookup("CUSTOMER_STORE") {
            Some(v) => v.parse()?,
            None => StoreKind::Sql,
        };
        let bind_addr: SocketAddr = parse_or(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR.parse().ok())?;
        let max_connections: u32 = parse_or(&lookup, "DB_MAX_CONNECTIONS", Some(5))?;
        let acquire_timeout_secs: u64 = parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", Some(5))?;
        let seed_customers: u32 = parse_or(&lookup, "SEED_CUSTOMERS", Some(0))?;
        Ok(Settings {
            database_url,
            store,
            bind_addr,
            max_connections,
            acquire_timeout_secs,
            seed_customers,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: Option<T>) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => default.ok_or(ConfigError::Invalid {
            key,
            value: String::new(),
        }),
    }
}
