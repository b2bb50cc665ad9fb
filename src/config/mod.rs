pub mod app;
pub mod database;

pub use app::{AppConfig, StorageBackend};
pub use database::{run_migrations, DatabaseConfig};

use std::env;
use std::str::FromStr;

/// Reads `key` and parses it, falling back to `default` when the variable is
/// unset or malformed.
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
