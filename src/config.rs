use std::{env, fmt::Display, path::PathBuf};

use tracing::{info, warn};

use crate::services::activities_service::CapacityPolicy;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub capacity_policy: CapacityPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            capacity_policy: CapacityPolicy::default(),
        }
    }
}

impl Config {
    /// Reads the process environment. Call after `.env` has been loaded.
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let enforce_capacity = try_load(&lookup, "ENFORCE_CAPACITY", false, parse_flag);

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: try_load(&lookup, "PORT", defaults.port, |v| v.parse().ok()),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            capacity_policy: if enforce_capacity {
                CapacityPolicy::Enforced
            } else {
                CapacityPolicy::Advisory
            },
        }
    }
}

fn try_load<T: Display>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
    parse: impl Fn(&str) -> Option<T>,
) -> T {
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };
    match parse(raw.trim()) {
        Some(v) => v,
        None => {
            warn!("Invalid {key} value {raw:?}, using default: {default}");
            default
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
