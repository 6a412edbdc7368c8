use std::{env, num::ParseIntError};

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
/// 500×500 cells.
pub const DEFAULT_MAX_CELLS: usize = 250_000;

const BIND_ADDR_VAR: &str = "LABYRINTH_BIND_ADDR";
const MAX_CELLS_VAR: &str = "LABYRINTH_MAX_CELLS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer: {source}")]
    InvalidNumber {
        var: &'static str,
        #[source]
        source: ParseIntError,
    },
    #[error("{var} must be greater than zero")]
    Zero { var: &'static str },
}

/// Size ceiling applied to every request before an algorithm runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_cells: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub limits: Limits,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            limits: Limits::default(),
        }
    }
}

impl AppConfig {
    /// Reads the configuration from the process environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let max_cells = match lookup(MAX_CELLS_VAR) {
            None => DEFAULT_MAX_CELLS,
            Some(raw) => {
                let value: usize = raw.trim().parse().map_err(|source| {
                    ConfigError::InvalidNumber {
                        var: MAX_CELLS_VAR,
                        source,
                    }
                })?;
                if value == 0 {
                    return Err(ConfigError::Zero { var: MAX_CELLS_VAR });
                }
                value
            }
        };
        Ok(Self {
            bind_addr,
            limits: Limits { max_cells },
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.limits, Limits::default());
    }

    #[test]
    fn test_reads_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (BIND_ADDR_VAR, "127.0.0.1:9000"),
            (MAX_CELLS_VAR, " 1024 "),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.limits.max_cells, 1024);
    }

    #[test]
    fn test_rejects_invalid_max_cells() {
        let err = AppConfig::from_lookup(lookup_from(&[(MAX_CELLS_VAR, "lots")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { .. }));

        let err = AppConfig::from_lookup(lookup_from(&[(MAX_CELLS_VAR, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Zero { .. }));
    }
}
