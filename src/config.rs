//! Runtime configuration.
//!
//! The program takes no command-line arguments; everything it needs comes
//! from the environment, with compiled defaults as fallback.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `BOOK_CATALOG_FILE` | `books.json` | Backing file, relative to the working directory |
//! | `RUST_LOG` | `warn` | `tracing` filter directive, logs go to stderr |

use std::path::PathBuf;

use crate::infra::json_store::DEFAULT_CATALOG_FILE;

pub const CATALOG_FILE_VAR: &str = "BOOK_CATALOG_FILE";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_FILE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Empty values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            catalog_path: get(CATALOG_FILE_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
            log_filter: get(LOG_FILTER_VAR).unwrap_or(defaults.log_filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(Config::from_lookup(lookup(&[])), Config::default());
        assert_eq!(Config::default().catalog_path, PathBuf::from("books.json"));
    }

    #[test]
    fn env_overrides_defaults() {
        let config = Config::from_lookup(lookup(&[
            (CATALOG_FILE_VAR, "/tmp/shelf.json"),
            (LOG_FILTER_VAR, "book_catalog=debug"),
        ]));
        assert_eq!(config.catalog_path, PathBuf::from("/tmp/shelf.json"));
        assert_eq!(config.log_filter, "book_catalog=debug");
    }

    #[test]
    fn blank_values_fall_back() {
        let config = Config::from_lookup(lookup(&[(CATALOG_FILE_VAR, "  ")]));
        assert_eq!(config.catalog_path, PathBuf::from(DEFAULT_CATALOG_FILE));
    }
}
