//! Shell configuration.

use std::path::PathBuf;

/// Environment variable naming the data directory.
pub const DATA_DIR_VAR: &str = "POCKETLIST_DATA_DIR";

/// Configuration for the reference shell.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the durable key files.
    pub data_dir: PathBuf,
}

impl Config {
    /// Read configuration from the environment, falling back to defaults.
    ///
    /// `POCKETLIST_DATA_DIR` overrides the data directory (default
    /// `./pocketlist-data`).
    #[must_use]
    pub fn from_env() -> Self {
        let data_dir = std::env::var_os(DATA_DIR_VAR)
            .map_or_else(|| PathBuf::from("pocketlist-data"), PathBuf::from);

        Self { data_dir }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_data_dir_is_relative() {
        // The variable may be set in the environment running the tests;
        // only assert on the fallback shape when it is not.
        if std::env::var_os(DATA_DIR_VAR).is_none() {
            let config = Config::from_env();
            assert_eq!(config.data_dir, PathBuf::from("pocketlist-data"));
        }
    }
}
