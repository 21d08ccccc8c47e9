//! Configuration loading and management.
//!
//! Settings are layered, later layers winning:
//! built-in defaults, `<config_dir>/cc-flavors/config.toml`, the file passed
//! with `--config`, then `CC_FLAVORS_*` environment variables.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

const APP_DIR: &str = "cc-flavors";
const CONFIG_FILE: &str = "config.toml";
const DATABASE_FILE: &str = "events.sqlite";
const ENV_PREFIX: &str = "CC_FLAVORS_";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the SQLite event store.
    pub database_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = app_dir(dirs::data_dir()).unwrap_or_else(|| PathBuf::from("."));
        Self {
            database_path: data_dir.join(DATABASE_FILE),
        }
    }
}

impl Config {
    /// Loads the layered configuration, merging `config_path` over the user file if given.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        Self::figment(config_path).extract()
    }

    /// Replaces the database path when one was given on the command line.
    #[must_use]
    pub fn with_database_override(mut self, database_path: Option<PathBuf>) -> Self {
        if let Some(path) = database_path {
            self.database_path = path;
        }
        self
    }

    fn figment(config_path: Option<&Path>) -> Figment {
        // Missing files are skipped by `Toml::file`.
        let files = app_dir(dirs::config_dir())
            .map(|dir| dir.join(CONFIG_FILE))
            .into_iter()
            .chain(config_path.map(Path::to_path_buf));

        files
            .fold(
                Figment::from(Serialized::defaults(Self::default())),
                |figment, file| figment.merge(Toml::file(file)),
            )
            .merge(Env::prefixed(ENV_PREFIX))
    }
}

/// Joins the application directory onto a platform base directory.
///
/// On Linux, `app_dir(dirs::data_dir())` is `~/.local/share/cc-flavors`.
fn app_dir(base: Option<PathBuf>) -> Option<PathBuf> {
    base.map(|dir| dir.join(APP_DIR))
}
