//! Client configuration: where the collection service lives.
//!
//! Sources are layered lowest to highest: built-in defaults, a TOML file,
//! then `CATALOG_*` environment variables (`.env` is loaded first).

use std::path::Path;

use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "catalog";
const ENV_PREFIX: &str = "CATALOG";

/// Where the catalog client finds the collection service.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ClientSettings {
    #[serde(default = "ClientSettings::default_base_url")]
    pub base_url: String,
}

impl ClientSettings {
    /// Layer `.env`, a settings file, and `CATALOG_*` environment variables.
    ///
    /// With `file` unset, an optional `catalog.toml` in the working directory
    /// is read; an explicit `file` must exist.
    pub fn load(file: Option<&Path>) -> Result<Self, config::ConfigError> {
        // A missing `.env` is not an error.
        let _ = dotenvy::dotenv();

        Self::layered(file, config::Environment::with_prefix(ENV_PREFIX))
    }

    fn layered(
        file: Option<&Path>,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let file_source = match file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        config::Config::builder()
            .add_source(file_source)
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    fn default_base_url() -> String {
        "http://localhost:8080".to_string()
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
        }
    }
}
