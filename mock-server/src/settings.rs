//! Mock server configuration: bind address and whether to seed.
//!
//! Read from an optional `books-server.toml` and `BOOKS_*` environment
//! variables, on top of defaults that match the client's base URL.

use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "books-server";
const ENV_PREFIX: &str = "BOOKS";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServerSettings {
    #[serde(default = "ServerSettings::default_host")]
    pub host: String,
    #[serde(default = "ServerSettings::default_port")]
    pub port: u16,
    /// Load the sample catalog into an empty store on startup.
    #[serde(default = "ServerSettings::default_seed")]
    pub seed: bool,
}

impl ServerSettings {
    /// Layer `.env`, an optional `books-server.toml`, and `BOOKS_*`
    /// environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        // A missing `.env` is not an error.
        let _ = dotenvy::dotenv();

        config::Config::builder()
            .add_source(config::File::with_name(DEFAULT_CONFIG_FILE).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn default_host() -> String {
        "127.0.0.1".to_string()
    }

    fn default_port() -> u16 {
        8080
    }

    fn default_seed() -> bool {
        true
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            seed: Self::default_seed(),
        }
    }
}
