pub mod database;
pub mod options;
pub mod paths;
pub mod server;

pub use database::{DatabaseConfig, DatabaseKind};
pub use options::Options;
pub use paths::PathsConfig;
pub use server::ServerConfig;

use crate::error::Result;

/// Fully resolved application configuration.
///
/// Assembled once at boot from the host options file plus fixed path and
/// server settings, then passed by value to whoever needs it. There is no
/// global config instance and no implicit environment channel.
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub paths: PathsConfig,

    /// Host-provided secret key; when set it wins over the persisted one.
    pub secret_key_override: Option<String>,
    /// Host-provided admin password; when unset a fresh one is generated
    /// every boot.
    pub admin_password_override: Option<String>,
}

impl Config {
    /// Load the configuration for the given filesystem layout, reading the
    /// host options file if it exists.
    pub fn load(paths: PathsConfig) -> Result<Self> {
        let options = Options::load(&paths.options_file)?;
        Ok(Self {
            database: options.database,
            server: ServerConfig::default(),
            paths,
            secret_key_override: options.secret_key,
            admin_password_override: options.admin_password,
        })
    }
}
