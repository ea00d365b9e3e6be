use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::database::{DatabaseConfig, DatabaseKind};
use crate::error::Result;

/// Raw shape of the host-supplied options file. Every key is optional; the
/// supervisor only writes the keys the user actually changed.
#[derive(Debug, Default, Deserialize)]
struct RawOptions {
    database_type: Option<String>,
    database_host: Option<String>,
    database_port: Option<u16>,
    database_name: Option<String>,
    database_user: Option<String>,
    database_password: Option<String>,
    superset_secret_key: Option<String>,
    admin_password: Option<String>,
}

/// Resolved host options with all defaults applied.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub database: DatabaseConfig,
    pub secret_key: Option<String>,
    pub admin_password: Option<String>,
}

impl Options {
    /// Read the options file, substituting documented defaults for any key
    /// that is absent. A missing file is not an error (fresh install, all
    /// defaults); a present but malformed file is.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = if path.exists() {
            serde_json::from_str::<RawOptions>(&fs::read_to_string(path)?)?
        } else {
            tracing::info!(
                "No options file at {}, using defaults",
                path.display()
            );
            RawOptions::default()
        };
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawOptions) -> Self {
        let defaults = DatabaseConfig::default();
        Self {
            database: DatabaseConfig {
                kind: raw
                    .database_type
                    .as_deref()
                    .map(DatabaseKind::parse)
                    .unwrap_or_default(),
                host: raw.database_host.unwrap_or(defaults.host),
                port: raw.database_port.unwrap_or(defaults.port),
                name: raw.database_name.unwrap_or(defaults.name),
                user: raw.database_user.unwrap_or(defaults.user),
                password: raw.database_password.unwrap_or(defaults.password),
            },
            // Empty strings mean "not set": the supervisor writes "" for
            // cleared password fields.
            secret_key: raw.superset_secret_key.filter(|s| !s.is_empty()),
            admin_password: raw.admin_password.filter(|s| !s.is_empty()),
        }
    }
}
