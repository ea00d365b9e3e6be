//! Test helpers and utilities for integration testing.
//!
//! Provides a scratch filesystem layout rooted in a temp directory and a
//! recording fake for the Superset command interface.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use haas::config::{Config, DatabaseConfig, PathsConfig, ServerConfig};
use haas::error::{AppError, Result};
use haas::services::superset::SupersetCommands;

/// Filesystem layout rooted in a scratch directory.
pub fn test_paths(root: &Path) -> PathsConfig {
    PathsConfig::rooted(
        &root.join("data"),
        &root.join("etc/superset"),
        &root.join("share"),
    )
}

/// A full config with default database/server settings and paths under
/// `root`.
pub fn test_config(root: &Path) -> Config {
    Config {
        database: DatabaseConfig::default(),
        server: ServerConfig::default(),
        paths: test_paths(root),
        secret_key_override: None,
        admin_password_override: None,
    }
}

/// Recording fake for the Superset CLI: logs every call and can be told to
/// fail individual commands.
#[derive(Default)]
pub struct RecordingCommands {
    pub calls: Mutex<Vec<String>>,
    pub fail_upgrade: bool,
    pub fail_create_admin: bool,
    pub fail_init_roles: bool,
    pub fail_register: bool,
    pub fail_import: bool,
}

impl RecordingCommands {
    pub fn call_count(&self, name: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.starts_with(name))
            .count()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl SupersetCommands for RecordingCommands {
    async fn upgrade_schema(&self) -> Result<()> {
        self.record("upgrade_schema".to_string());
        if self.fail_upgrade {
            return Err(AppError::Migration("simulated migration failure".to_string()));
        }
        Ok(())
    }

    async fn create_admin(&self, username: &str, _password: &str) -> Result<()> {
        self.record(format!("create_admin {}", username));
        if self.fail_create_admin {
            return Err(AppError::Command("admin user already exists".to_string()));
        }
        Ok(())
    }

    async fn init_roles(&self) -> Result<()> {
        self.record("init_roles".to_string());
        if self.fail_init_roles {
            return Err(AppError::Command("role init error".to_string()));
        }
        Ok(())
    }

    async fn register_database(&self, name: &str, uri: &str) -> Result<()> {
        self.record(format!("register_database {} {}", name, uri));
        if self.fail_register {
            return Err(AppError::Command("database registration failed".to_string()));
        }
        Ok(())
    }

    async fn import_dashboards(&self, archive: &Path) -> Result<()> {
        self.record(format!("import_dashboards {}", archive.display()));
        if self.fail_import {
            return Err(AppError::Command("corrupt archive".to_string()));
        }
        Ok(())
    }
}
