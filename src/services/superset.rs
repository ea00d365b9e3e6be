//! Capability interface over the wrapped Superset installation.
//!
//! The bootstrap sequencer never spawns processes itself; it talks to this
//! trait so the branching logic can be exercised in tests without a Superset
//! installation present.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{AppError, Result};

/// Display name of the recorder database record inside Superset's metadata
/// store. Exactly one record with this name may exist.
pub const EXTERNAL_DATABASE_NAME: &str = "Home Assistant";

/// Username of the bootstrap admin account.
pub const ADMIN_USERNAME: &str = "admin";

#[async_trait]
pub trait SupersetCommands: Send + Sync {
    /// Apply pending metadata-store schema migrations.
    async fn upgrade_schema(&self) -> Result<()>;

    /// Create the administrative account. "Already exists" surfaces as an
    /// error; callers decide whether that matters.
    async fn create_admin(&self, username: &str, password: &str) -> Result<()>;

    /// Initialize default roles and permissions (idempotent on the Superset
    /// side).
    async fn init_roles(&self) -> Result<()>;

    /// Register an external database under the given display name, inserting
    /// only if no record with that name exists. The record is created
    /// read-only oriented: DML, CTAS/CVAS and async execution are disallowed.
    async fn register_database(&self, name: &str, uri: &str) -> Result<()>;

    /// Import a dashboard definition archive.
    async fn import_dashboards(&self, archive: &Path) -> Result<()>;
}

/// Looks up the recorder database by name and inserts it only when absent.
/// Runs inside the Superset application context so the ORM handles the
/// metadata store directly.
const REGISTER_DATABASE_SNIPPET: &str = r#"
import os
from superset.app import create_app

app = create_app()
with app.app_context():
    from superset import db
    from superset.models.core import Database

    name = os.environ["HAAS_EXTERNAL_DB_NAME"]
    uri = os.environ["HAAS_EXTERNAL_DB_URI"]
    existing = db.session.query(Database).filter_by(database_name=name).one_or_none()
    if existing is None:
        record = Database(
            database_name=name,
            sqlalchemy_uri=uri,
            expose_in_sqllab=True,
            allow_dml=False,
            allow_ctas=False,
            allow_cvas=False,
            allow_run_async=False,
        )
        db.session.add(record)
        db.session.commit()
"#;

/// Real implementation shelling out to the `superset` CLI bundled in the
/// add-on image.
pub struct SupersetCli {
    config_file: PathBuf,
    superset_home: PathBuf,
}

impl SupersetCli {
    pub fn new(config_file: PathBuf, superset_home: PathBuf) -> Self {
        Self {
            config_file,
            superset_home,
        }
    }

    fn command(&self, program: &str) -> Command {
        let mut cmd = Command::new(program);
        cmd.env("SUPERSET_CONFIG_PATH", &self.config_file)
            .env("SUPERSET_HOME", &self.superset_home)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }

    async fn run(&self, mut cmd: Command, what: &str) -> Result<()> {
        tracing::debug!("Running {}", what);
        let output = cmd
            .output()
            .await
            .map_err(|e| AppError::Command(format!("failed to spawn {}: {}", what, e)))?;

        if output.status.success() {
            Ok(())
        } else {
            Err(AppError::Command(format!(
                "{} exited with {}: {}",
                what,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )))
        }
    }
}

#[async_trait]
impl SupersetCommands for SupersetCli {
    async fn upgrade_schema(&self) -> Result<()> {
        let mut cmd = self.command("superset");
        cmd.args(["db", "upgrade"]);
        self.run(cmd, "superset db upgrade")
            .await
            .map_err(|e| AppError::Migration(e.to_string()))
    }

    async fn create_admin(&self, username: &str, password: &str) -> Result<()> {
        let mut cmd = self.command("superset");
        cmd.args([
            "fab",
            "create-admin",
            "--username",
            username,
            "--firstname",
            "Home",
            "--lastname",
            "Assistant",
            "--email",
            "admin@localhost",
            "--password",
            password,
        ]);
        self.run(cmd, "superset fab create-admin").await
    }

    async fn init_roles(&self) -> Result<()> {
        let mut cmd = self.command("superset");
        cmd.arg("init");
        self.run(cmd, "superset init").await
    }

    async fn register_database(&self, name: &str, uri: &str) -> Result<()> {
        let mut cmd = self.command("python3");
        cmd.args(["-c", REGISTER_DATABASE_SNIPPET])
            .env("HAAS_EXTERNAL_DB_NAME", name)
            .env("HAAS_EXTERNAL_DB_URI", uri);
        self.run(cmd, "database registration").await
    }

    async fn import_dashboards(&self, archive: &Path) -> Result<()> {
        let mut cmd = self.command("superset");
        cmd.args(["import-dashboards", "--username", ADMIN_USERNAME, "--path"])
            .arg(archive);
        self.run(cmd, "superset import-dashboards").await
    }
}
