//! First-run bootstrap sequencing.
//!
//! Two independent phases, each recorded by a flag on the persisted data
//! volume once it has completed. Schema migration is the exception: it
//! re-runs on every boot so image upgrades can apply their migrations even
//! long after first-run setup.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;

use crate::error::Result;
use crate::services::superset::{SupersetCommands, ADMIN_USERNAME, EXTERNAL_DATABASE_NAME};

/// One-time bootstrap phases, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Schema migrated, admin account created, roles initialized, recorder
    /// database registered.
    Core,
    /// Bundled dashboard archive imported.
    Dashboards,
}

impl Phase {
    /// Name of the marker file recording completion of this phase.
    pub fn flag_name(&self) -> &'static str {
        match self {
            Phase::Core => "initialized",
            Phase::Dashboards => "dashboards_imported",
        }
    }
}

/// Persistence for "phase completed" markers, injected into the sequencer so
/// tests can substitute an in-memory store.
pub trait FlagStore: Send + Sync {
    fn is_set(&self, phase: Phase) -> bool;
    fn set(&self, phase: Phase) -> Result<()>;
}

/// Flag files on the persisted data volume. The file's mere existence is the
/// signal; the content is a completion timestamp for the curious.
pub struct FileFlagStore {
    dir: PathBuf,
}

impl FileFlagStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn flag_path(&self, phase: Phase) -> PathBuf {
        self.dir.join(phase.flag_name())
    }
}

impl FlagStore for FileFlagStore {
    fn is_set(&self, phase: Phase) -> bool {
        self.flag_path(phase).exists()
    }

    fn set(&self, phase: Phase) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(
            self.flag_path(phase),
            format!("completed at {}\n", Utc::now().to_rfc3339()),
        )?;
        Ok(())
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryFlagStore {
    flags: Mutex<HashSet<Phase>>,
}

impl FlagStore for MemoryFlagStore {
    fn is_set(&self, phase: Phase) -> bool {
        self.flags.lock().unwrap().contains(&phase)
    }

    fn set(&self, phase: Phase) -> Result<()> {
        self.flags.lock().unwrap().insert(phase);
        Ok(())
    }
}

/// Runs the flag-gated bootstrap phases strictly in sequence.
pub struct BootstrapSequencer<'a> {
    commands: &'a dyn SupersetCommands,
    flags: &'a dyn FlagStore,
}

impl<'a> BootstrapSequencer<'a> {
    pub fn new(commands: &'a dyn SupersetCommands, flags: &'a dyn FlagStore) -> Self {
        Self { commands, flags }
    }

    /// Run both phases. A schema migration failure aborts the boot with a
    /// non-zero exit; the host supervisor owns retry and backoff.
    pub async fn run(
        &self,
        admin_password: &str,
        external_db_uri: &str,
        dashboards_archive: &Path,
    ) -> Result<()> {
        self.run_core_phase(admin_password, external_db_uri).await?;
        self.run_dashboard_phase(dashboards_archive).await?;
        Ok(())
    }

    async fn run_core_phase(&self, admin_password: &str, external_db_uri: &str) -> Result<()> {
        // Migrations run on every boot, not just the first: an image upgrade
        // may ship schema changes for an already-initialized data volume.
        tracing::info!("Upgrading Superset metadata schema");
        self.commands.upgrade_schema().await?;

        if self.flags.is_set(Phase::Core) {
            tracing::debug!("Core bootstrap already completed, skipping first-run setup");
            return Ok(());
        }

        tracing::info!("First boot: creating admin account and registering databases");

        // Superset reports an error when the account exists; with a pinned
        // admin_password that happens on every boot after a lost flag file.
        if let Err(e) = self.commands.create_admin(ADMIN_USERNAME, admin_password).await {
            tracing::warn!("Admin account creation skipped: {}", e);
        }

        if let Err(e) = self.commands.init_roles().await {
            tracing::warn!("Role initialization reported an error: {}", e);
        }

        self.commands
            .register_database(EXTERNAL_DATABASE_NAME, external_db_uri)
            .await?;

        // Only after every step succeeded; a failed registration retries on
        // the next boot.
        self.flags.set(Phase::Core)?;
        tracing::info!("First-run bootstrap complete");
        Ok(())
    }

    async fn run_dashboard_phase(&self, archive: &Path) -> Result<()> {
        if self.flags.is_set(Phase::Dashboards) {
            return Ok(());
        }

        if !archive.exists() {
            tracing::debug!(
                "No dashboard archive at {}, skipping import",
                archive.display()
            );
            return Ok(());
        }

        tracing::info!("Importing bundled dashboards from {}", archive.display());
        if let Err(e) = self.commands.import_dashboards(archive).await {
            tracing::warn!("Dashboard import failed: {}", e);
        }

        // Set regardless of the import outcome: a permanently malformed
        // archive must not be retried on every boot.
        self.flags.set(Phase::Dashboards)?;
        Ok(())
    }
}
