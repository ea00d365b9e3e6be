//! Application bootstrapper
//!
//! Handles the whole boot sequence of the add-on runner: configuration
//! loading, secret resolution, config rendering, first-run bootstrap and the
//! final hand-off to the web server.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::application::config::{Config, PathsConfig};
use crate::services::bootstrap::{BootstrapSequencer, FileFlagStore};
use crate::services::superset::SupersetCli;
use crate::services::{launcher, renderer, secrets};

/// Bootstrap and run the add-on. On success this never returns: the process
/// is replaced by gunicorn.
pub async fn run() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Starting HAAS add-on runner v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load(PathsConfig::production())?;
    tracing::info!(
        "Recorder database: {:?} ({})",
        config.database.kind,
        config.database.connection_uri()
    );

    let secret_key = secrets::get_or_create_secret_key(
        config.secret_key_override.as_deref(),
        &config.paths.secret_key_file,
    )?;
    let admin_password =
        secrets::get_or_create_admin_password(config.admin_password_override.as_deref());

    let rendered = renderer::write_superset_config(&config, &secret_key)?;
    tracing::info!("Rendered {}", rendered.display());

    let commands = SupersetCli::new(rendered, config.paths.data_dir.clone());
    let flags = FileFlagStore::new(config.paths.flags_dir.clone());
    BootstrapSequencer::new(&commands, &flags)
        .run(
            &admin_password,
            &config.database.connection_uri(),
            &config.paths.dashboards_archive,
        )
        .await?;

    tracing::info!("Handing off to gunicorn on {}", config.server.bind_addr());
    Err(launcher::exec_server(&config).into())
}

/// Initialize tracing/logging
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "haas=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_ansi(false))
        .init();
}
