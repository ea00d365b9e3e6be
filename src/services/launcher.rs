//! Hand-off to the gunicorn web server.
//!
//! The runner's job ends here: `exec` replaces this process with gunicorn,
//! and the host supervisor takes over restart responsibility. No
//! supervision or backoff is implemented on this side.

use std::os::unix::process::CommandExt;
use std::process::Command;

use crate::application::config::Config;
use crate::error::AppError;

/// Build the gunicorn command line for the given configuration.
///
/// Split out from [`exec_server`] so the argument construction is testable;
/// exec itself never returns on success.
pub fn server_command(config: &Config) -> Command {
    let mut cmd = Command::new("gunicorn");
    cmd.arg("--bind")
        .arg(config.server.bind_addr())
        .arg("--workers")
        .arg(config.server.workers.to_string())
        .arg("--timeout")
        .arg(config.server.timeout_secs.to_string())
        .arg("--limit-request-line")
        .arg(config.server.limit_request_line.to_string())
        .arg("--limit-request-field_size")
        .arg(config.server.limit_request_field_size.to_string())
        .arg("--chdir")
        .arg(&config.paths.config_dir)
        // The ingress-aware WSGI wrapper shipped in the image next to the
        // rendered config.
        .arg("ha_wsgi:application")
        .env("SUPERSET_CONFIG_PATH", &config.paths.rendered_config_file)
        .env("SUPERSET_HOME", &config.paths.data_dir);
    cmd
}

/// Replace the current process with the web server. Returns only on failure.
pub fn exec_server(config: &Config) -> AppError {
    let mut cmd = server_command(config);
    let err = cmd.exec();
    AppError::Launch(format!("exec gunicorn: {}", err))
}
