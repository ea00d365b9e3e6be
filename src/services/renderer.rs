//! `superset_config.py` generation.
//!
//! The rendered file is the only channel through which Superset sees the
//! resolved configuration; nothing is smuggled through the process
//! environment besides `SUPERSET_CONFIG_PATH` itself.

use std::fs;
use std::path::PathBuf;

use crate::application::config::Config;
use crate::error::Result;

/// Render the config file contents from the resolved configuration and the
/// secret key for this boot.
pub fn render_superset_config(config: &Config, secret_key: &str) -> String {
    let metadata_uri = format!("sqlite:///{}", config.paths.metadata_db_file.display());

    format!(
        r#"# Rendered by the HAAS add-on runner on every boot. Do not edit.

SECRET_KEY = {secret_key}
SQLALCHEMY_DATABASE_URI = {metadata_uri}

# Home Assistant ingress terminates authentication in front of the add-on
# and proxies under a rewritten path, so Superset must trust the proxy
# headers and skip its own CSRF protection.
ENABLE_PROXY_FIX = True
WTF_CSRF_ENABLED = False
TALISMAN_ENABLED = False

SUPERSET_WEBSERVER_TIMEOUT = {timeout}
ROW_LIMIT = 5000

FEATURE_FLAGS = {{
    "DASHBOARD_NATIVE_FILTERS": True,
}}
"#,
        secret_key = py_str(secret_key),
        metadata_uri = py_str(&metadata_uri),
        timeout = config.server.timeout_secs,
    )
}

/// Render and write the config file, creating the config directory if the
/// image does not ship it.
pub fn write_superset_config(config: &Config, secret_key: &str) -> Result<PathBuf> {
    let contents = render_superset_config(config, secret_key);
    fs::create_dir_all(&config.paths.config_dir)?;
    fs::write(&config.paths.rendered_config_file, contents)?;
    Ok(config.paths.rendered_config_file.clone())
}

/// Quote a value as a Python string literal. Secret keys are opaque operator
/// input and may contain quotes or backslashes.
fn py_str(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}
