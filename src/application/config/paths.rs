use std::path::{Path, PathBuf};

/// Filesystem layout of the add-on container.
///
/// Everything under `data_dir` survives restarts and image upgrades; the
/// config dir is baked into the image and re-rendered on every boot.
#[derive(Debug, Clone)]
pub struct PathsConfig {
    /// Persisted add-on data volume.
    pub data_dir: PathBuf,
    /// Host-supplied options, written by the supervisor.
    pub options_file: PathBuf,
    /// Persisted Superset secret key (owner-only).
    pub secret_key_file: PathBuf,
    /// Directory holding the bootstrap flag files.
    pub flags_dir: PathBuf,
    /// Superset's own metadata store.
    pub metadata_db_file: PathBuf,
    /// Directory holding the rendered config and the ingress WSGI wrapper.
    pub config_dir: PathBuf,
    /// Rendered `superset_config.py`, rewritten on every boot.
    pub rendered_config_file: PathBuf,
    /// Bundled default dashboards, imported once if present.
    pub dashboards_archive: PathBuf,
}

impl PathsConfig {
    /// The layout used inside the published add-on image.
    pub fn production() -> Self {
        Self::rooted(
            Path::new("/data"),
            Path::new("/etc/superset"),
            Path::new("/usr/share/superset"),
        )
    }

    /// Derive the full layout from three roots. Tests point these at a
    /// scratch directory.
    pub fn rooted(data_dir: &Path, config_dir: &Path, share_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            options_file: data_dir.join("options.json"),
            secret_key_file: data_dir.join(".superset_secret_key"),
            flags_dir: data_dir.to_path_buf(),
            metadata_db_file: data_dir.join("superset.db"),
            config_dir: config_dir.to_path_buf(),
            rendered_config_file: config_dir.join("superset_config.py"),
            dashboards_archive: share_dir.join("dashboards.zip"),
        }
    }
}
