//! Secret key and admin credential handling.
//!
//! The Superset secret key signs sessions and cookies, so it must be stable
//! across restarts: it is generated once and persisted on the data volume.
//! The admin password is the opposite: unless the user pins one in the
//! options, a fresh password is generated and printed on every boot.

use std::fs;
use std::io::Write;
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::Rng;

use crate::error::Result;

const SECRET_KEY_BYTES: usize = 32;
const ADMIN_PASSWORD_LENGTH: usize = 16;

/// Resolve the Superset secret key.
///
/// A non-empty override always wins and is never written to disk (the host
/// owns that value). Otherwise the persisted key is reused, or a new one is
/// generated and stored with owner-only permissions. Once a key has been
/// persisted its value never changes.
pub fn get_or_create_secret_key(override_value: Option<&str>, path: &Path) -> Result<String> {
    if let Some(value) = override_value.filter(|v| !v.is_empty()) {
        return Ok(value.to_string());
    }

    if path.exists() {
        let existing = fs::read_to_string(path)?;
        let existing = existing.trim();
        if !existing.is_empty() {
            return Ok(existing.to_string());
        }
    }

    let key = generate_secret_key();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    // Created owner-only from the start; the key must never be readable
    // through a default-umask window.
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(key.as_bytes())?;
    tracing::info!("Generated new secret key at {}", path.display());
    Ok(key)
}

/// Resolve the admin password for this boot.
///
/// With no override a fresh random password is generated every boot and
/// logged prominently; the log line is the only place the operator can read
/// it back. It is intentionally never persisted.
pub fn get_or_create_admin_password(override_value: Option<&str>) -> String {
    if let Some(value) = override_value.filter(|v| !v.is_empty()) {
        return value.to_string();
    }

    let password = generate_secure_password(ADMIN_PASSWORD_LENGTH);
    tracing::warn!(
        "Generated admin password for this boot: {} (set the admin_password option to pin one)",
        password
    );
    password
}

/// Generate a secret key (url-safe base64 of 32 random bytes).
fn generate_secret_key() -> String {
    let mut rng = rand::thread_rng();
    let bytes: [u8; SECRET_KEY_BYTES] = rng.gen();
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Generate a secure random password.
pub fn generate_secure_password(length: usize) -> String {
    const CHARSET: &[u8] =
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
