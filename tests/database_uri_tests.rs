//! Tests for connection URI construction
//!
//! Covers `src/application/config/database.rs`: one URI form per recognized
//! database kind, plus the sqlite fallback for unrecognized kinds.

use haas::config::{DatabaseConfig, DatabaseKind};
use haas::config::database::RECORDER_SQLITE_URI;

fn mariadb_config(kind: DatabaseKind) -> DatabaseConfig {
    DatabaseConfig {
        kind,
        host: "core-mariadb".to_string(),
        port: 3306,
        name: "homeassistant".to_string(),
        user: "ha".to_string(),
        password: "pw".to_string(),
    }
}

// ============================================================================
// Recognized kinds
// ============================================================================

#[test]
fn sqlite_uri_points_at_shared_recorder_file() {
    let config = DatabaseConfig::default();
    assert_eq!(config.connection_uri(), RECORDER_SQLITE_URI);
    assert_eq!(
        config.connection_uri(),
        "sqlite:////homeassistant/home-assistant_v2.db"
    );
}

#[test]
fn sqlite_uri_ignores_credentials() {
    // Credentials set but kind is sqlite: they must not leak into the URI
    let config = mariadb_config(DatabaseKind::Sqlite);
    assert_eq!(config.connection_uri(), RECORDER_SQLITE_URI);
}

#[test]
fn mysql_uri_has_scheme_and_parameter_order() {
    let config = mariadb_config(DatabaseKind::Mysql);
    let uri = config.connection_uri();
    assert!(uri.starts_with("mysql+"), "unexpected scheme: {}", uri);
    assert!(
        uri.ends_with("ha:pw@core-mariadb:3306/homeassistant"),
        "unexpected URI: {}",
        uri
    );
}

#[test]
fn postgresql_uri_has_scheme_and_parameter_order() {
    let config = DatabaseConfig {
        kind: DatabaseKind::Postgresql,
        host: "core-postgres".to_string(),
        port: 5432,
        name: "homeassistant".to_string(),
        user: "ha".to_string(),
        password: "pw".to_string(),
    };
    let uri = config.connection_uri();
    assert!(uri.starts_with("postgresql+"), "unexpected scheme: {}", uri);
    assert!(
        uri.ends_with("ha:pw@core-postgres:5432/homeassistant"),
        "unexpected URI: {}",
        uri
    );
}

// ============================================================================
// Fallback for unrecognized kinds
// ============================================================================

#[test]
fn unrecognized_kind_parses_as_sqlite() {
    assert_eq!(DatabaseKind::parse("oracle"), DatabaseKind::Sqlite);
    assert_eq!(DatabaseKind::parse(""), DatabaseKind::Sqlite);
}

#[test]
fn unrecognized_kind_uri_equals_sqlite_uri() {
    let config = mariadb_config(DatabaseKind::parse("mssql"));
    let sqlite = mariadb_config(DatabaseKind::Sqlite);
    assert_eq!(config.connection_uri(), sqlite.connection_uri());
}

#[test]
fn recognized_kinds_parse_exactly() {
    assert_eq!(DatabaseKind::parse("sqlite"), DatabaseKind::Sqlite);
    assert_eq!(DatabaseKind::parse("mysql"), DatabaseKind::Mysql);
    assert_eq!(DatabaseKind::parse("postgresql"), DatabaseKind::Postgresql);
}
