/// The Home Assistant recorder database, mounted read-only into the add-on
/// container. Used whenever no external database is configured.
pub const RECORDER_SQLITE_URI: &str = "sqlite:////homeassistant/home-assistant_v2.db";

/// Database engines the add-on knows how to build a SQLAlchemy URI for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatabaseKind {
    #[default]
    Sqlite,
    Mysql,
    Postgresql,
}

impl DatabaseKind {
    /// Parse the `database_type` option. Unrecognized values fall back to
    /// sqlite with a warning; a bad option must not prevent the add-on from
    /// starting.
    pub fn parse(value: &str) -> Self {
        match value {
            "sqlite" => DatabaseKind::Sqlite,
            "mysql" => DatabaseKind::Mysql,
            "postgresql" => DatabaseKind::Postgresql,
            other => {
                tracing::warn!(
                    "Unrecognized database_type '{}', falling back to sqlite",
                    other
                );
                DatabaseKind::Sqlite
            }
        }
    }
}

/// Connection settings for the external recorder database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub kind: DatabaseKind,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            kind: DatabaseKind::Sqlite,
            host: String::new(),
            port: 3306,
            name: "homeassistant".to_string(),
            user: String::new(),
            password: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Build the SQLAlchemy URI Superset uses to reach the recorder data.
    ///
    /// The sqlite form ignores the credential fields entirely and points at
    /// the shared recorder file, so the default configuration works with
    /// zero options set.
    pub fn connection_uri(&self) -> String {
        match self.kind {
            DatabaseKind::Sqlite => RECORDER_SQLITE_URI.to_string(),
            DatabaseKind::Mysql => format!(
                "mysql+pymysql://{}:{}@{}:{}/{}",
                self.user, self.password, self.host, self.port, self.name
            ),
            DatabaseKind::Postgresql => format!(
                "postgresql+psycopg2://{}:{}@{}:{}/{}",
                self.user, self.password, self.host, self.port, self.name
            ),
        }
    }
}
