//! SQLite implementation of the alias repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::AliasRecord;
use crate::domain::error::AliasError;
use crate::domain::repositories::AliasRepository;
use crate::utils::db_error::is_unique_violation;

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS url (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        alias      TEXT NOT NULL UNIQUE,
        target_url TEXT NOT NULL
    )
"#;

const CREATE_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_alias ON url(alias)";

/// How long a connection waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Pool settings for [`connect_pool`].
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub idle_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 5,
            idle_timeout: Duration::from_secs(60),
        }
    }
}

/// Opens the process-wide SQLite pool.
///
/// `storage_path` is either a `sqlite:` URL or a plain file path; the file is
/// created if missing and opened in WAL mode.
///
/// # Errors
///
/// Returns an error if the path cannot be parsed or the database cannot be opened.
pub async fn connect_pool(
    storage_path: &str,
    settings: &PoolSettings,
) -> Result<SqlitePool, sqlx::Error> {
    let options = if storage_path.starts_with("sqlite:") {
        SqliteConnectOptions::from_str(storage_path)?
    } else {
        SqliteConnectOptions::new().filename(storage_path)
    };

    let options = options
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .idle_timeout(settings.idle_timeout)
        .connect_with(options)
        .await
}

/// SQLite repository for alias records.
///
/// Uniqueness of `alias` is enforced by the table's `UNIQUE` constraint, which
/// is the only synchronization point between concurrent writers.
pub struct SqliteAliasRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteAliasRepository {
    /// Creates a new repository over a shared connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AliasRepository for SqliteAliasRepository {
    async fn init(&self) -> Result<(), AliasError> {
        sqlx::query(CREATE_TABLE)
            .execute(self.pool.as_ref())
            .await
            .map_err(AliasError::infra("store.init"))?;

        sqlx::query(CREATE_INDEX)
            .execute(self.pool.as_ref())
            .await
            .map_err(AliasError::infra("store.init"))?;

        tracing::debug!("alias schema ready");
        Ok(())
    }

    async fn create(&self, target_url: &str, alias: &str) -> Result<i64, AliasError> {
        let result = sqlx::query("INSERT INTO url (alias, target_url) VALUES (?1, ?2)")
            .bind(alias)
            .bind(target_url)
            .execute(self.pool.as_ref())
            .await;

        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(e) if is_unique_violation(&e) => Err(AliasError::AliasExists(alias.to_string())),
            Err(e) => Err(AliasError::infra("store.create")(e)),
        }
    }

    async fn get(&self, alias: &str) -> Result<String, AliasError> {
        sqlx::query_scalar::<_, String>("SELECT target_url FROM url WHERE alias = ?1")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(AliasError::infra("store.get"))?
            .ok_or_else(|| AliasError::NotFound(alias.to_string()))
    }

    async fn delete(&self, alias: &str) -> Result<(), AliasError> {
        let done = sqlx::query("DELETE FROM url WHERE alias = ?1")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await
            .map_err(AliasError::infra("store.delete"))?;

        if done.rows_affected() == 0 {
            return Err(AliasError::NotFound(alias.to_string()));
        }

        Ok(())
    }

    async fn find(&self, alias: &str) -> Result<Option<AliasRecord>, AliasError> {
        sqlx::query_as::<_, AliasRecord>("SELECT id, alias, target_url FROM url WHERE alias = ?1")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(AliasError::infra("store.find"))
    }

    async fn count(&self) -> Result<i64, AliasError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(AliasError::infra("store.count"))
    }
}
