use crate::error::StoreError;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;
use std::str::FromStr;
use tracing::info;

/// Current schema version.
pub const DB_VERSION: &str = "0.0.1";

/// Option key storing the installed schema version.
const DB_VERSION_OPTION: &str = "i18nly_db_version";

/// A row from the translations table.
#[derive(Debug, Clone, FromRow)]
pub struct TranslationRecord {
    pub id: i64,
    pub source_slug: String,
    pub target_language: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
    translations_table: String,
    options_table: String,
}

impl Database {
    /// Open a connection pool for the given database URL
    pub async fn connect(database_url: &str, table_prefix: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .context(format!("Invalid database URL: {}", database_url))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .context(format!("Failed to open database at {}", database_url))?;

        Ok(Self::from_pool(pool, table_prefix))
    }

    /// Wrap an existing pool. Table names are `{prefix}i18nly_translations`
    /// and `{prefix}i18nly_options`.
    pub fn from_pool(pool: SqlitePool, table_prefix: &str) -> Self {
        Self {
            pool,
            translations_table: format!("{}i18nly_translations", table_prefix),
            options_table: format!("{}i18nly_options", table_prefix),
        }
    }

    pub fn translations_table(&self) -> &str {
        &self.translations_table
    }

    // ==================== Schema ====================

    /// Run the schema install only when the stored version differs from
    /// [`DB_VERSION`]. Returns whether an install was performed.
    pub async fn maybe_upgrade(&self) -> Result<bool> {
        self.ensure_options_table().await?;

        let installed = self.installed_version().await?;
        if installed.as_deref() == Some(DB_VERSION) {
            return Ok(false);
        }

        info!(
            "Upgrading schema from {} to {}",
            installed.as_deref().unwrap_or("<none>"),
            DB_VERSION
        );
        self.install().await?;
        Ok(true)
    }

    /// Create or update tables and record the schema version.
    pub async fn install(&self) -> Result<()> {
        self.ensure_options_table().await?;

        let mut tx = self.pool.begin().await.context("Failed to begin migration")?;

        sqlx::query(&format!(
            "CREATE TABLE IF NOT EXISTS {table} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                source_slug VARCHAR(191) NOT NULL,
                target_language VARCHAR(35) NOT NULL,
                created_at TEXT NOT NULL
            )",
            table = self.translations_table
        ))
        .execute(&mut *tx)
        .await
        .context("Failed to create translations table")?;

        sqlx::query(&format!(
            "CREATE INDEX IF NOT EXISTS {table}_source_slug ON {table} (source_slug)",
            table = self.translations_table
        ))
        .execute(&mut *tx)
        .await
        .context("Failed to create source_slug index")?;

        sqlx::query(&format!(
            "CREATE INDEX IF NOT EXISTS {table}_target_language ON {table} (target_language)",
            table = self.translations_table
        ))
        .execute(&mut *tx)
        .await
        .context("Failed to create target_language index")?;

        sqlx::query(&format!(
            "INSERT INTO {} (name, value) VALUES (?1, ?2)
             ON CONFLICT(name) DO UPDATE SET value = excluded.value",
            self.options_table
        ))
        .bind(DB_VERSION_OPTION)
        .bind(DB_VERSION)
        .execute(&mut *tx)
        .await
        .context("Failed to store schema version")?;

        // Dropping the transaction without commit rolls it back
        tx.commit().await.context("Failed to commit migration")?;

        Ok(())
    }

    /// Stored schema version, if any
    pub async fn installed_version(&self) -> Result<Option<String>> {
        let version = sqlx::query_scalar::<_, String>(&format!(
            "SELECT value FROM {} WHERE name = ?1",
            self.options_table
        ))
        .bind(DB_VERSION_OPTION)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to read schema version")?;

        Ok(version)
    }

    async fn ensure_options_table(&self) -> Result<()> {
        sqlx::query(&format!(
            "CREATE TABLE IF NOT EXISTS {} (
                name VARCHAR(191) PRIMARY KEY,
                value TEXT NOT NULL
            )",
            self.options_table
        ))
        .execute(&self.pool)
        .await
        .context("Failed to create options table")?;
        Ok(())
    }

    // ==================== Translations ====================

    /// Insert a translation and return its server-assigned id.
    ///
    /// Callers validate the fields first; any write failure is reported as
    /// [`StoreError::InsertFailed`] without retrying.
    pub async fn create_translation(
        &self,
        source_slug: &str,
        target_language: &str,
    ) -> Result<i64, StoreError> {
        let result = sqlx::query(&format!(
            "INSERT INTO {} (source_slug, target_language, created_at) VALUES (?1, ?2, ?3)",
            self.translations_table
        ))
        .bind(source_slug)
        .bind(target_language)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(StoreError::InsertFailed)?;

        Ok(result.last_insert_rowid())
    }

    /// Fetch one translation by id. Non-positive ids are never found.
    pub async fn get_translation(&self, id: i64) -> Result<Option<TranslationRecord>, StoreError> {
        if id <= 0 {
            return Ok(None);
        }

        let record = sqlx::query_as::<_, TranslationRecord>(&format!(
            "SELECT id, source_slug, target_language, created_at FROM {} WHERE id = ?1",
            self.translations_table
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// All translations, newest first
    pub async fn list_translations(&self) -> Result<Vec<TranslationRecord>, StoreError> {
        let records = sqlx::query_as::<_, TranslationRecord>(&format!(
            "SELECT id, source_slug, target_language, created_at FROM {} ORDER BY id DESC",
            self.translations_table
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
