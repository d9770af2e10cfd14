//! SQLite-backed key-value storage for monthly ledger records.
//!
//! The schema is a single `ledgers` table mapping a month key (for example
//! `JANEIRO_2025`) to the serialized JSON record for that month. Reads and
//! writes of one key are the only suspension points in the application, and
//! each is atomic; nothing guards a read-modify-write sequence spanning both.

mod migrations;

use crate::Result;
use anyhow::{bail, Context};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// The schema version this build expects.
const SCHEMA_VERSION: i32 = 1;

#[derive(Debug, Clone)]
pub(crate) struct Db {
    pool: SqlitePool,
}

impl Db {
    /// Creates a new SQLite file at `path`, initializes the schema and returns
    /// a ready connection. Errors if a file already exists at `path`.
    pub(crate) async fn init(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            bail!("A database file already exists at {}", path.display());
        }
        let pool = open(path, true).await?;

        // Bootstrap the schema_version table, then migrate up from zero.
        sqlx::query("CREATE TABLE schema_version (version INTEGER NOT NULL)")
            .execute(&pool)
            .await
            .context("Failed to create schema_version table")?;
        sqlx::query("INSERT INTO schema_version (version) VALUES (0)")
            .execute(&pool)
            .await
            .context("Failed to insert initial schema version")?;
        migrations::run(&pool, 0, SCHEMA_VERSION).await?;

        debug!("Initialized database at {}", path.display());
        Ok(Self { pool })
    }

    /// Opens the SQLite file at `path`, migrating the schema forward if it is
    /// out of date. Errors if the file does not exist.
    pub(crate) async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            bail!("The database file is missing '{}'", path.display());
        }
        let pool = open(path, false).await?;
        let current = schema_version(&pool).await?;
        migrations::run(&pool, current, SCHEMA_VERSION).await?;
        Ok(Self { pool })
    }

    /// Returns the record stored under `key`, or `None` if the key has never
    /// been written.
    pub(crate) async fn get(&self, key: &str) -> Result<Option<String>> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT record FROM ledgers WHERE month_key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("Failed to read the record for key '{key}'"))?;
        Ok(row.map(|(record,)| record))
    }

    /// Stores `record` under `key`, overwriting any previous value.
    pub(crate) async fn set(&self, key: &str, record: &str) -> Result<()> {
        sqlx::query(
            "INSERT INTO ledgers (month_key, record) VALUES (?, ?) \
             ON CONFLICT(month_key) DO UPDATE SET record = excluded.record",
        )
        .bind(key)
        .bind(record)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to write the record for key '{key}'"))?;
        Ok(())
    }
}

async fn open(path: &Path, create: bool) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))
        .context("Failed to parse SQLite connection string")?
        .create_if_missing(create);
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .with_context(|| format!("Unable to open SQLite database at {}", path.display()))
}

async fn schema_version(pool: &SqlitePool) -> Result<i32> {
    let row: (i32,) = sqlx::query_as("SELECT MAX(version) FROM schema_version")
        .fetch_one(pool)
        .await
        .context("Failed to query schema version")?;
    Ok(row.0)
}
