//! Database schema migrations.
//!
//! Migration files live in this directory with the naming convention
//! `migration_NN_up.sql` / `migration_NN_down.sql`, where `NN` is the version
//! the "up" script brings the schema to.

use anyhow::Context;
use sqlx::{Executor, SqlitePool};
use tracing::debug;

use crate::Result;

/// A schema migration with up and down SQL.
struct Migration {
    /// The version this migration brings the database to when going up.
    version: i32,
    up_sql: &'static str,
    down_sql: &'static str,
}

/// All available migrations in order.
const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    up_sql: include_str!("migration_01_up.sql"),
    down_sql: include_str!("migration_01_down.sql"),
}];

/// Migrates the database from `current_ver` to `target_ver`, running "up"
/// scripts when moving forward and "down" scripts when moving back. Each step
/// runs in a transaction together with its `schema_version` update, and the
/// whole plan is validated before the first step executes.
pub(crate) async fn run(pool: &SqlitePool, current_ver: i32, target_ver: i32) -> Result<()> {
    if current_ver == target_ver {
        debug!("Database already at target version {target_ver}, no migrations needed");
        return Ok(());
    }

    for (sql, new_version) in plan(current_ver, target_ver)? {
        debug!("Migrating schema to version {new_version}");
        apply(pool, sql, new_version).await?;
    }

    debug!("Migration complete, schema now at version {target_ver}");
    Ok(())
}

/// Builds the ordered list of (script, resulting version) steps, erroring if
/// any required migration is missing.
fn plan(current_ver: i32, target_ver: i32) -> Result<Vec<(&'static str, i32)>> {
    let find = |version: i32| {
        MIGRATIONS.iter().find(|m| m.version == version).with_context(|| {
            format!(
                "Migration {version} is missing but required to migrate \
                 from version {current_ver} to {target_ver}"
            )
        })
    };

    let mut steps = Vec::new();
    if current_ver < target_ver {
        for version in (current_ver + 1)..=target_ver {
            steps.push((find(version)?.up_sql, version));
        }
    } else {
        for version in ((target_ver + 1)..=current_ver).rev() {
            steps.push((find(version)?.down_sql, version - 1));
        }
    }
    Ok(steps)
}

/// Executes one migration script and records the resulting schema version,
/// all within a transaction.
async fn apply(pool: &SqlitePool, sql: &str, new_version: i32) -> Result<()> {
    let mut tx = pool
        .begin()
        .await
        .context("Failed to begin migration transaction")?;

    tx.execute(sql)
        .await
        .context("Failed to execute migration SQL")?;

    sqlx::query("DELETE FROM schema_version")
        .execute(&mut *tx)
        .await
        .context("Failed to clear schema_version")?;
    sqlx::query("INSERT INTO schema_version (version) VALUES (?)")
        .bind(new_version)
        .execute(&mut *tx)
        .await
        .context("Failed to update schema_version")?;

    tx.commit()
        .await
        .context("Failed to commit migration transaction")
}
