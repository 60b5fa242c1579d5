//! Database schema migrations.
//!
//! Every connection opened through [`Db::new`](crate::db::db::Db::new) runs
//! the pending migrations before it is handed out. Applied versions are
//! recorded in the `migrations` table, and all pending migrations are applied
//! in one transaction so a failure leaves the previous schema intact.
//!
//! ## Versions
//!
//! 1. Report rows, alias rules and key/value settings
//! 2. Default group rules, seeded only when no group rule exists yet
//!
//! ## Usage
//!
//! ```rust
//! use dayboard::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open_in_memory()?;
//! init_with_migrations(&mut conn)?;
//! assert_eq!(get_db_version(&conn)?, 2);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::libs::rules::default_group_rules;
use crate::{msg_debug, msg_error, msg_info, msg_success};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of schema migrations in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: one row per imported report line, ordered by position
        // within its day, plus rule lists and persisted UI state
        self.add_migration(1, "create_report_tables", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS entries (
                    id INTEGER PRIMARY KEY,
                    date DATE NOT NULL,
                    position INTEGER NOT NULL,
                    person TEXT NOT NULL,
                    raw_group TEXT NOT NULL DEFAULT '',
                    raw_project TEXT NOT NULL DEFAULT '',
                    issue_id TEXT NOT NULL DEFAULT '',
                    content TEXT NOT NULL DEFAULT '',
                    hours REAL NOT NULL DEFAULT 0,
                    link TEXT NOT NULL DEFAULT '',
                    UNIQUE (date, position)
                )",
                [],
            )?;

            // Days that were imported, including days with no rows
            tx.execute(
                "CREATE TABLE IF NOT EXISTS report_days (
                    date DATE PRIMARY KEY,
                    imported_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS alias_rules (
                    id INTEGER PRIMARY KEY,
                    kind TEXT NOT NULL CHECK (kind IN ('project', 'group')),
                    position INTEGER NOT NULL,
                    canonical_name TEXT NOT NULL,
                    source_names TEXT NOT NULL,
                    UNIQUE (kind, position)
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS settings (
                    key TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                )",
                [],
            )?;

            tx.execute("CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date)", [])?;
            Ok(())
        });

        // Version 2: seed the default group rules on a fresh database
        self.add_migration(2, "seed_default_group_rules", |tx| {
            let existing: i64 = tx.query_row("SELECT COUNT(*) FROM alias_rules WHERE kind = 'group'", [], |row| row.get(0))?;
            if existing > 0 {
                return Ok(());
            }

            for (position, rule) in default_group_rules().iter().enumerate() {
                tx.execute(
                    "INSERT INTO alias_rules (kind, position, canonical_name, source_names) VALUES ('group', ?1, ?2, ?3)",
                    params![position as i64, rule.canonical_name, serde_json::to_string(&rule.source_names)?],
                )?;
            }
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every migration newer than the recorded schema version.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!("Database is up to date");
            return Ok(());
        }

        // A fresh database is created silently, upgrades are announced
        let announce = current_version > 0;
        if announce {
            msg_info!(Message::MigrationsFound(pending.len()));
        }

        let tx = conn.transaction()?;
        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    msg_debug!(Message::MigrationCompleted(migration.version));
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        tx.commit()?;
        if announce {
            msg_success!(Message::AllMigrationsCompleted);
        }

        Ok(())
    }

    /// Latest version this binary knows about.
    pub fn latest_version(&self) -> u32 {
        self.migrations.iter().map(|m| m.version).max().unwrap_or(0)
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;
        Ok(version.unwrap_or(0))
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs all pending migrations on `conn`.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

/// Schema version recorded in `conn`, or 0 for an untouched database.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    conn.execute(MIGRATIONS_TABLE, [])?;
    let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;
    Ok(version.unwrap_or(0))
}
