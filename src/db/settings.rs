use crate::db::db::Db;
use crate::libs::selection::AnalysisContext;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{de::DeserializeOwned, Serialize};

const SELECT_SETTING: &str = "SELECT value FROM settings WHERE key = ?1";
const UPSERT_SETTING: &str = "INSERT INTO settings (key, value) VALUES (?1, ?2)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value";

/// Key under which the trend view state is stored.
pub const ANALYSIS_CONTEXT_KEY: &str = "analysis_context";

/// JSON values persisted between runs.
pub struct Settings {
    conn: Connection,
}

impl Settings {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let raw: Option<String> = self.conn.query_row(SELECT_SETTING, params![key], |row| row.get(0)).optional()?;
        match raw {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        self.conn.execute(UPSERT_SETTING, params![key, serde_json::to_string(value)?])?;
        Ok(())
    }

    /// The saved trend view state, or a fresh one in project mode with everything selected.
    pub fn analysis_context(&self) -> Result<AnalysisContext> {
        Ok(self.get(ANALYSIS_CONTEXT_KEY)?.unwrap_or_default())
    }

    pub fn save_analysis_context(&mut self, context: &AnalysisContext) -> Result<()> {
        self.set(ANALYSIS_CONTEXT_KEY, context)
    }
}
