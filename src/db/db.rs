use crate::db::migrations::init_with_migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "dayboard.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the report database in the data directory and brings its schema up to date.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let mut conn: Connection = Connection::open(db_file_path)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
