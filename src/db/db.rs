use super::migrations::init_with_migrations;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

pub const DB_FILE_NAME: &str = "todolist.db";

/// How long a connection waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens `path` and applies all pending migrations.
    pub fn open(path: &Path) -> Result<Db> {
        let mut db = Self::connect(path)?;
        init_with_migrations(&mut db.conn)?;
        Ok(db)
    }

    /// Opens `path` without touching the schema.
    ///
    /// Used for per-request sessions once the schema is known to be current.
    pub fn connect(path: &Path) -> rusqlite::Result<Db> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(Db { conn })
    }
}
