use anyhow::{Context, Result};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;

use super::schema::{SCHEMA, SEED_DATA};

/// SQLite in-memory database identifier
const MEMORY_DB_PATH: &str = ":memory:";

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConnection = PooledConnection<SqliteConnectionManager>;

/// Database wrapper with connection pooling support
#[derive(Clone)]
pub struct Database {
    pub pool: DbPool,
}

impl Database {
    /// Open the database at `path`, creating and seeding it on first run.
    ///
    /// The existence check happens before the pool is built, because
    /// opening a connection already creates the file. An existing store
    /// is left untouched: no migration, no re-seeding.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let is_memory = is_memory_path(path);
        let fresh = is_memory || !path.exists();

        let manager = if is_memory {
            SqliteConnectionManager::memory()
        } else {
            SqliteConnectionManager::file(path)
        }
        .with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON"));

        let builder = if is_memory {
            // Every plain :memory: connection is a distinct database, so
            // the pool must hand out the same one
            Pool::builder().max_size(1)
        } else {
            Pool::builder()
        };
        let pool = builder
            .build(manager)
            .context("Failed to create database connection pool")?;

        let db = Self { pool };
        if fresh {
            db.initialize()?;
        }
        Ok(db)
    }

    /// Create an in-memory database (used by tests)
    pub fn in_memory() -> Result<Self> {
        Self::open(MEMORY_DB_PATH)
    }

    /// Create the schema and insert the fixed seed rows
    fn initialize(&self) -> Result<()> {
        let conn = self.connection()?;
        conn.execute_batch(SCHEMA)
            .context("Failed to initialize database schema")?;
        conn.execute_batch(SEED_DATA)
            .context("Failed to insert seed data")?;
        Ok(())
    }

    /// Get a connection from the pool
    pub fn connection(&self) -> Result<DbConnection> {
        self.pool
            .get()
            .context("Failed to get database connection from pool")
    }
}

fn is_memory_path(path: &Path) -> bool {
    path.to_string_lossy()
        .trim()
        .eq_ignore_ascii_case(MEMORY_DB_PATH)
}
