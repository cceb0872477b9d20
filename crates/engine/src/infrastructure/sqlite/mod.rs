//! SQLite record stores (sqlx).
//!
//! One table per record kind. The SQL for a kind is derived once from its
//! [`SqlRecord`] mapping and every statement binds its values.

use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use shelfkeep_domain::Record;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};

use crate::infrastructure::ports::{EntityStore, StoreError};

mod records;

/// Table mapping for a record kind.
pub trait SqlRecord: Record {
    const TABLE: &'static str;
    /// Non-identifier columns, in the order [`SqlRecord::values`] yields them.
    const COLUMNS: &'static [&'static str];

    fn values(&self) -> Vec<&str>;

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error>;
}

/// Open a pool for `url`.
///
/// Accepts sqlx URLs (`sqlite::memory:`, `sqlite://data.db`) or a bare file
/// path. An in-memory database lives on a single connection that is never
/// recycled, so its contents last as long as the pool.
pub async fn connect_pool(url: &str) -> Result<SqlitePool, StoreError> {
    let options = if url.starts_with("sqlite:") {
        SqliteConnectOptions::from_str(url)
            .map_err(|e| StoreError::unavailable("connect", e))?
            .create_if_missing(true)
    } else {
        SqliteConnectOptions::new()
            .filename(url)
            .create_if_missing(true)
    };

    let pool_options = if is_memory_url(url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new()
    };

    let pool = pool_options
        .connect_with(options)
        .await
        .map_err(|e| StoreError::unavailable("connect", e))?;
    tracing::info!(url = %url, "Connected to SQLite");
    Ok(pool)
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

struct Statements {
    create_table: String,
    insert: String,
    select: String,
    exists: String,
    update: String,
    delete: String,
    clear: String,
}

impl Statements {
    fn for_kind<R: SqlRecord>() -> Self {
        let table = R::TABLE;
        let columns = R::COLUMNS;
        let definitions: Vec<String> = columns
            .iter()
            .map(|c| format!("{c} TEXT NOT NULL"))
            .collect();
        let placeholders = vec!["?"; columns.len() + 1].join(", ");
        let assignments: Vec<String> = columns.iter().map(|c| format!("{c} = ?")).collect();

        Self {
            create_table: format!(
                "CREATE TABLE IF NOT EXISTS {table} (id TEXT PRIMARY KEY, {})",
                definitions.join(", ")
            ),
            insert: format!(
                "INSERT INTO {table} (id, {}) VALUES ({placeholders})",
                columns.join(", ")
            ),
            select: format!("SELECT id, {} FROM {table} WHERE id = ?", columns.join(", ")),
            exists: format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE id = ?)"),
            update: format!("UPDATE {table} SET {} WHERE id = ?", assignments.join(", ")),
            delete: format!("DELETE FROM {table} WHERE id = ?"),
            clear: format!("DELETE FROM {table}"),
        }
    }
}

/// SQLite implementation of [`EntityStore`] for one record kind.
pub struct SqliteStore<R> {
    pool: SqlitePool,
    sql: Statements,
    ready: AtomicBool,
    _kind: PhantomData<fn() -> R>,
}

impl<R: SqlRecord> SqliteStore<R> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            sql: Statements::for_kind::<R>(),
            ready: AtomicBool::new(false),
            _kind: PhantomData,
        }
    }

    fn ensure_ready(&self, operation: &'static str) -> Result<(), StoreError> {
        if self.pool.is_closed() {
            return Err(StoreError::unavailable(operation, "connection pool is closed"));
        }
        if !self.ready.load(Ordering::Acquire) {
            return Err(StoreError::unavailable(operation, "store not initialized"));
        }
        Ok(())
    }
}

fn map_sqlx_error(
    operation: &'static str,
    entity_type: &'static str,
    id: &str,
    err: sqlx::Error,
) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            StoreError::duplicate(entity_type, id)
        }
        sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => {
            StoreError::unavailable(operation, &err)
        }
        _ => StoreError::database(operation, &err),
    }
}

#[async_trait]
impl<R: SqlRecord> EntityStore<R> for SqliteStore<R> {
    async fn initialize(&self) -> Result<(), StoreError> {
        if self.pool.is_closed() {
            return Err(StoreError::unavailable("initialize", "connection pool is closed"));
        }
        sqlx::query(&self.sql.create_table)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("initialize", R::KIND, "", e))?;
        self.ready.store(true, Ordering::Release);
        tracing::debug!(entity_type = R::KIND, table = R::TABLE, "SQLite store initialized");
        Ok(())
    }

    async fn save(&self, record: &R) -> Result<(), StoreError> {
        self.ensure_ready("save")?;
        let mut query = sqlx::query(&self.sql.insert).bind(record.id());
        for value in record.values() {
            query = query.bind(value);
        }
        query
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("save", R::KIND, record.id(), e))?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<R, StoreError> {
        self.ensure_ready("find_by_id")?;
        let row = sqlx::query(&self.sql.select)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("find_by_id", R::KIND, id, e))?
            .ok_or_else(|| StoreError::not_found(R::KIND, id))?;
        R::from_row(&row).map_err(|e| StoreError::database("find_by_id", e))
    }

    async fn exists(&self, id: &str) -> Result<bool, StoreError> {
        self.ensure_ready("exists")?;
        let found: i64 = sqlx::query_scalar(&self.sql.exists)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("exists", R::KIND, id, e))?;
        Ok(found != 0)
    }

    async fn update(&self, record: &R) -> Result<(), StoreError> {
        self.ensure_ready("update")?;
        let mut query = sqlx::query(&self.sql.update);
        for value in record.values() {
            query = query.bind(value);
        }
        let result = query
            .bind(record.id())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("update", R::KIND, record.id(), e))?;
        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(R::KIND, record.id()));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.ensure_ready("delete")?;
        let result = sqlx::query(&self.sql.delete)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete", R::KIND, id, e))?;
        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(R::KIND, id));
        }
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.ensure_ready("clear")?;
        sqlx::query(&self.sql.clear)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("clear", R::KIND, "", e))?;
        Ok(())
    }

    async fn shutdown(&self) -> Result<(), StoreError> {
        self.ready.store(false, Ordering::Release);
        // Stores of every kind share the pool; closing twice is harmless.
        self.pool.close().await;
        tracing::debug!(entity_type = R::KIND, "SQLite store shut down");
        Ok(())
    }
}
