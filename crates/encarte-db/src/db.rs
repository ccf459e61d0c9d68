//! Database connection and query execution.

use std::path::Path;

use crate::{DbError, QueryResult, Row, Value};
use rusqlite::Connection;
use serde::de::DeserializeOwned;

/// SQLite database connection.
///
/// Provides type-safe query execution with automatic result deserialization.
pub struct Db {
    conn: Connection,
}

impl Db {
    /// Open (or create) a SQLite database file.
    ///
    /// ```rust,no_run
    /// let db = encarte_db::Db::open("encartes.db")?;
    /// # Ok::<(), encarte_db::DbError>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DbError> {
        let path = path.as_ref();
        let conn = Connection::open(path)
            .map_err(|e| DbError::OpenError(format!("{}: {}", path.display(), e)))?;
        tracing::debug!(path = %path.display(), "opened sqlite database");
        Ok(Self { conn })
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory().map_err(|e| DbError::OpenError(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Switch the journal to write-ahead logging.
    ///
    /// In-memory databases keep their `memory` journal; that is not an error.
    pub fn enable_wal(&self) -> Result<String, DbError> {
        self.conn
            .query_row("PRAGMA journal_mode = WAL", [], |row| row.get::<_, String>(0))
            .map_err(|e| DbError::QueryError(e.to_string()))
    }

    /// Execute one or more `;`-separated statements without parameters.
    ///
    /// Use this for schema setup (CREATE TABLE, etc.).
    pub fn execute_batch(&self, sql: &str) -> Result<(), DbError> {
        self.conn
            .execute_batch(sql)
            .map_err(|e| DbError::QueryError(e.to_string()))
    }

    /// Execute a SQL statement that doesn't return rows.
    ///
    /// Returns the number of rows changed.
    ///
    /// ```rust,no_run
    /// use encarte_db::{params, Db};
    /// let db = Db::open_in_memory()?;
    /// db.execute("INSERT INTO flyers (id, title) VALUES (?1, ?2)", params![1, "sextou"])?;
    /// # Ok::<(), encarte_db::DbError>(())
    /// ```
    pub fn execute(&self, sql: &str, params: &[Value]) -> Result<usize, DbError> {
        self.conn
            .execute(sql, rusqlite::params_from_iter(params.iter()))
            .map_err(|e| DbError::QueryError(e.to_string()))
    }

    /// Execute a SQL query and return raw results.
    pub fn query(&self, sql: &str, params: &[Value]) -> Result<QueryResult, DbError> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| DbError::QueryError(e.to_string()))?;

        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();

        let mut raw_rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(|e| DbError::QueryError(e.to_string()))?;

        let mut rows = Vec::new();
        while let Some(raw) = raw_rows
            .next()
            .map_err(|e| DbError::QueryError(e.to_string()))?
        {
            let mut values = Vec::with_capacity(columns.len());
            for index in 0..columns.len() {
                let value = raw
                    .get_ref(index)
                    .map_err(|e| DbError::QueryError(e.to_string()))?;
                values.push(Value::try_from(value)?);
            }
            rows.push(Row::new(columns.clone(), values));
        }

        Ok(QueryResult::new(columns, rows))
    }

    /// Execute a SQL query and return an optional single row.
    ///
    /// Returns `None` if no rows are returned.
    pub fn query_optional<T: DeserializeOwned>(
        &self,
        sql: &str,
        params: &[Value],
    ) -> Result<Option<T>, DbError> {
        let result = self.query(sql, params)?;
        match result.first() {
            Some(row) => Ok(Some(row.deserialize()?)),
            None => Ok(None),
        }
    }
}
