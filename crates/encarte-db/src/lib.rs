//! Type-safe SQLite database layer for Encartes.
//!
//! Wraps a `rusqlite` connection with a small, ergonomic API and
//! serde-backed row deserialization.
//!
//! # Example
//!
//! ```rust,no_run
//! use encarte_db::{params, Db};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Row {
//!     id: i64,
//!     data: String,
//! }
//!
//! let db = Db::open("encartes.db")?;
//! db.execute_batch("CREATE TABLE IF NOT EXISTS kv (id INTEGER PRIMARY KEY, data TEXT)")?;
//! db.execute("INSERT OR REPLACE INTO kv (id, data) VALUES (?1, ?2)", params![1, "hello"])?;
//!
//! let row: Option<Row> = db.query_optional("SELECT id, data FROM kv WHERE id = ?1", params![1])?;
//! # Ok::<(), encarte_db::DbError>(())
//! ```

mod db;
mod error;
mod types;

pub use db::Db;
pub use error::DbError;
pub use types::{QueryResult, Row, Value};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{params, Db, DbError, QueryResult, Row, Value};
}

/// Create a parameter list for SQL queries.
///
/// ```rust
/// use encarte_db::{params, Value};
///
/// let params: &[Value] = params!["value1", 42, 3.5];
/// assert_eq!(params.len(), 3);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        &[]
    };
    ($($param:expr),+ $(,)?) => {
        &[$($crate::Value::from($param)),+]
    };
}
