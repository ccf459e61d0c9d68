//! SQLite store, the layout used by the mobile app.

use std::path::Path;

use encarte_db::{params, Db};

use super::{FlyerRow, RecordStore, FLYER_ROW_ID};
use crate::error::EncarteError;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS flyers (
    id INTEGER PRIMARY KEY NOT NULL,
    title TEXT NOT NULL,
    createdAt TEXT NOT NULL,
    data TEXT NOT NULL
);
";

/// Keeps the row in the `flyers` table of a SQLite database.
pub struct SqliteStore {
    db: Db,
    location: String,
}

impl SqliteStore {
    /// Open or create the database file and make sure the table exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, EncarteError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let db = Db::open(path)?;
        if let Err(e) = db.enable_wal() {
            tracing::warn!(error = %e, "could not enable WAL journal");
        }
        Self::init(db, path.display().to_string())
    }

    /// A throwaway database, for tests and dry runs.
    pub fn in_memory() -> Result<Self, EncarteError> {
        Self::init(Db::open_in_memory()?, ":memory:".to_string())
    }

    fn init(db: Db, location: String) -> Result<Self, EncarteError> {
        db.execute_batch(SCHEMA)?;
        tracing::debug!(location = %location, "sqlite schema ready");
        Ok(Self { db, location })
    }
}

impl RecordStore for SqliteStore {
    fn read(&self) -> Result<Option<FlyerRow>, EncarteError> {
        Ok(self.db.query_optional(
            "SELECT id, title, createdAt, data FROM flyers WHERE id = ?1",
            params![FLYER_ROW_ID],
        )?)
    }

    fn write(&self, row: &FlyerRow) -> Result<(), EncarteError> {
        self.db.execute(
            "INSERT OR REPLACE INTO flyers (id, title, createdAt, data) VALUES (?1, ?2, ?3, ?4)",
            params![row.id, &row.title, &row.created_at, &row.data],
        )?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("sqlite:{}", self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Product, ProductInput};
    use crate::flyer::Flyer;
    use crate::persistence::FlyerRepository;

    #[test]
    fn test_empty_database_reads_none() {
        let store = SqliteStore::in_memory().unwrap();
        assert!(store.read().unwrap().is_none());
    }

    #[test]
    fn test_upsert_keeps_one_row() {
        let store = SqliteStore::in_memory().unwrap();
        let mut flyer = Flyer::default();
        store.write(&FlyerRow::from_flyer(&flyer).unwrap()).unwrap();
        flyer.theme_id = "quarta-carne".to_string();
        store.write(&FlyerRow::from_flyer(&flyer).unwrap()).unwrap();

        let count = store.db.query("SELECT id FROM flyers", params![]).unwrap().len();
        assert_eq!(count, 1);
        assert_eq!(store.read().unwrap().unwrap().title, "quarta-carne");
    }

    #[test]
    fn test_reopen_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("encartes.db");

        let mut flyer = Flyer::with_theme("sextou");
        flyer.products.push(
            Product::from_input(ProductInput::new("Cerveja", "4,99").with_offer("3,99").adult(true))
                .unwrap(),
        );
        FlyerRepository::new(SqliteStore::open(&path).unwrap()).save(&flyer);

        let reopened = FlyerRepository::new(SqliteStore::open(&path).unwrap());
        assert_eq!(reopened.load(), Some(flyer));
    }

    #[test]
    fn test_reads_row_written_by_mobile_app() {
        let store = SqliteStore::in_memory().unwrap();
        store
            .db
            .execute(
                "INSERT OR REPLACE INTO flyers (id, title, createdAt, data) VALUES (?1, ?2, ?3, ?4)",
                params![
                    1,
                    "oferta-do-dia",
                    "2024-10-01T12:00:00.000Z",
                    r#"{"id":"1","themeId":"oferta-do-dia","products":[{"id":"x1y2z3","name":"Leite","oldPrice":5.49,"newPrice":null,"imageUrl":"","isAdult":false}]}"#
                ],
            )
            .unwrap();

        let flyer = FlyerRepository::new(store).load().unwrap();
        assert_eq!(flyer.products[0].name, "Leite");
        assert_eq!(flyer.store_name, "");
    }
}
