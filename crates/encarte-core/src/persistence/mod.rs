//! Single-record flyer persistence.
//!
//! A [`RecordStore`] holds at most one [`FlyerRow`]. The [`FlyerRepository`]
//! turns rows into flyers and back, and never lets a storage failure reach
//! the editing session: reads fail closed to "nothing saved", writes are
//! logged and dropped.

mod file;
mod memory;
#[cfg(feature = "storage")]
mod sqlite;

pub use file::FileStore;
pub use memory::MemoryStore;
#[cfg(feature = "storage")]
pub use sqlite::SqliteStore;

use serde::{Deserialize, Serialize};

use crate::error::EncarteError;
use crate::flyer::Flyer;

/// Primary key of the one stored row.
pub const FLYER_ROW_ID: i64 = 1;

/// The stored row: the encoded flyer plus bookkeeping columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlyerRow {
    pub id: i64,
    /// Mirrors the flyer's theme id.
    pub title: String,
    /// RFC 3339 time of the last save.
    #[serde(rename = "createdAt")]
    pub created_at: String,
    /// The encoded [`Flyer`].
    pub data: String,
}

impl FlyerRow {
    /// Encode a flyer into a fresh row stamped with the current time.
    pub fn from_flyer(flyer: &Flyer) -> Result<Self, EncarteError> {
        Ok(Self {
            id: FLYER_ROW_ID,
            title: flyer.theme_id.clone(),
            created_at: chrono::Utc::now().to_rfc3339(),
            data: flyer.encode()?,
        })
    }
}

/// Backing storage for the single flyer row.
pub trait RecordStore {
    /// Read the row, `None` when nothing was ever saved.
    fn read(&self) -> Result<Option<FlyerRow>, EncarteError>;

    /// Replace the row.
    fn write(&self, row: &FlyerRow) -> Result<(), EncarteError>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Load/save gateway for the current flyer.
pub struct FlyerRepository {
    store: Box<dyn RecordStore>,
}

impl FlyerRepository {
    pub fn new(store: impl RecordStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Where the flyer is kept.
    pub fn location(&self) -> String {
        self.store.describe()
    }

    /// Read and decode the saved flyer, surfacing errors.
    pub fn try_load(&self) -> Result<Option<Flyer>, EncarteError> {
        match self.store.read()? {
            Some(row) => Ok(Some(Flyer::decode(&row.data)?)),
            None => Ok(None),
        }
    }

    /// Read the saved flyer. Any failure is logged and reported as absent.
    pub fn load(&self) -> Option<Flyer> {
        match self.try_load() {
            Ok(Some(flyer)) => {
                tracing::debug!(
                    store = %self.store.describe(),
                    products = flyer.products.len(),
                    "loaded saved flyer"
                );
                Some(flyer)
            }
            Ok(None) => {
                tracing::debug!(store = %self.store.describe(), "no saved flyer");
                None
            }
            Err(e) => {
                tracing::error!(store = %self.store.describe(), error = %e, "failed to read saved flyer");
                None
            }
        }
    }

    /// Encode and write the flyer, surfacing errors.
    pub fn try_save(&self, flyer: &Flyer) -> Result<(), EncarteError> {
        let row = FlyerRow::from_flyer(flyer)?;
        self.store.write(&row)
    }

    /// Write the flyer, replacing any previous save. Failures are logged only.
    pub fn save(&self, flyer: &Flyer) {
        match self.try_save(flyer) {
            Ok(()) => tracing::debug!(store = %self.store.describe(), "saved flyer"),
            Err(e) => {
                tracing::error!(store = %self.store.describe(), error = %e, "failed to save flyer")
            }
        }
    }
}
