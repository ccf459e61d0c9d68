//! In-process store.

use std::cell::RefCell;
use std::rc::Rc;

use super::{FlyerRow, RecordStore};
use crate::error::EncarteError;

/// Keeps the row in memory. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<FlyerRow>>>,
}

impl MemoryStore {
    /// Current row, if any.
    pub fn row(&self) -> Option<FlyerRow> {
        self.slot.borrow().clone()
    }

    /// Overwrite the row directly.
    pub fn put(&self, row: FlyerRow) {
        *self.slot.borrow_mut() = Some(row);
    }
}

impl RecordStore for MemoryStore {
    fn read(&self) -> Result<Option<FlyerRow>, EncarteError> {
        Ok(self.row())
    }

    fn write(&self, row: &FlyerRow) -> Result<(), EncarteError> {
        self.put(row.clone());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
