//! Promotional flyer ("encarte") domain types and editing logic.
//!
//! - **Catalog**: products with promotional pricing, the fixed theme presets
//! - **Flyer**: the single document being edited and its persisted record shape
//! - **Persistence**: one-record repository over pluggable stores
//! - **Editor**: validated edit operations with save-after-every-change
//! - **Preview**: pure rendering of a flyer into text or HTML
//!
//! # Example
//!
//! ```rust
//! use encarte_core::prelude::*;
//!
//! let mut editor = FlyerEditor::open(FlyerRepository::new(MemoryStore::default()));
//! editor.set_store_name("Mercado Bom Preço");
//! editor
//!     .add_product(ProductInput::new("Arroz 5kg", "10,00").with_offer("7,50"))
//!     .unwrap();
//!
//! let preview = editor.preview();
//! assert_eq!(preview.cards[0].discount_badge.as_deref(), Some("-25%"));
//! ```

pub mod error;
pub mod ids;
pub mod price;

pub mod catalog;
pub mod editor;
pub mod flyer;
pub mod images;
pub mod persistence;
pub mod preview;

pub use error::{EncarteError, ValidationError};
pub use ids::*;
pub use price::Price;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{EncarteError, ValidationError};
    pub use crate::ids::*;
    pub use crate::price::Price;

    pub use crate::catalog::{Product, ProductInput, StyleRole, Theme, ThemeCatalog, ThemeStyle};
    pub use crate::editor::{Confirm, EditOutcome, FlyerEditor};
    pub use crate::flyer::Flyer;
    pub use crate::images::{image_candidates, ImageSearch, KnownProductImages};
    pub use crate::persistence::{FileStore, FlyerRepository, FlyerRow, MemoryStore, RecordStore};
    #[cfg(feature = "storage")]
    pub use crate::persistence::SqliteStore;
    pub use crate::preview::{render, Preview, ProductCard};
}
