//! The flyer document and its stored JSON shape.

use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::{Product, Theme, ThemeCatalog, DEFAULT_THEME_ID};
use crate::error::EncarteError;
use crate::ids::FlyerId;

/// The single promotional document being edited.
///
/// Decoding is lenient so that records written before the store fields
/// existed still load: missing or `null` text fields become `""`, a missing
/// product list becomes empty, a missing theme becomes the default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flyer {
    #[serde(default)]
    pub id: FlyerId,
    #[serde(default = "default_theme_id", deserialize_with = "null_theme_as_default")]
    pub theme_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub valid_until: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub store_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub store_address: String,
    /// Insertion order is display order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
}

fn default_theme_id() -> String {
    DEFAULT_THEME_ID.to_string()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_theme_as_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_theme_id))
}

impl Default for Flyer {
    fn default() -> Self {
        Self::with_theme(DEFAULT_THEME_ID)
    }
}

impl Flyer {
    /// An empty flyer using the given theme.
    pub fn with_theme(theme_id: impl Into<String>) -> Self {
        Self {
            id: FlyerId::singleton(),
            theme_id: theme_id.into(),
            valid_until: String::new(),
            store_name: String::new(),
            store_address: String::new(),
            products: Vec::new(),
        }
    }

    /// The theme to draw with; unknown ids fall back to the catalog's first entry.
    pub fn resolve_theme(&self, catalog: &ThemeCatalog) -> &'static Theme {
        catalog.resolve(&self.theme_id)
    }

    /// Check if any product carries the adult flag.
    pub fn has_adult_products(&self) -> bool {
        self.products.iter().any(|p| p.is_adult)
    }

    /// Decode a stored record, upgrading legacy shapes.
    pub fn decode(data: &str) -> Result<Self, EncarteError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Encode the whole object graph for storage.
    pub fn encode(&self) -> Result<String, EncarteError> {
        Ok(serde_json::to_string(self)?)
    }
}
