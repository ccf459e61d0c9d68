//! Product catalog module.
//!
//! Contains flyer products with their pricing rules, and the theme presets.

mod product;
mod theme;

pub use product::{Product, ProductInput};
pub use theme::{StyleRole, Theme, ThemeCatalog, ThemeStyle, BUILTIN_THEMES, DEFAULT_THEME_ID};
