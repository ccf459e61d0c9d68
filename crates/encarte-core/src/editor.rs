//! Editing session over the single flyer.

use crate::catalog::{Product, ProductInput, Theme, ThemeCatalog};
use crate::error::ValidationError;
use crate::flyer::Flyer;
use crate::ids::ProductId;
use crate::persistence::FlyerRepository;
use crate::preview::{self, Preview};

/// Asks the user to approve a destructive change.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// What a confirmed operation ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    Cancelled,
    NotFound,
}

/// Owns the in-memory flyer and saves it after every applied change.
///
/// The in-memory flyer is authoritative for the session; save failures are
/// logged by the repository and never reach the caller.
pub struct FlyerEditor {
    flyer: Flyer,
    repository: FlyerRepository,
    catalog: ThemeCatalog,
}

impl FlyerEditor {
    /// Start a session with the built-in themes.
    pub fn open(repository: FlyerRepository) -> Self {
        Self::with_catalog(repository, ThemeCatalog::builtin())
    }

    /// Start a session from the saved flyer, or a fresh one on the catalog default.
    pub fn with_catalog(repository: FlyerRepository, catalog: ThemeCatalog) -> Self {
        let flyer = repository
            .load()
            .unwrap_or_else(|| Flyer::with_theme(catalog.default_theme().id));
        Self {
            flyer,
            repository,
            catalog,
        }
    }

    pub fn flyer(&self) -> &Flyer {
        &self.flyer
    }

    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    pub fn repository(&self) -> &FlyerRepository {
        &self.repository
    }

    /// The theme currently in effect.
    pub fn theme(&self) -> &'static Theme {
        self.flyer.resolve_theme(&self.catalog)
    }

    /// Validate and append a product. Nothing changes on error.
    pub fn add_product(&mut self, input: ProductInput) -> Result<ProductId, ValidationError> {
        let product = Product::from_input(input)?;
        let id = product.id.clone();
        tracing::debug!(id = %id, name = %product.name, "adding product");
        self.flyer.products.push(product);
        self.commit();
        Ok(id)
    }

    /// Remove one product after confirmation.
    ///
    /// Unknown ids return [`EditOutcome::NotFound`] without prompting.
    pub fn remove_product(&mut self, id: &ProductId, confirm: &mut dyn Confirm) -> EditOutcome {
        let Some(index) = self.flyer.products.iter().position(|p| &p.id == id) else {
            tracing::debug!(id = %id, "remove: no such product");
            return EditOutcome::NotFound;
        };

        let prompt = format!("Remover \"{}\" do encarte?", self.flyer.products[index].name);
        if !confirm.confirm(&prompt) {
            return EditOutcome::Cancelled;
        }

        let removed = self.flyer.products.remove(index);
        tracing::debug!(id = %removed.id, "removed product");
        self.commit();
        EditOutcome::Applied
    }

    /// Empty the product list after confirmation.
    pub fn clear_products(&mut self, confirm: &mut dyn Confirm) -> EditOutcome {
        if !confirm.confirm("Limpar todos os produtos do encarte?") {
            return EditOutcome::Cancelled;
        }
        self.flyer.products.clear();
        self.commit();
        EditOutcome::Applied
    }

    /// Unknown ids are kept as-is and render with the fallback theme.
    pub fn set_theme(&mut self, theme_id: impl Into<String>) {
        self.flyer.theme_id = theme_id.into();
        self.commit();
    }

    pub fn set_store_name(&mut self, name: impl Into<String>) {
        self.flyer.store_name = name.into();
        self.commit();
    }

    pub fn set_store_address(&mut self, address: impl Into<String>) {
        self.flyer.store_address = address.into();
        self.commit();
    }

    pub fn set_valid_until(&mut self, valid_until: impl Into<String>) {
        self.flyer.valid_until = valid_until.into();
        self.commit();
    }

    pub fn preview(&self) -> Preview {
        preview::render(&self.flyer, &self.catalog)
    }

    fn commit(&self) {
        self.repository.save(&self.flyer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::price::Price;

    fn editor() -> (FlyerEditor, MemoryStore) {
        let store = MemoryStore::default();
        (FlyerEditor::open(FlyerRepository::new(store.clone())), store)
    }

    fn yes(_: &str) -> bool {
        true
    }

    fn no(_: &str) -> bool {
        false
    }

    #[test]
    fn test_open_without_save_uses_default() {
        let (editor, store) = editor();
        assert_eq!(editor.flyer(), &Flyer::default());
        assert!(store.row().is_none());
    }

    #[test]
    fn test_add_product_parses_comma_price() {
        let (mut editor, store) = editor();
        let id = editor.add_product(ProductInput::new("Arroz", "10,50")).unwrap();

        let product = &editor.flyer().products[0];
        assert_eq!(product.id, id);
        assert_eq!(product.old_price, Price::from_cents(1050));
        assert!(store.row().is_some());
    }

    #[test]
    fn test_add_product_rejects_blank_name() {
        let (mut editor, store) = editor();
        assert_eq!(
            editor.add_product(ProductInput::new("", "5")),
            Err(ValidationError::MissingName)
        );
        assert!(editor.flyer().products.is_empty());
        assert!(store.row().is_none());
    }

    #[test]
    fn test_add_product_rejects_bad_offer() {
        let (mut editor, _) = editor();
        let result = editor.add_product(ProductInput::new("Leite", "5").with_offer("abc"));
        assert!(matches!(result, Err(ValidationError::InvalidPrice(_))));
        assert!(editor.flyer().products.is_empty());
    }

    #[test]
    fn test_remove_asks_with_product_name() {
        let (mut editor, _) = editor();
        let id = editor.add_product(ProductInput::new("Feijão", "8")).unwrap();

        let mut seen = Vec::new();
        let mut record = |prompt: &str| {
            seen.push(prompt.to_string());
            true
        };
        assert_eq!(editor.remove_product(&id, &mut record), EditOutcome::Applied);
        assert!(seen[0].contains("Feijão"));
        assert!(editor.flyer().products.is_empty());
    }

    #[test]
    fn test_remove_cancelled_keeps_product() {
        let (mut editor, store) = editor();
        let id = editor.add_product(ProductInput::new("Feijão", "8")).unwrap();
        let saved = store.row();

        assert_eq!(editor.remove_product(&id, &mut no), EditOutcome::Cancelled);
        assert_eq!(editor.flyer().products.len(), 1);
        assert_eq!(store.row(), saved);
    }

    #[test]
    fn test_remove_unknown_id_does_not_prompt() {
        let (mut editor, _) = editor();
        editor.add_product(ProductInput::new("Óleo", "7")).unwrap();

        let mut asked = false;
        let mut spy = |_: &str| {
            asked = true;
            true
        };
        let outcome = editor.remove_product(&ProductId::new("missing"), &mut spy);
        assert_eq!(outcome, EditOutcome::NotFound);
        assert!(!asked);
        assert_eq!(editor.flyer().products.len(), 1);
    }

    #[test]
    fn test_clear_then_add() {
        let (mut editor, _) = editor();
        editor.add_product(ProductInput::new("A", "1")).unwrap();
        editor.add_product(ProductInput::new("B", "2")).unwrap();

        assert_eq!(editor.clear_products(&mut no), EditOutcome::Cancelled);
        assert_eq!(editor.flyer().products.len(), 2);

        assert_eq!(editor.clear_products(&mut yes), EditOutcome::Applied);
        let id = editor.add_product(ProductInput::new("C", "3")).unwrap();
        assert_eq!(editor.flyer().products.len(), 1);
        assert_eq!(editor.flyer().products[0].id, id);
    }

    #[test]
    fn test_setters_save() {
        let (mut editor, store) = editor();
        editor.set_store_name("Mercado Bom Preço");
        editor.set_store_address("Rua das Flores, 12");
        editor.set_valid_until("20/10");
        editor.set_theme("sextou");

        let reopened = FlyerEditor::open(FlyerRepository::new(store));
        assert_eq!(reopened.flyer(), editor.flyer());
        assert_eq!(reopened.theme().id, "sextou");
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let (mut editor, _) = editor();
        editor.set_theme("natal");
        assert_eq!(editor.flyer().theme_id, "natal");
        assert_eq!(editor.theme().id, "oferta-do-dia");
    }
}
