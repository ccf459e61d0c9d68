//! Pure rendering of a flyer into a display model.
//!
//! [`render`] derives every conditional element once (badges, validity,
//! footer, disclaimer); the text and HTML writers only lay it out.

mod html;
mod text;

use serde::Serialize;

use crate::catalog::{Product, ThemeCatalog, ThemeStyle};
use crate::flyer::Flyer;
use crate::ids::ProductId;

const KICKER: &str = "Destaque da Semana";
const SUBTITLE: &str = "Preços que cabem no seu bolso!";
const SECTION_TITLE: &str = "Ofertas Imperdíveis";
const DISCLAIMER: &str = "Imagens meramente ilustrativas.";
const ADULT_NOTICE: &str = " Beba com moderação.";
const ADULT_BADGE: &str = "+18";

/// Everything the flyer shows, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview {
    pub theme_id: &'static str,
    pub header: Header,
    pub section_title: &'static str,
    /// Present only when a validity date was entered.
    pub validity_badge: Option<String>,
    pub cards: Vec<ProductCard>,
    /// Present only when the store has a name or an address.
    pub footer: Option<Footer>,
    pub disclaimer: String,
    pub style: ThemeStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub kicker: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub banner: Option<&'static str>,
}

/// One product tile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub image_url: Option<String>,
    pub discount_percent: u8,
    /// `-N%`, only when discounted.
    pub discount_badge: Option<String>,
    pub is_adult: bool,
    pub adult_badge: Option<&'static str>,
    /// Regular price, struck through, only when on promotion.
    pub was_price: Option<String>,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Footer {
    pub store_name: Option<String>,
    pub store_address: Option<String>,
}

/// Build the preview for a flyer. Unknown theme ids use the first catalog entry.
pub fn render(flyer: &Flyer, catalog: &ThemeCatalog) -> Preview {
    let theme = flyer.resolve_theme(catalog);

    let validity_badge =
        (!flyer.valid_until.is_empty()).then(|| format!("Válido até {}", flyer.valid_until));

    let footer = if flyer.store_name.is_empty() && flyer.store_address.is_empty() {
        None
    } else {
        Some(Footer {
            store_name: non_empty(&flyer.store_name),
            store_address: non_empty(&flyer.store_address),
        })
    };

    let mut disclaimer = DISCLAIMER.to_string();
    if flyer.has_adult_products() {
        disclaimer.push_str(ADULT_NOTICE);
    }

    Preview {
        theme_id: theme.id,
        header: Header {
            kicker: KICKER,
            title: theme.title,
            subtitle: SUBTITLE,
            banner: theme.banner,
        },
        section_title: SECTION_TITLE,
        validity_badge,
        cards: flyer.products.iter().map(card).collect(),
        footer,
        disclaimer,
        style: theme.style,
    }
}

fn card(product: &Product) -> ProductCard {
    let discount_percent = product.discount_percent();
    ProductCard {
        id: product.id.clone(),
        name: product.name.clone(),
        image_url: product.image_url.clone(),
        discount_percent,
        discount_badge: (discount_percent > 0).then(|| format!("-{}%", discount_percent)),
        is_adult: product.is_adult,
        adult_badge: product.is_adult.then_some(ADULT_BADGE),
        was_price: product
            .is_on_promotion()
            .then(|| format!("De: {}", product.old_price.display())),
        price: product.display_price().display(),
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductInput;

    fn product(input: ProductInput) -> Product {
        Product::from_input(input).unwrap()
    }

    #[test]
    fn test_empty_flyer() {
        let preview = render(&Flyer::default(), &ThemeCatalog::builtin());
        assert_eq!(preview.header.title, "OFERTA DO DIA");
        assert_eq!(preview.header.kicker, "Destaque da Semana");
        assert!(preview.validity_badge.is_none());
        assert!(preview.footer.is_none());
        assert!(preview.cards.is_empty());
        assert_eq!(preview.disclaimer, "Imagens meramente ilustrativas.");
    }

    #[test]
    fn test_promotion_card() {
        let mut flyer = Flyer::default();
        flyer
            .products
            .push(product(ProductInput::new("Arroz", "10,00").with_offer("7,50")));

        let card = &render(&flyer, &ThemeCatalog::builtin()).cards[0];
        assert_eq!(card.discount_percent, 25);
        assert_eq!(card.discount_badge.as_deref(), Some("-25%"));
        assert_eq!(card.was_price.as_deref(), Some("De: R$ 10,00"));
        assert_eq!(card.price, "R$ 7,50");
        assert!(card.adult_badge.is_none());
    }

    #[test]
    fn test_offer_not_below_regular_price() {
        let mut flyer = Flyer::default();
        flyer
            .products
            .push(product(ProductInput::new("Café", "12").with_offer("15")));

        let card = &render(&flyer, &ThemeCatalog::builtin()).cards[0];
        assert!(card.discount_badge.is_none());
        assert!(card.was_price.is_none());
        assert_eq!(card.price, "R$ 12,00");
    }

    #[test]
    fn test_adult_product_adds_notice() {
        let mut flyer = Flyer::default();
        flyer
            .products
            .push(product(ProductInput::new("Vinho", "39,90").adult(true)));

        let preview = render(&flyer, &ThemeCatalog::builtin());
        assert_eq!(preview.cards[0].adult_badge, Some("+18"));
        assert_eq!(
            preview.disclaimer,
            "Imagens meramente ilustrativas. Beba com moderação."
        );
    }

    #[test]
    fn test_validity_and_partial_footer() {
        let mut flyer = Flyer::with_theme("fim-de-semana");
        flyer.valid_until = "31/10".to_string();
        flyer.store_address = "Rua 7, 70".to_string();

        let preview = render(&flyer, &ThemeCatalog::builtin());
        assert_eq!(preview.validity_badge.as_deref(), Some("Válido até 31/10"));
        let footer = preview.footer.unwrap();
        assert!(footer.store_name.is_none());
        assert_eq!(footer.store_address.as_deref(), Some("Rua 7, 70"));
        assert_eq!(preview.theme_id, "fim-de-semana");
    }

    #[test]
    fn test_unknown_theme_renders_first_entry() {
        let preview = render(&Flyer::with_theme("???"), &ThemeCatalog::builtin());
        assert_eq!(preview.theme_id, "oferta-do-dia");
    }
}
