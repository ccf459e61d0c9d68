//! Flyer products and their derived pricing.

use crate::error::ValidationError;
use crate::ids::ProductId;
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// A line item on the flyer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier, fixed at creation.
    pub id: ProductId,
    /// Display name (never blank).
    pub name: String,
    /// Regular shelf price.
    pub old_price: Price,
    /// Promotional price, if any.
    #[serde(default)]
    pub new_price: Option<Price>,
    /// Image URL or local reference. Stored as `""` when absent.
    #[serde(default, with = "image_url")]
    pub image_url: Option<String>,
    /// Shows the "+18" badge and the drink-responsibly notice.
    #[serde(default)]
    pub is_adult: bool,
}

impl Product {
    /// Validate raw editor fields and build a product with a fresh id.
    pub fn from_input(input: ProductInput) -> Result<Self, ValidationError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let old_price = Price::parse(&input.old_price)?;

        let new_price = match input.new_price.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => Some(Price::parse(text)?),
            _ => None,
        };

        let image_url = input
            .image_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        Ok(Self {
            id: ProductId::generate(),
            name: name.to_string(),
            old_price,
            new_price,
            image_url,
            is_adult: input.is_adult,
        })
    }

    /// Check if the offer price is below the regular price.
    pub fn is_on_promotion(&self) -> bool {
        self.new_price
            .map(|offer| offer < self.old_price)
            .unwrap_or(false)
    }

    /// Whole percent off, or 0 when not on promotion.
    pub fn discount_percent(&self) -> u8 {
        match self.new_price {
            Some(offer) if self.is_on_promotion() => self.old_price.percent_off(offer),
            _ => 0,
        }
    }

    /// The price shown in large type on the flyer.
    pub fn display_price(&self) -> Price {
        match self.new_price {
            Some(offer) if self.is_on_promotion() => offer,
            _ => self.old_price,
        }
    }
}

/// Raw, unvalidated fields from the add-product form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductInput {
    pub name: String,
    pub old_price: String,
    pub new_price: Option<String>,
    pub image_url: Option<String>,
    pub is_adult: bool,
}

impl ProductInput {
    pub fn new(name: impl Into<String>, old_price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            old_price: old_price.into(),
            ..Default::default()
        }
    }

    pub fn with_offer(mut self, new_price: impl Into<String>) -> Self {
        self.new_price = Some(new_price.into());
        self
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn adult(mut self, is_adult: bool) -> Self {
        self.is_adult = is_adult;
        self
    }
}

/// `imageUrl` is a plain string in stored records; empty means no image.
mod image_url {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.filter(|url| !url.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(old: u64, new: Option<u64>) -> Product {
        Product {
            id: ProductId::new("p1"),
            name: "Arroz".to_string(),
            old_price: Price::from_cents(old),
            new_price: new.map(Price::from_cents),
            image_url: None,
            is_adult: false,
        }
    }

    #[test]
    fn test_promotion_requires_lower_offer() {
        assert!(product(1000, Some(750)).is_on_promotion());
        assert!(!product(1000, Some(1000)).is_on_promotion());
        assert!(!product(1000, Some(1500)).is_on_promotion());
        assert!(!product(1000, None).is_on_promotion());
    }

    #[test]
    fn test_discount_percent() {
        assert_eq!(product(1000, Some(750)).discount_percent(), 25);
        assert_eq!(product(1000, Some(1500)).discount_percent(), 0);
        assert_eq!(product(1000, None).discount_percent(), 0);
        assert_eq!(product(0, Some(0)).discount_percent(), 0);
    }

    #[test]
    fn test_display_price() {
        assert_eq!(product(1000, Some(750)).display_price(), Price::from_cents(750));
        assert_eq!(product(1000, Some(1500)).display_price(), Price::from_cents(1000));
        assert_eq!(product(1000, None).display_price(), Price::from_cents(1000));
    }

    #[test]
    fn test_from_input_valid() {
        let p = Product::from_input(
            ProductInput::new("  Arroz  ", "10,50")
                .with_offer("8,99")
                .with_image(" https://img/arroz.png ")
                .adult(false),
        )
        .unwrap();
        assert_eq!(p.name, "Arroz");
        assert_eq!(p.old_price.amount_cents(), 1050);
        assert_eq!(p.new_price, Some(Price::from_cents(899)));
        assert_eq!(p.image_url.as_deref(), Some("https://img/arroz.png"));
        assert!(!p.id.as_str().is_empty());
    }

    #[test]
    fn test_from_input_blank_optional_fields() {
        let p = Product::from_input(ProductInput::new("Leite", "4").with_offer(" ").with_image(""))
            .unwrap();
        assert_eq!(p.new_price, None);
        assert_eq!(p.image_url, None);
    }

    #[test]
    fn test_from_input_rejections() {
        assert_eq!(
            Product::from_input(ProductInput::new("", "5")),
            Err(ValidationError::MissingName)
        );
        assert_eq!(
            Product::from_input(ProductInput::new("   ", "5")),
            Err(ValidationError::MissingName)
        );
        assert_eq!(
            Product::from_input(ProductInput::new("Cerveja", "")),
            Err(ValidationError::MissingPrice)
        );
        assert!(matches!(
            Product::from_input(ProductInput::new("Cerveja", "caro")),
            Err(ValidationError::InvalidPrice(_))
        ));
        assert!(matches!(
            Product::from_input(ProductInput::new("Cerveja", "5").with_offer("x")),
            Err(ValidationError::InvalidPrice(_))
        ));
    }

    #[test]
    fn test_sub_centavo_prices_rejected() {
        // Both would collapse to R$ 10,00 and hide the offer
        assert!(matches!(
            Product::from_input(ProductInput::new("X", "10,004").with_offer("10,001")),
            Err(ValidationError::InvalidPrice(_))
        ));
        assert!(matches!(
            Product::from_input(ProductInput::new("X", "0,01").with_offer("0,001")),
            Err(ValidationError::InvalidPrice(_))
        ));
        assert!(matches!(
            Product::from_input(ProductInput::new("X", "1e20")),
            Err(ValidationError::InvalidPrice(_))
        ));
    }

    #[test]
    fn test_record_shape() {
        let mut p = product(1050, None);
        p.is_adult = true;
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "p1",
                "name": "Arroz",
                "oldPrice": 10.5,
                "newPrice": null,
                "imageUrl": "",
                "isAdult": true
            })
        );
    }

    #[test]
    fn test_decode_stored_record() {
        let json = r#"{"id":"k3j9x0a1b","name":"Cerveja","oldPrice":4.99,"newPrice":3.49,"imageUrl":"https://x/c.png","isAdult":true}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.discount_percent(), 30);
        assert_eq!(p.image_url.as_deref(), Some("https://x/c.png"));
    }
}
