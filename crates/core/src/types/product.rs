//! Catalog product record.

use serde::{Deserialize, Serialize};

use crate::{Price, ProductId};

/// A product as stored in the catalog.
///
/// Products are created and updated only by the catalog backend; the
/// application reads them and never writes them back. Attribute fields may be
/// empty strings when the backend has no value for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Product {
    /// Opaque unique identifier.
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: Price,
    /// Raw category value; categories shown in the UI are derived from these.
    pub category: String,
    /// One or more image URLs.
    pub images: Vec<String>,
    pub color: String,
    pub material: String,
    pub shape: String,
    pub gender: String,
    pub flexibility: String,
    /// Featured on the home page.
    pub featured: bool,
    /// Canonical product link, if the catalog provides one.
    pub link: Option<String>,
}

impl Product {
    /// First image URL, if any.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use rust_decimal::Decimal;

    use super::*;

    /// Build a product for tests, with sensible defaults.
    pub(crate) fn product(id: &str, title: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_owned(),
            description: String::new(),
            price: Price::new(Decimal::from(price)),
            category: "Sol".to_owned(),
            images: vec![format!("https://img.example.com/{id}.jpg")],
            color: String::new(),
            material: String::new(),
            shape: String::new(),
            gender: String::new(),
            flexibility: String::new(),
            featured: false,
            link: None,
        }
    }

    #[test]
    fn test_primary_image() {
        let p = product("p1", "Aviator", 100);
        assert_eq!(
            p.primary_image(),
            Some("https://img.example.com/p1.jpg")
        );

        let mut bare = p;
        bare.images.clear();
        assert_eq!(bare.primary_image(), None);
    }

    #[test]
    fn test_serde_round_trip() {
        let p = product("p2", "Wayfarer", 150);
        let json = serde_json::to_string(&p).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
