//! Filter option discovery.
//!
//! Option lists are derived from the full product collection so the filter
//! widgets only ever offer values that exist in the catalog.

use solara_core::{Price, Product, dedupe_preserving_first};

/// Distinct attribute values and the observed price range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub colors: Vec<String>,
    pub materials: Vec<String>,
    pub shapes: Vec<String>,
    pub genders: Vec<String>,
    pub flexibilities: Vec<String>,
    pub min_price: Option<Price>,
    pub max_price: Option<Price>,
}

/// Derive filter options from the product collection.
pub(super) fn derive_options(products: &[Product]) -> FilterOptions {
    FilterOptions {
        colors: distinct(products, |p| &p.color),
        materials: distinct(products, |p| &p.material),
        shapes: distinct(products, |p| &p.shape),
        genders: distinct(products, |p| &p.gender),
        flexibilities: distinct(products, |p| &p.flexibility),
        min_price: products.iter().map(|p| p.price).min(),
        max_price: products.iter().map(|p| p.price).max(),
    }
}

fn distinct(products: &[Product], attr: impl Fn(&Product) -> &String) -> Vec<String> {
    dedupe_preserving_first(products.iter().map(|p| attr(p).clone()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use solara_core::ProductId;

    use super::*;

    fn product(id: &str, color: &str, material: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: id.to_owned(),
            description: String::new(),
            price: Price::new(Decimal::from(price)),
            category: "Sol".to_owned(),
            images: Vec::new(),
            color: color.to_owned(),
            material: material.to_owned(),
            shape: String::new(),
            gender: String::new(),
            flexibility: String::new(),
            featured: false,
            link: None,
        }
    }

    #[test]
    fn test_distinct_values_dedupe_case_insensitively() {
        let products = vec![
            product("p1", "Negro", "Acetato", 100),
            product("p2", "negro", "Metal", 250),
            product("p3", "Carey", "acetato", 180),
        ];
        let options = derive_options(&products);
        assert_eq!(options.colors, vec!["Negro", "Carey"]);
        assert_eq!(options.materials, vec!["Acetato", "Metal"]);
        // Empty attributes contribute no options
        assert!(options.shapes.is_empty());
    }

    #[test]
    fn test_price_range_is_observed_min_max() {
        let products = vec![
            product("p1", "Negro", "Acetato", 100),
            product("p2", "Carey", "Metal", 250),
            product("p3", "Azul", "Metal", 180),
        ];
        let options = derive_options(&products);
        assert_eq!(options.min_price, Some(Price::new(Decimal::from(100))));
        assert_eq!(options.max_price, Some(Price::new(Decimal::from(250))));
    }

    #[test]
    fn test_empty_collection_yields_empty_options() {
        assert_eq!(derive_options(&[]), FilterOptions::default());
    }
}
