//! Free-text search over the fetched product collection.

use solara_core::Product;

/// Retain products containing `query` case-insensitively in their title,
/// description, category, material, color, or shape.
///
/// An empty or whitespace-only query yields no results, not the full
/// collection: an empty search box shows a prompt, never a result list.
pub(super) fn filter_products(products: &[Product], query: &str) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    products
        .iter()
        .filter(|product| matches(product, &needle))
        .cloned()
        .collect()
}

fn matches(product: &Product, needle: &str) -> bool {
    [
        &product.title,
        &product.description,
        &product.category,
        &product.material,
        &product.color,
        &product.shape,
    ]
    .into_iter()
    .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use solara_core::{Price, Product, ProductId};
    use rust_decimal::Decimal;

    use super::*;

    fn product(id: &str, title: &str, description: &str, color: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_owned(),
            description: description.to_owned(),
            price: Price::new(Decimal::from(100)),
            category: "Sol".to_owned(),
            images: Vec::new(),
            color: color.to_owned(),
            material: "Acetato".to_owned(),
            shape: "Redonda".to_owned(),
            gender: String::new(),
            flexibility: String::new(),
            featured: false,
            link: None,
        }
    }

    #[test]
    fn test_empty_query_yields_no_results() {
        let products = vec![product("p1", "Aviator", "", "Azul")];
        assert!(filter_products(&products, "").is_empty());
        assert!(filter_products(&products, "   ").is_empty());
    }

    #[test]
    fn test_matches_across_fields_case_insensitively() {
        let products = vec![
            product("p1", "Aviator Azul", "", "Negro"),
            product("p2", "Clubmaster", "tono azulado", "Carey"),
            product("p3", "Wayfarer", "", "AZUL"),
            product("p4", "Round", "", "Verde"),
        ];
        let hits = filter_products(&products, "azul");
        let ids: Vec<&str> = hits.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_matches_category_material_and_shape() {
        let products = vec![product("p1", "Aviator", "", "Negro")];
        assert_eq!(filter_products(&products, "sol").len(), 1);
        assert_eq!(filter_products(&products, "acetato").len(), 1);
        assert_eq!(filter_products(&products, "redonda").len(), 1);
        assert!(filter_products(&products, "cuadrada").is_empty());
    }
}
