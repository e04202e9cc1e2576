//! Translation of filter criteria into SQL queries.
//!
//! Each recognized filter field maps to exactly one constraint builder; the
//! active constraints are ANDed together. Values are always bound, never
//! interpolated.

use rust_decimal::Decimal;
use sqlx::{Postgres, QueryBuilder};

use solara_core::FilterCriteria;

/// Column list shared by every product query.
pub(super) const SELECT_PRODUCTS: &str = "SELECT id, title, description, price, category, \
     images, color, material, shape, gender, flexibility, featured, link FROM products";

/// An active constraint derived from one filter field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Constraint {
    /// Case-insensitive pattern match on the category column.
    CategoryPattern(String),
    /// Exact match on an attribute column.
    Equals {
        column: &'static str,
        value: String,
    },
    /// Inclusive lower price bound.
    MinPrice(Decimal),
    /// Inclusive upper price bound.
    MaxPrice(Decimal),
}

/// Build the constraint list for a criteria set.
///
/// Fields left at their sentinel ("no constraint") state contribute nothing.
pub(super) fn constraints(criteria: &FilterCriteria) -> Vec<Constraint> {
    let mut out = Vec::new();
    if let Some(category) = criteria.category() {
        out.push(Constraint::CategoryPattern(category_pattern(category)));
    }
    for (column, value) in [
        ("color", criteria.color()),
        ("material", criteria.material()),
        ("shape", criteria.shape()),
        ("gender", criteria.gender()),
    ] {
        if let Some(value) = value {
            out.push(Constraint::Equals {
                column,
                value: value.to_owned(),
            });
        }
    }
    if let Some(min) = criteria.min_price() {
        out.push(Constraint::MinPrice(min));
    }
    if let Some(max) = criteria.max_price() {
        out.push(Constraint::MaxPrice(max));
    }
    out
}

/// Build the filtered product query.
///
/// No ORDER BY: listings render in retrieval order.
pub(super) fn build_products_query(criteria: &FilterCriteria) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(SELECT_PRODUCTS);
    for (i, constraint) in constraints(criteria).into_iter().enumerate() {
        qb.push(if i == 0 { " WHERE " } else { " AND " });
        match constraint {
            Constraint::CategoryPattern(pattern) => {
                qb.push("category ILIKE ");
                qb.push_bind(pattern);
            }
            Constraint::Equals { column, value } => {
                qb.push(column);
                qb.push(" = ");
                qb.push_bind(value);
            }
            Constraint::MinPrice(min) => {
                qb.push("price >= ");
                qb.push_bind(min);
            }
            Constraint::MaxPrice(max) => {
                qb.push("price <= ");
                qb.push_bind(max);
            }
        }
    }
    qb
}

/// Build the featured-products query.
pub(super) fn build_featured_query(limit: Option<i64>) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(SELECT_PRODUCTS);
    qb.push(" WHERE featured = TRUE");
    if let Some(limit) = limit {
        qb.push(" LIMIT ");
        qb.push_bind(limit);
    }
    qb
}

/// Build the products-by-category query.
pub(super) fn build_category_query(category: &str) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(SELECT_PRODUCTS);
    qb.push(" WHERE category ILIKE ");
    qb.push_bind(category_pattern(category));
    qb
}

/// Widen a category slug back into an ILIKE pattern.
///
/// Slugs replace whitespace with hyphens; the stored category values keep
/// their spaces, so hyphens widen back before the case-insensitive match.
pub(super) fn category_pattern(value: &str) -> String {
    value.replace('-', " ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use solara_core::FilterField;

    use super::*;

    #[test]
    fn test_no_criteria_means_no_where_clause() {
        let qb = build_products_query(&FilterCriteria::new());
        assert_eq!(qb.into_sql(), SELECT_PRODUCTS);
    }

    #[test]
    fn test_category_and_price_range() {
        let criteria = FilterCriteria::new()
            .with(FilterField::Category, "masculino")
            .with(FilterField::MinPrice, "100")
            .with(FilterField::MaxPrice, "500");
        let sql = build_products_query(&criteria).into_sql();
        assert_eq!(
            sql,
            format!(
                "{SELECT_PRODUCTS} WHERE category ILIKE $1 AND price >= $2 AND price <= $3"
            )
        );
    }

    #[test]
    fn test_attribute_constraints_are_exact_matches() {
        let criteria = FilterCriteria::new()
            .with(FilterField::Color, "Negro")
            .with(FilterField::Shape, "Redonda");
        let sql = build_products_query(&criteria).into_sql();
        assert_eq!(
            sql,
            format!("{SELECT_PRODUCTS} WHERE color = $1 AND shape = $2")
        );
    }

    #[test]
    fn test_constraint_list_skips_sentinels() {
        let criteria = FilterCriteria::new()
            .with(FilterField::Category, "all")
            .with(FilterField::Gender, "femenino")
            .with(FilterField::MinPrice, "not-a-number");
        assert_eq!(
            constraints(&criteria),
            vec![Constraint::Equals {
                column: "gender",
                value: "femenino".to_owned()
            }]
        );
    }

    #[test]
    fn test_category_pattern_widens_slug_hyphens() {
        assert_eq!(category_pattern("de-sol"), "de sol");
        assert_eq!(category_pattern("masculino"), "masculino");
    }

    #[test]
    fn test_featured_query() {
        assert_eq!(
            build_featured_query(None).into_sql(),
            format!("{SELECT_PRODUCTS} WHERE featured = TRUE")
        );
        assert_eq!(
            build_featured_query(Some(4)).into_sql(),
            format!("{SELECT_PRODUCTS} WHERE featured = TRUE LIMIT $1")
        );
    }
}
