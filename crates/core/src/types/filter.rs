//! Recognized product filter criteria.
//!
//! Filter state arrives as loosely-typed query parameters. Rather than
//! branching on arbitrary string keys, the recognized fields are an explicit
//! enum; anything else is ignored by design. Sentinel values ("all", empty
//! strings, unparseable numbers) mean "no constraint for this field".

use rust_decimal::Decimal;

/// The filter fields the catalog query translator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    /// Case-insensitive pattern match on the category value.
    Category,
    Color,
    Material,
    Shape,
    Gender,
    /// Inclusive lower price bound.
    MinPrice,
    /// Inclusive upper price bound.
    MaxPrice,
}

impl FilterField {
    /// Parse a query-parameter key into a recognized field.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "category" => Some(Self::Category),
            "color" => Some(Self::Color),
            "material" => Some(Self::Material),
            "shape" => Some(Self::Shape),
            "gender" => Some(Self::Gender),
            "min_price" => Some(Self::MinPrice),
            "max_price" => Some(Self::MaxPrice),
            _ => None,
        }
    }

    /// The canonical query-parameter key for this field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Color => "color",
            Self::Material => "material",
            Self::Shape => "shape",
            Self::Gender => "gender",
            Self::MinPrice => "min_price",
            Self::MaxPrice => "max_price",
        }
    }
}

/// A normalized set of active filter constraints.
///
/// `None` for a field means no constraint. All active constraints combine
/// with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    category: Option<String>,
    color: Option<String>,
    material: Option<String>,
    shape: Option<String>,
    gender: Option<String>,
    min_price: Option<Decimal>,
    max_price: Option<Decimal>,
}

impl FilterCriteria {
    /// An empty criteria set (no constraints).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            category: None,
            color: None,
            material: None,
            shape: None,
            gender: None,
            min_price: None,
            max_price: None,
        }
    }

    /// Build criteria from raw key/value pairs (e.g. URL query parameters).
    ///
    /// Unrecognized keys are ignored; recognized keys go through sentinel
    /// normalization.
    #[must_use]
    pub fn from_params<'a>(params: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut criteria = Self::new();
        for (key, value) in params {
            if let Some(field) = FilterField::parse(key) {
                criteria.set(field, value);
            }
        }
        criteria
    }

    /// Set one field from a raw string value.
    ///
    /// Choice fields treat empty and `"all"` (case-insensitive) as no
    /// constraint. Price fields treat anything that does not parse as a
    /// number as no constraint, never as zero.
    pub fn set(&mut self, field: FilterField, raw: &str) {
        match field {
            FilterField::Category => self.category = normalize_choice(raw),
            FilterField::Color => self.color = normalize_choice(raw),
            FilterField::Material => self.material = normalize_choice(raw),
            FilterField::Shape => self.shape = normalize_choice(raw),
            FilterField::Gender => self.gender = normalize_choice(raw),
            FilterField::MinPrice => self.min_price = normalize_price(raw),
            FilterField::MaxPrice => self.max_price = normalize_price(raw),
        }
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, field: FilterField, raw: &str) -> Self {
        self.set(field, raw);
        self
    }

    /// True when no field constrains the result.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.color.is_none()
            && self.material.is_none()
            && self.shape.is_none()
            && self.gender.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    #[must_use]
    pub fn material(&self) -> Option<&str> {
        self.material.as_deref()
    }

    #[must_use]
    pub fn shape(&self) -> Option<&str> {
        self.shape.as_deref()
    }

    #[must_use]
    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }

    #[must_use]
    pub const fn min_price(&self) -> Option<Decimal> {
        self.min_price
    }

    #[must_use]
    pub const fn max_price(&self) -> Option<Decimal> {
        self.max_price
    }
}

/// Normalize a choice value; empty and "all" mean no constraint.
fn normalize_choice(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Normalize a price bound; unparseable values mean no constraint, not zero.
fn normalize_price(raw: &str) -> Option<Decimal> {
    raw.trim().parse::<Decimal>().ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_values_impose_no_constraint() {
        let criteria = FilterCriteria::new()
            .with(FilterField::Category, "all")
            .with(FilterField::Color, "  ")
            .with(FilterField::Gender, "ALL");
        assert!(criteria.is_empty());
    }

    #[test]
    fn test_non_numeric_price_is_no_constraint() {
        let criteria = FilterCriteria::new()
            .with(FilterField::MinPrice, "cheap")
            .with(FilterField::MaxPrice, "");
        assert!(criteria.min_price().is_none());
        assert!(criteria.max_price().is_none());
    }

    #[test]
    fn test_prices_parse_as_decimals() {
        let criteria = FilterCriteria::new()
            .with(FilterField::MinPrice, "100")
            .with(FilterField::MaxPrice, "500.50");
        assert_eq!(criteria.min_price(), Some(Decimal::from(100)));
        assert_eq!(criteria.max_price(), Some(Decimal::new(50050, 2)));
    }

    #[test]
    fn test_from_params_ignores_unrecognized_keys() {
        let criteria = FilterCriteria::from_params([
            ("category", "masculino"),
            ("utm_source", "newsletter"),
            ("drop_table", "products"),
        ]);
        assert_eq!(criteria.category(), Some("masculino"));
        assert_eq!(
            criteria,
            FilterCriteria::new().with(FilterField::Category, "masculino")
        );
    }

    #[test]
    fn test_values_are_trimmed() {
        let criteria = FilterCriteria::new().with(FilterField::Material, " Acetato ");
        assert_eq!(criteria.material(), Some("Acetato"));
    }
}
