//! Categories derived from raw product category values.
//!
//! The catalog does not store categories as rows; they are the distinct
//! category values observed across products, deduplicated case-insensitively
//! with the first-seen casing kept for display.

use serde::{Deserialize, Serialize};

/// A derived product category with a URL-safe slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Display name, original casing preserved from first occurrence.
    pub name: String,
    /// Stable slug: lowercased, whitespace collapsed to hyphens.
    pub slug: String,
}

impl Category {
    /// Derive the category list from raw category values, in first-seen order.
    ///
    /// Values normalizing to the same slug collapse into a single category
    /// keeping whichever casing was encountered first. Empty values are
    /// skipped.
    #[must_use]
    pub fn derive(raw: impl IntoIterator<Item = String>) -> Vec<Self> {
        let mut seen: Vec<Self> = Vec::new();
        for value in raw {
            let name = value.trim();
            if name.is_empty() {
                continue;
            }
            let slug = slugify(name);
            if seen.iter().any(|c| c.slug == slug) {
                continue;
            }
            seen.push(Self {
                name: name.to_owned(),
                slug,
            });
        }
        seen
    }
}

/// Normalize a display name into a URL-safe slug.
///
/// Lowercases and collapses runs of whitespace into single hyphens. This is
/// the one canonical slug rule; every call site uses it.
#[must_use]
pub fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Deduplicate values case-insensitively, preserving first-seen casing.
///
/// Used to build filter option lists (colors, materials, shapes). Values are
/// trimmed; empty values are dropped.
#[must_use]
pub fn dedupe_preserving_first(values: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    let mut out: Vec<String> = Vec::new();
    for value in values {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        let key = trimmed.to_lowercase();
        if keys.contains(&key) {
            continue;
        }
        keys.push(key);
        out.push(trimmed.to_owned());
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Sol"), "sol");
        assert_eq!(slugify("  De   Sol  "), "de-sol");
        assert_eq!(slugify("VISTA"), "vista");
    }

    #[test]
    fn test_derive_dedupes_case_insensitively() {
        let raw = ["Sol", "sol", "Vista"].map(String::from);
        let categories = Category::derive(raw);
        assert_eq!(
            categories,
            vec![
                Category {
                    name: "Sol".to_owned(),
                    slug: "sol".to_owned()
                },
                Category {
                    name: "Vista".to_owned(),
                    slug: "vista".to_owned()
                },
            ]
        );
    }

    #[test]
    fn test_derive_collapses_slug_collisions_keeping_first() {
        let raw = ["De Sol", "de  sol", "DE SOL"].map(String::from);
        let categories = Category::derive(raw);
        assert_eq!(categories.len(), 1);
        let first = categories.first().unwrap();
        assert_eq!(first.name, "De Sol");
        assert_eq!(first.slug, "de-sol");
    }

    #[test]
    fn test_derive_skips_empty_values() {
        let raw = ["", "  ", "Sol"].map(String::from);
        assert_eq!(Category::derive(raw).len(), 1);
    }

    #[test]
    fn test_dedupe_preserving_first() {
        let values = ["Negro", "negro ", "Carey", "", "NEGRO"].map(String::from);
        assert_eq!(dedupe_preserving_first(values), vec!["Negro", "Carey"]);
    }
}
