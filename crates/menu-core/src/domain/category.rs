//! Category groups derived from a flat item list

use super::menu_item::MenuItem;

/// Display label for a raw category: trimmed, or `fallback` when missing or blank.
pub fn category_label<'a>(category: Option<&'a str>, fallback: &'a str) -> &'a str {
    match category.map(str::trim) {
        Some(label) if !label.is_empty() => label,
        _ => fallback,
    }
}

/// Grouping key: trimmed and lowercased. Two categories are the same group
/// exactly when their keys are equal.
pub fn category_key(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Items sharing a case-insensitive category, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub key: String,
    /// Casing of the first item seen with this key.
    pub label: String,
    pub items: Vec<MenuItem>,
}

impl CategoryGroup {
    pub fn new(label: &str) -> Self {
        Self {
            key: category_key(label),
            label: label.to_string(),
            items: Vec::new(),
        }
    }
}

/// One renderable block of the public menu.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuSection {
    Category(CategoryGroup),
    /// Shown instead of groups when there is nothing to list.
    Placeholder { message: String },
}
