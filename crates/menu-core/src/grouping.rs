//! Category grouping and ordering for the public menu
//!
//! Items are grouped by case-insensitive category. Groups whose key matches
//! the locale's preference list come first, in list order; every other group
//! follows, sorted alphabetically by label under the locale's collation.

use std::collections::HashMap;

use menu_shared::MenuLocale;
use tracing::debug;

use crate::collation::Collation;
use crate::domain::{category_key, category_label, CategoryGroup, MenuItem, MenuSection};

/// Groups `items` by category and orders the groups for display.
pub fn group_by_category(
    items: impl IntoIterator<Item = MenuItem>,
    locale: &MenuLocale,
) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for item in items {
        let label = category_label(item.category.as_deref(), &locale.fallback_category);
        let key = category_key(label);

        let index = match index_by_key.get(&key) {
            Some(&index) => index,
            None => {
                groups.push(CategoryGroup::new(label));
                index_by_key.insert(key, groups.len() - 1);
                groups.len() - 1
            }
        };
        groups[index].items.push(item);
    }

    order_groups(groups, locale)
}

/// Preferred groups in preference order, then the rest alphabetically.
fn order_groups(groups: Vec<CategoryGroup>, locale: &MenuLocale) -> Vec<CategoryGroup> {
    let preference: Vec<String> = locale
        .preferred_categories
        .iter()
        .map(|c| category_key(c))
        .collect();
    let rank = |group: &CategoryGroup| preference.iter().position(|key| *key == group.key);

    let (mut preferred, mut other): (Vec<_>, Vec<_>) =
        groups.into_iter().partition(|g| rank(g).is_some());

    preferred.sort_by_key(|g| rank(g));

    let collation = Collation::for_language(&locale.language);
    other.sort_by(|a, b| collation.compare(&a.label, &b.label));

    debug!(
        preferred = preferred.len(),
        other = other.len(),
        "ordered menu groups"
    );

    preferred.extend(other);
    preferred
}

/// Sections for the public menu page. An empty menu yields exactly one
/// placeholder section rather than no sections at all.
pub fn build_menu(
    items: impl IntoIterator<Item = MenuItem>,
    locale: &MenuLocale,
) -> Vec<MenuSection> {
    let groups = group_by_category(items, locale);
    if groups.is_empty() {
        return vec![MenuSection::Placeholder {
            message: locale.empty_menu.clone(),
        }];
    }
    groups.into_iter().map(MenuSection::Category).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Price;

    fn item(category: Option<&str>, title: &str, price: Price) -> MenuItem {
        MenuItem {
            id: Some(format!("id-{title}")),
            title: Some(title.to_string()),
            category: category.map(str::to_string),
            price: Some(price),
            ..Default::default()
        }
    }

    fn labels(groups: &[CategoryGroup]) -> Vec<&str> {
        groups.iter().map(|g| g.label.as_str()).collect()
    }

    #[test]
    fn test_preferred_before_other() {
        let items = vec![
            item(Some("dryck"), "Cola", Price::new("20")),
            item(Some("Mat"), "Burgare", Price::new(25)),
            item(Some("Snacks"), "Chips", Price::new(15)),
        ];

        let groups = group_by_category(items, &MenuLocale::default());

        assert_eq!(labels(&groups), vec!["Mat", "dryck", "Snacks"]);
    }

    #[test]
    fn test_preference_order_ignores_input_order() {
        let items = vec![
            item(Some("Dessert"), "Glass", Price::new(30)),
            item(Some("Bakverk"), "Bulle", Price::new(20)),
            item(Some("DRYCK"), "Kaffe", Price::new(25)),
            item(Some("mat"), "Pasta", Price::new(120)),
        ];

        let groups = group_by_category(items, &MenuLocale::default());

        assert_eq!(labels(&groups), vec!["mat", "DRYCK", "Dessert", "Bakverk"]);
    }

    #[test]
    fn test_case_insensitive_membership_keeps_first_label() {
        let items = vec![
            item(Some("Snacks"), "Chips", Price::new(15)),
            item(Some("snacks "), "Nötter", Price::new(20)),
            item(Some("SNACKS"), "Popcorn", Price::new(10)),
        ];

        let groups = group_by_category(items, &MenuLocale::default());

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, "Snacks");
        let titles: Vec<&str> = groups[0].items.iter().map(|i| i.title()).collect();
        assert_eq!(titles, vec!["Chips", "Nötter", "Popcorn"]);
    }

    #[test]
    fn test_every_item_in_exactly_one_group() {
        let items = vec![
            item(Some("Mat"), "A", Price::default()),
            item(None, "B", Price::default()),
            item(Some("Snacks"), "C", Price::default()),
            item(Some("mat"), "D", Price::default()),
            item(Some(""), "E", Price::default()),
        ];

        let groups = group_by_category(items.clone(), &MenuLocale::default());

        let total: usize = groups.iter().map(|g| g.items.len()).sum();
        assert_eq!(total, items.len());
        for item in &items {
            let holders = groups
                .iter()
                .filter(|g| g.items.iter().any(|i| i.title() == item.title()))
                .count();
            assert_eq!(holders, 1, "{} must be in one group", item.title());
        }
    }

    #[test]
    fn test_blank_category_is_other_and_sorted_alphabetically() {
        let items = vec![
            item(Some("Snacks"), "Chips", Price::new(15)),
            item(Some("  "), "Mystisk", Price::new(10)),
            item(Some("Bakverk"), "Bulle", Price::new(20)),
            item(Some("Dryck"), "Cola", Price::new(20)),
        ];

        let groups = group_by_category(items, &MenuLocale::default());

        assert_eq!(labels(&groups), vec!["Dryck", "Bakverk", "Other", "Snacks"]);
        assert_eq!(groups[2].items[0].title(), "Mystisk");
    }

    #[test]
    fn test_other_groups_use_swedish_collation() {
        let items = vec![
            item(Some("Öl"), "Lager", Price::default()),
            item(Some("Äggrätter"), "Omelett", Price::default()),
            item(Some("Sallad"), "Caesar", Price::default()),
        ];

        let groups = group_by_category(items, &MenuLocale::default());

        assert_eq!(labels(&groups), vec!["Sallad", "Äggrätter", "Öl"]);
    }

    #[test]
    fn test_configured_preference_list() {
        let locale = MenuLocale {
            preferred_categories: vec![" Varmrätt".into(), "Förrätt".into()],
            ..Default::default()
        };
        let items = vec![
            item(Some("Förrätt"), "Soppa", Price::default()),
            item(Some("Mat"), "Pasta", Price::default()),
            item(Some("varmrätt"), "Stek", Price::default()),
        ];

        let groups = group_by_category(items, &locale);

        assert_eq!(labels(&groups), vec!["varmrätt", "Förrätt", "Mat"]);
    }

    #[test]
    fn test_empty_menu_is_single_placeholder() {
        let sections = build_menu(Vec::new(), &MenuLocale::default());

        assert_eq!(
            sections,
            vec![MenuSection::Placeholder {
                message: "Inget i menyn än.".to_string()
            }]
        );
    }

    #[test]
    fn test_build_menu_wraps_groups() {
        let sections = build_menu(
            vec![item(Some("Mat"), "Burgare", Price::new(25))],
            &MenuLocale::default(),
        );

        assert!(matches!(&sections[..], [MenuSection::Category(g)] if g.label == "Mat"));
    }
}
