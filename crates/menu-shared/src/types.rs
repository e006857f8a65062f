//! Locale labels and display settings

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Language-specific strings and category preferences for the menu pages.
///
/// Every field has a default, so a config file only needs to name what it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuLocale {
    /// BCP 47 language tag; also selects the collation used for category names.
    pub language: String,
    pub site_title: String,
    /// Categories rendered first, in this order. Matched trimmed and case-insensitively.
    pub preferred_categories: Vec<String>,
    /// Label for items whose category is missing or blank.
    pub fallback_category: String,
    pub currency_suffix: String,
    pub empty_menu: String,
    pub fetch_failed: String,
    pub fetch_failed_notice: String,
    pub admin: AdminLabels,
}

impl Default for MenuLocale {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            site_title: DEFAULT_SITE_TITLE.to_string(),
            preferred_categories: DEFAULT_PREFERRED_CATEGORIES
                .iter()
                .map(|c| c.to_string())
                .collect(),
            fallback_category: DEFAULT_FALLBACK_CATEGORY.to_string(),
            currency_suffix: DEFAULT_CURRENCY_SUFFIX.to_string(),
            empty_menu: EMPTY_MENU_MESSAGE.to_string(),
            fetch_failed: MENU_FETCH_FAILED_MESSAGE.to_string(),
            fetch_failed_notice: MENU_FETCH_FAILED_NOTICE.to_string(),
            admin: AdminLabels::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminLabels {
    pub empty_list: String,
    pub list_failed: String,
    pub edit_price: String,
    pub replace_image: String,
    pub delete: String,
    pub signed_in: String,
    pub signed_out: String,
    pub delete_confirm: String,
    pub delete_failed: String,
    pub update_failed: String,
    pub image_failed: String,
}

impl Default for AdminLabels {
    fn default() -> Self {
        Self {
            empty_list: ADMIN_EMPTY_LIST_MESSAGE.to_string(),
            list_failed: ADMIN_LIST_FAILED_MESSAGE.to_string(),
            edit_price: ADMIN_EDIT_PRICE_LABEL.to_string(),
            replace_image: ADMIN_REPLACE_IMAGE_LABEL.to_string(),
            delete: ADMIN_DELETE_LABEL.to_string(),
            signed_in: ADMIN_SIGNED_IN.to_string(),
            signed_out: ADMIN_SIGNED_OUT.to_string(),
            delete_confirm: ADMIN_DELETE_CONFIRM.to_string(),
            delete_failed: ADMIN_DELETE_FAILED.to_string(),
            update_failed: ADMIN_UPDATE_FAILED.to_string(),
            image_failed: ADMIN_IMAGE_FAILED.to_string(),
        }
    }
}
