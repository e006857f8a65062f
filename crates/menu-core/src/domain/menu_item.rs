//! Menu item as served by the backend

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::price::Price;

/// One sellable menu entry. Read-only here; the backend owns it.
///
/// Text fields accept numbers and booleans as their text form, so one odd
/// record does not fail the whole menu. `price` is `None` only when the field
/// is absent; an explicit `null` is kept as a value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "present_price",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Price>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub image_alt: Option<String>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

fn present_price<'de, D>(deserializer: D) -> Result<Option<Price>, D::Error>
where
    D: Deserializer<'de>,
{
    Price::deserialize(deserializer).map(Some)
}

impl MenuItem {
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Relative image path, if one is set and non-empty.
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|u| !u.is_empty())
    }

    /// Public menu price, e.g. `"25 kr"`; empty when absent or not a number.
    pub fn price_display(&self, currency_suffix: &str) -> String {
        self.price
            .as_ref()
            .map(|p| p.display(currency_suffix))
            .unwrap_or_default()
    }

    /// Admin list price: the number, the raw text, or empty when absent.
    pub fn price_text(&self) -> String {
        self.price
            .as_ref()
            .map(Price::display_or_raw)
            .unwrap_or_default()
    }

    /// Alt text for the image, falling back to the title.
    pub fn image_alt(&self) -> &str {
        self.image_alt
            .as_deref()
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| self.title())
    }
}
