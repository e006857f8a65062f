//! Input for creating a menu item

use std::borrow::Cow;

use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

/// Text fields of a new menu item, validated before they are sent.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct NewMenuItem {
    #[validate(length(min = 1, max = 200, message = "Titel måste anges"))]
    pub title: String,

    #[validate(length(max = 2000, message = "Beskrivningen är för lång"))]
    pub description: String,

    #[validate(range(min = 0.0, message = "Priset kan inte vara negativt"))]
    pub price: Option<f64>,

    pub category: String,
}

impl NewMenuItem {
    /// Trims the text fields and parses `price`. A blank price is left out; any
    /// other value must be a finite number.
    pub fn new(
        title: &str,
        description: &str,
        price: &str,
        category: &str,
    ) -> Result<Self, ValidationErrors> {
        let price = match price.trim() {
            "" => None,
            raw => match raw.parse::<f64>() {
                Ok(n) if n.is_finite() => Some(n),
                _ => {
                    let mut errors = ValidationErrors::new();
                    let mut error = ValidationError::new("price");
                    error.message = Some(Cow::from("Priset måste vara ett tal"));
                    errors.add("price", error);
                    return Err(errors);
                }
            },
        };

        let item = Self {
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            price,
            category: category.trim().to_string(),
        };

        item.validate()?;
        Ok(item)
    }
}
