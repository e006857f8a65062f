//! HTML rendering
//!
//! Pure functions from typed records to HTML text. Every user-supplied value
//! goes through [`escape_html`] before it reaches the output.

pub mod admin;
pub mod escape;
pub mod menu;

pub use admin::AdminListRenderer;
pub use escape::escape_html;
pub use menu::{MenuPage, MenuRenderer};

/// Joins an asset base URL with a relative image path.
pub fn asset_url(assets_url: &str, image_url: &str) -> String {
    format!("{}{}", assets_url, image_url)
}
