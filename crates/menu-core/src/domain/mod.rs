//! Domain entities

pub mod category;
pub mod menu_item;
pub mod new_item;
pub mod price;

pub use category::{category_key, category_label, CategoryGroup, MenuSection};
pub use menu_item::MenuItem;
pub use new_item::NewMenuItem;
pub use price::Price;
