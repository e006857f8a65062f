//! Application-wide constants

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000/api";
pub const DEFAULT_ASSETS_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

pub const DEFAULT_LANGUAGE: &str = "sv";
pub const DEFAULT_SITE_TITLE: &str = "Meny";
pub const DEFAULT_PREFERRED_CATEGORIES: [&str; 3] = ["Mat", "Dryck", "Dessert"];
pub const DEFAULT_FALLBACK_CATEGORY: &str = "Other";
pub const DEFAULT_CURRENCY_SUFFIX: &str = "kr";

pub const EMPTY_MENU_MESSAGE: &str = "Inget i menyn än.";
pub const MENU_FETCH_FAILED_MESSAGE: &str = "Fel vid hämtning av menyn.";
pub const MENU_FETCH_FAILED_NOTICE: &str = "Fel vid hämtning av menyn";

pub const ADMIN_EMPTY_LIST_MESSAGE: &str = "Inga artiklar ännu.";
pub const ADMIN_LIST_FAILED_MESSAGE: &str = "Kunde inte hämta listan.";
pub const ADMIN_EDIT_PRICE_LABEL: &str = "Ändra pris";
pub const ADMIN_REPLACE_IMAGE_LABEL: &str = "Byt bild";
pub const ADMIN_DELETE_LABEL: &str = "Ta bort";
pub const ADMIN_SIGNED_IN: &str = "Inloggad.";
pub const ADMIN_SIGNED_OUT: &str = "Inte inloggad.";
pub const ADMIN_DELETE_CONFIRM: &str = "Ta bort artikeln?";
pub const ADMIN_DELETE_FAILED: &str = "Kunde inte ta bort";
pub const ADMIN_UPDATE_FAILED: &str = "Kunde inte uppdatera";
pub const ADMIN_IMAGE_FAILED: &str = "Kunde inte uppdatera bild";
