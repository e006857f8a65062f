use std::sync::Arc;

use menu_shared::{config::AppConfig, MenuLocale};

use crate::source::MenuSource;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn MenuSource>,
    pub locale: Arc<MenuLocale>,
    pub assets_url: Arc<str>,
}

impl AppState {
    pub fn new(source: Arc<dyn MenuSource>, config: &AppConfig) -> Self {
        Self {
            source,
            locale: Arc::new(config.locale.clone()),
            assets_url: Arc::from(config.backend.assets_url.as_str()),
        }
    }
}
