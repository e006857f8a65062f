//! Public menu handlers

use axum::{extract::State, response::Html};
use menu_core::render::{MenuPage, MenuRenderer};
use tracing::error;

use crate::state::AppState;

/// GET / - the full menu document.
pub async fn menu_page(State(state): State<AppState>) -> Html<String> {
    let page = load_page(&state).await;
    Html(MenuRenderer::new(&state.locale, &state.assets_url).render_page(&page))
}

/// GET /menu/fragment - only the grouped sections, for embedding.
pub async fn menu_fragment(State(state): State<AppState>) -> Html<String> {
    let page = load_page(&state).await;
    Html(MenuRenderer::new(&state.locale, &state.assets_url).render_sections(&page.sections))
}

/// A failed fetch is logged and rendered as the static error placeholder.
async fn load_page(state: &AppState) -> MenuPage {
    match state.source.load_menu(None).await {
        Ok(items) => MenuPage::loaded(items, &state.locale),
        Err(e) => {
            error!(error = %e, "Menu fetch failed");
            MenuPage::failed(&state.locale)
        }
    }
}
