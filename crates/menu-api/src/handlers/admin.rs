//! Admin list handler

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap},
    response::Html,
};
use menu_client::Credential;
use menu_core::render::AdminListRenderer;
use tracing::error;

use crate::{error::ApiError, state::AppState};

/// GET /admin/items - the admin list, fetched with the caller's bearer token.
pub async fn admin_items(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Html<String>, ApiError> {
    let credential = bearer_credential(&headers)?;
    let renderer = AdminListRenderer::new(
        &state.locale.admin,
        &state.locale.currency_suffix,
        &state.assets_url,
    );

    match state.source.load_menu(Some(credential)).await {
        Ok(items) => Ok(Html(renderer.render(&items))),
        Err(e) if matches!(e.status().map(|s| s.as_u16()), Some(401 | 403)) => {
            Err(ApiError::Unauthorized(e.to_string()))
        }
        Err(e) => {
            error!(error = %e, "Admin list fetch failed");
            Ok(Html(renderer.render_failed()))
        }
    }
}

fn bearer_credential(headers: &HeaderMap) -> Result<Credential, ApiError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("missing bearer token".to_string()))?
        .to_str()
        .map_err(|_| ApiError::BadRequest("malformed Authorization header".to_string()))?;

    Credential::from_authorization(value)
        .ok_or_else(|| ApiError::Unauthorized("missing bearer token".to_string()))
}
