use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({"status": "ok", "version": env!("CARGO_PKG_VERSION")})),
    )
}

/// GET /ready - Readiness probe
///
/// Ready once the translations for the configured default language are loaded.
pub async fn ready(State(app_state): State<AppState>) -> impl IntoResponse {
    let lang = app_state.config.site.default_language.as_str();

    if rust_i18n::available_locales!()
        .iter()
        .any(|locale| *locale == lang)
    {
        return (StatusCode::OK, Json(json!({"status": "ready"})));
    }

    tracing::error!("Readiness check failed: no translations for `{lang}`");

    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({
            "status": "not_ready",
            "reason": "missing_translations"
        })),
    )
}
