use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::provider::{Detection, SentenceBreakdown, TranslationResult};
use crate::state::AppState;
use crate::validate::{required_field, required_param};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/api/health", get(health_check))
        // Translation provider proxy routes
        .route("/api/language_code/:scope", get(language_codes))
        .route("/api/translate", post(translate))
        .route("/api/detect", post(detect))
        .route("/api/break_sentence", post(break_sentence))
        .route("/api/transliterate", post(transliterate))
        .route("/api/alt_translations", post(alt_translations))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// GET /api/language_code/{scope} - language codes for a scope
/// (translation, transliteration or dictionary), passed through unchanged.
async fn language_codes(
    State(state): State<AppState>,
    Path(scope): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let scope = required_param(&scope, "scope")?;
    let codes = state.provider.language_codes(scope).await?;
    Ok(Json(codes))
}

/// POST /api/translate - translate `text` into `to`, detecting the source
/// language along the way.
async fn translate(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Vec<TranslationResult>>, ApiError> {
    let text = required_field(&payload, "text", "text")?;
    let to = required_field(&payload, "to", "language code")?;
    let result = state.provider.translate(&text, &to).await?;
    Ok(Json(result))
}

/// POST /api/detect - detect the language of `text`.
async fn detect(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Vec<Detection>>, ApiError> {
    let text = required_field(&payload, "text", "text")?;
    let result = state.provider.detect(&text).await?;
    Ok(Json(result))
}

/// POST /api/break_sentence - sentence boundary positions for `text`.
async fn break_sentence(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Vec<SentenceBreakdown>>, ApiError> {
    let text = required_field(&payload, "text", "text")?;
    let result = state.provider.break_sentence(&text).await?;
    Ok(Json(result))
}

/// POST /api/transliterate - phonetic conversion of `text` between scripts,
/// passed through unchanged.
async fn transliterate(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let text = required_field(&payload, "text", "text")?;
    let language = required_field(&payload, "language", "language code")?;
    let from_script = required_field(&payload, "fromScript", "language script")?;
    let to_script = required_field(&payload, "toScript", "language script")?;
    let result = state
        .provider
        .transliterate(&text, &language, &from_script, &to_script)
        .await?;
    Ok(Json(result))
}

/// POST /api/alt_translations - dictionary lookup: alternate translations of
/// `text` from `from` into `to`.
async fn alt_translations(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let text = required_field(&payload, "text", "text")?;
    let from = required_field(&payload, "from", "language code")?;
    let to = required_field(&payload, "to", "language code")?;
    let result = state.provider.alternate_translations(&text, &from, &to).await?;
    Ok(Json(result))
}
