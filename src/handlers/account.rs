//! Account CRUD handlers: create, list, read, update, delete.
//!
//! Create and update take the raw body rather than a `Json<T>` extractor: the
//! content-type guard must answer 415 with its own message before any body
//! handling, and update must resolve the id (404) before parsing the payload.

use crate::error::AppError;
use crate::model::NewAccount;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde_json::{Map, Value};

const JSON_MEDIA_TYPE: &str = "application/json";

/// Exact-match content-type guard. Absent or mismatched headers are a 415.
fn check_content_type(headers: &HeaderMap, media_type: &str) -> Result<(), AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    match content_type {
        Some(ct) if ct == media_type => Ok(()),
        other => {
            tracing::error!(content_type = ?other, "invalid content type");
            Err(AppError::UnsupportedMediaType(format!(
                "Content-Type must be {}",
                media_type
            )))
        }
    }
}

fn body_to_map(body: &Bytes) -> Result<Map<String, Value>, AppError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("invalid JSON body: {}", e)))?;
    match value {
        Value::Object(m) if !m.is_empty() => Ok(m),
        Value::Object(_) | Value::Null => Err(AppError::BadRequest("no data provided".into())),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Account with id [{}] could not be found.", id))
}

pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl axum::response::IntoResponse, AppError> {
    tracing::info!("request to create an account");
    check_content_type(&headers, JSON_MEDIA_TYPE)?;
    let new: NewAccount = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("invalid account payload: {}", e)))?;
    let account = state.store.create(new).await?;
    tracing::info!(id = account.id, "account created");
    let location = format!("/accounts/{}", account.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(account),
    ))
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    tracing::info!("request to list all accounts");
    let accounts = state.store.all().await?;
    tracing::info!(count = accounts.len(), "returning accounts");
    Ok((StatusCode::OK, Json(accounts)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    tracing::info!(id, "request to read an account");
    let account = state.store.find(id).await?.ok_or_else(|| not_found(id))?;
    Ok((StatusCode::OK, Json(account)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Bytes,
) -> Result<impl axum::response::IntoResponse, AppError> {
    tracing::info!(id, "request to update an account");
    let mut account = state.store.find(id).await?.ok_or_else(|| {
        tracing::error!(id, "account not found");
        not_found(id)
    })?;
    let fields = body_to_map(&body)?;
    account.apply_update(&fields)?;
    let account = state.store.update(&account).await?;
    tracing::info!(id, "account updated");
    Ok((StatusCode::OK, Json(account)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    tracing::info!(id, "request to delete an account");
    if state.store.find(id).await?.is_none() {
        tracing::error!(id, "account not found");
        return Err(not_found(id));
    }
    state.store.delete(id).await?;
    tracing::info!(id, "account deleted");
    Ok(StatusCode::NO_CONTENT)
}
