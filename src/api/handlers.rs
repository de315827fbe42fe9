//! API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::api::AppState;
use crate::error::Error;
use crate::types::MenuItem;

/// Welcome message served at the API root
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to Sweet Dreams Bakery API!".to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}

/// List all menu items in catalog order
pub async fn get_menu(State(state): State<AppState>) -> Json<Vec<MenuItem>> {
    Json(state.catalog.items().to_vec())
}

/// Look up a single menu item by id.
///
/// The path segment is taken as a raw string so a non-integer id surfaces as
/// a 422 validation error instead of axum's default 400 path rejection.
/// Negative and zero ids parse fine and produce a 404.
pub async fn get_menu_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<MenuItem>, ApiError> {
    let item_id: i64 = item_id
        .parse()
        .map_err(|_| ApiError::validation(format!("item_id must be an integer, got '{item_id}'")))?;

    let item = state.catalog.get(item_id)?;
    Ok(Json(item.clone()))
}

/// List menu items matching a category, case-insensitively.
///
/// Unknown categories are not rejected: they simply match nothing and yield
/// an empty list with a success status.
pub async fn get_menu_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<MenuItem>>, ApiError> {
    if category.is_empty() {
        return Err(ApiError::validation("category must not be empty"));
    }

    let items: Vec<MenuItem> = state
        .catalog
        .by_category(&category)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(items))
}

/// `/menu/category/` with a missing segment is a malformed request.
///
/// Axum path parameters never match an empty segment, so this route catches
/// the trailing-slash form explicitly.
pub async fn empty_category() -> ApiError {
    ApiError::validation("category must not be empty")
}

/// Client-facing error, rendered as a `{"detail": ...}` JSON body.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Validation(String),
}

impl ApiError {
    pub fn validation(detail: impl Into<String>) -> Self {
        ApiError::Validation(detail.into())
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::ItemNotFound(_) => ApiError::NotFound("Menu item not found".to_string()),
            Error::InvalidRequest(detail) => ApiError::Validation(detail),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, detail),
            ApiError::Validation(detail) => (StatusCode::UNPROCESSABLE_ENTITY, detail),
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}
