use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};

use crate::domain::{Entry, EntrySummary, StatBlock};

use super::models::ApiError;
use super::state::AppState;

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    "OK"
}

pub async fn list_editions(State(state): State<AppState>) -> Json<Vec<String>> {
    let editions = state.index.editions().into_iter().map(str::to_string).collect();
    Json(editions)
}

pub async fn list_books(
    State(state): State<AppState>,
    Path(edition): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    let books = state
        .index
        .books(&edition)?
        .into_iter()
        .map(str::to_string)
        .collect();
    Ok(Json(books))
}

pub async fn list_entries(
    State(state): State<AppState>,
    Path(edition): Path<String>,
) -> Result<Json<Vec<EntrySummary>>, ApiError> {
    Ok(Json(state.index.summaries(&edition, None)?))
}

pub async fn list_book_entries(
    State(state): State<AppState>,
    Path((edition, book)): Path<(String, String)>,
) -> Result<Json<Vec<EntrySummary>>, ApiError> {
    Ok(Json(state.index.summaries(&edition, Some(&book))?))
}

pub async fn get_entry(
    State(state): State<AppState>,
    Path((edition, name)): Path<(String, String)>,
) -> Result<Json<Entry>, ApiError> {
    Ok(Json(state.index.get(&edition, None, &name)?.clone()))
}

pub async fn get_base_stats(
    State(state): State<AppState>,
    Path((edition, name)): Path<(String, String)>,
) -> Result<Json<StatBlock>, ApiError> {
    Ok(Json(state.index.base_stats(&edition, None, &name)?.clone()))
}

pub async fn get_growth_rates(
    State(state): State<AppState>,
    Path((edition, name)): Path<(String, String)>,
) -> Result<Json<StatBlock>, ApiError> {
    Ok(Json(state.index.growth_rates(&edition, None, &name)?.clone()))
}

pub async fn get_book_entry(
    State(state): State<AppState>,
    Path((edition, book, name)): Path<(String, String, String)>,
) -> Result<Json<Entry>, ApiError> {
    Ok(Json(state.index.get(&edition, Some(&book), &name)?.clone()))
}

pub async fn get_book_base_stats(
    State(state): State<AppState>,
    Path((edition, book, name)): Path<(String, String, String)>,
) -> Result<Json<StatBlock>, ApiError> {
    Ok(Json(
        state.index.base_stats(&edition, Some(&book), &name)?.clone(),
    ))
}

pub async fn get_book_growth_rates(
    State(state): State<AppState>,
    Path((edition, book, name)): Path<(String, String, String)>,
) -> Result<Json<StatBlock>, ApiError> {
    Ok(Json(
        state
            .index
            .growth_rates(&edition, Some(&book), &name)?
            .clone(),
    ))
}
