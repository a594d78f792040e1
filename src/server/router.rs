use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use super::handlers::{
    get_base_stats, get_book_base_stats, get_book_entry, get_book_growth_rates, get_entry,
    get_growth_rates, health, list_book_entries, list_books, list_editions, list_entries,
};
use super::state::AppState;

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/editions", get(list_editions))
        .route("/editions/:edition/entries", get(list_entries))
        .route("/editions/:edition/entries/:name", get(get_entry))
        .route("/editions/:edition/entries/:name/base", get(get_base_stats))
        .route(
            "/editions/:edition/entries/:name/growth",
            get(get_growth_rates),
        )
        .route("/editions/:edition/books", get(list_books))
        .route(
            "/editions/:edition/books/:book/entries",
            get(list_book_entries),
        )
        .route(
            "/editions/:edition/books/:book/entries/:name",
            get(get_book_entry),
        )
        .route(
            "/editions/:edition/books/:book/entries/:name/base",
            get(get_book_base_stats),
        )
        .route(
            "/editions/:edition/books/:book/entries/:name/growth",
            get(get_book_growth_rates),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
