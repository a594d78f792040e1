mod handlers;
mod models;
mod router;
mod state;

pub use models::{ApiError, ErrorBody};
pub use router::app_router;
pub use state::AppState;

use std::sync::Arc;
use tracing::info;

use crate::catalog::CatalogIndex;

/// Start the HTTP server in front of a fully built catalog index.
///
/// The index is immutable by the time it gets here, so handlers only ever
/// perform read-only lookups against it.
pub async fn start_server(index: Arc<CatalogIndex>, host: &str, port: u16) -> anyhow::Result<()> {
    let app = app_router(AppState { index });
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "stats server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
