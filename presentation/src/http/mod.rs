//! HTTP API
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | `GET` | `/` | `{"message": ...}` |
//! | `GET` | `/health` | `{"status": "healthy"}` |
//! | `POST` | `/api/research` | `ResearchReport` JSON, or `{"detail": ...}` on failure |

mod error;
mod routes;

pub use error::ApiError;
pub use routes::{AppState, ResearchRequest, router};

use tokio::net::TcpListener;
use tracing::info;

/// Bind `addr` and serve the API until the process exits.
pub async fn serve(addr: &str, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await
}
