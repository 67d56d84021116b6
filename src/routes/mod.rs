// src/routes/mod.rs
pub mod chat;
pub mod health;

use std::any::Any;
use std::path::Path;

use crate::error::AppError;
use crate::state::SharedState;
use axum::{
    Router,
    extract::Request,
    http::Uri,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{any, get},
};
use chat::chat_handler;
use health::health_handler;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

pub const ENTRY_DOCUMENT: &str = "index.html";

/// Chat gateway and health probe under `/api`, static assets everywhere else.
///
/// Unknown paths fall back to the entry document so client-side routing works.
/// `/api/chat` sets its own CORS headers, including on `OPTIONS`, so the
/// host-level CORS layer only wraps the rest.
pub fn create_router(static_dir: &Path) -> Router<SharedState> {
    let entry = ServeFile::new(static_dir.join(ENTRY_DOCUMENT));

    let cors_layer = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);

    let site = Router::new()
        .route("/api/health", get(health_handler))
        .fallback_service(ServeDir::new(static_dir).fallback(entry))
        .layer(middleware::from_fn(hide_dotfiles))
        .layer(cors_layer);

    Router::new()
        .route("/api/chat", any(chat_handler))
        .merge(site)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
}

/// Paths with a hidden segment (`.env`, `.git/...`) get the entry document
/// instead of the file.
async fn hide_dotfiles(mut req: Request, next: Next) -> Response {
    if is_hidden_path(req.uri().path()) {
        debug!(path = %req.uri().path(), "refusing to serve hidden path");
        *req.uri_mut() = Uri::from_static("/");
    }
    next.run(req).await
}

fn is_hidden_path(path: &str) -> bool {
    path.split('/').any(|segment| {
        segment.starts_with('.') || segment.to_ascii_lowercase().starts_with("%2e")
    })
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| err.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic".to_string());
    error!(%detail, "request handler panicked");
    AppError::Internal(detail).into_response()
}
