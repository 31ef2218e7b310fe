//! HTTP layer - Routes, handlers and pages

pub mod handlers;
pub mod pages;

use crate::infrastructure::{Config, EntryStore};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EntryStore>,
    pub site_name: String,
    pub max_title_len: usize,
}

impl AppState {
    pub fn new(store: Arc<dyn EntryStore>, config: &Config) -> Self {
        AppState {
            store,
            site_name: config.site_name.clone(),
            max_title_len: config.max_title_len,
        }
    }
}

/// Build the wiki router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/wiki/:title/", get(handlers::entry))
        .route(
            "/wiki/:title/edit",
            get(handlers::edit_form).post(handlers::edit_submit),
        )
        .route("/add/", get(handlers::add_form).post(handlers::add_submit))
        .route("/random/", get(handlers::random))
        .fallback(handlers::not_found)
        .with_state(state)
}

/// Serve the wiki until the process is stopped.
pub async fn serve(state: AppState, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await
}
