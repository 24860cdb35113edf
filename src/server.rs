//! HTTP API: a JSON listing, a spreadsheet download and two liveness routes.
//!
//! Every data request triggers its own fetch and parse; handlers share only
//! the read-only [`AppState`].

use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tracing::{error, info};

use crate::config::{BindConfig, Config};
use crate::error::{CrawlError, Result};
use crate::export::{self, XLSX_CONTENT_TYPE, XLSX_FILENAME};
use crate::fetcher::Fetcher;
use crate::models::ProductList;

pub struct AppState {
    pub fetcher: Fetcher,
    pub site_origin: String,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(AppState {
            fetcher: Fetcher::new(config)?,
            site_origin: config.site_origin.clone(),
        })
    }
}

/// Build the axum Router with all endpoints.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/productos", get(productos))
        .route("/excel", get(excel))
        .with_state(state)
}

pub async fn bind(bind: &BindConfig) -> std::io::Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind((bind.host.as_str(), bind.port)).await
}

/// Bind and serve until the process is stopped.
pub async fn start(bind_config: &BindConfig, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = router(state);
    let listener = bind(bind_config).await?;
    info!("Product crawler API listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

impl IntoResponse for CrawlError {
    fn into_response(self) -> Response {
        error!("request failed: {self}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

// ── Handlers ────────────────────────────────────────────────────

async fn root() -> Json<Value> {
    Json(json!({ "message": "Product Crawler API is running", "status": "healthy" }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "message": "API is running" }))
}

async fn productos(State(state): State<Arc<AppState>>) -> Result<Json<ProductList>> {
    let productos = crate::scrape(&state.fetcher, &state.site_origin).await?;
    Ok(Json(ProductList { productos }))
}

async fn excel(State(state): State<Arc<AppState>>) -> Result<Response> {
    let products = crate::scrape(&state.fetcher, &state.site_origin).await?;
    let bytes = export::to_xlsx(&products)?;
    let disposition = format!("attachment; filename=\"{XLSX_FILENAME}\"");
    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
