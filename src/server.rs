//! HTTP surface of the application.
//!
//! Serves the root page the front-end application mounts into, the settings
//! consumed by the API documentation UI, and the ransack whitelists of every
//! registered model so filter forms know which fields they may offer.

use crate::registry::Registry;
use crate::settings::{ApiDocsSettings, Settings};
use crate::whitelist::Whitelist;
use axum::Router as AxumRouter;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, Json};
use axum::routing::get;
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub registry: Arc<Registry>,
}

/// Whitelists of one model, as returned by `GET /api/ransack/{model}`.
#[derive(Debug, Serialize)]
pub struct RansackSummary {
    pub model: String,
    pub attributes: Whitelist,
    pub associations: Whitelist,
    pub scopes: Whitelist,
}

/// Build the axum router for all application routes.
pub fn build_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/", get(index))
        .route("/api/docs/config", get(docs_config))
        .route("/api/ransack/{model}", get(ransack_summary))
        .with_state(state)
}

/// Bind `host:port` from the settings and serve until the listener fails.
pub async fn run(settings: Settings) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = format!("{}:{}", settings.host, settings.port);
    let state = AppState {
        settings: Arc::new(settings),
        registry: Registry::global(),
    };
    let app = build_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("HTTP Server running on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Root page: a titled shell holding the front-end mount point.
pub fn render_index(settings: &Settings) -> String {
    format!(
        "<!DOCTYPE html>\n\
<html>\n\
<head>\n\
<meta charset=\"utf-8\">\n\
<title>{}</title>\n\
</head>\n\
<body>\n\
<div id=\"{}\"></div>\n\
</body>\n\
</html>\n",
        escape_html(&settings.app_name),
        escape_html(&settings.mount_id)
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.settings))
}

async fn docs_config(State(state): State<AppState>) -> Json<ApiDocsSettings> {
    Json(state.settings.api_docs.clone())
}

async fn ransack_summary(
    State(state): State<AppState>,
    Path(model): Path<String>,
) -> Result<Json<RansackSummary>, StatusCode> {
    let config = state.registry.lookup(&model).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(RansackSummary {
        attributes: config.attributes().clone(),
        associations: config.associations().clone(),
        scopes: config.scopes().clone(),
        model,
    }))
}
