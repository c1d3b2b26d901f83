//! Route registration

use super::dto::{SaveSettingsRequest, SchemaResponse, SettingsRecordResponse, SubmitSectionRequest};
use super::error::Problem;
use super::handlers;
use crate::domain::Service;
use crate::render::FormRenderer;
use axum::{extract::Path, response::Html, routing::get, Extension, Json, Router};
use std::sync::Arc;

/// Register all REST routes for the settings form
pub fn register_routes(
    router: Router,
    service: Arc<Service>,
    renderer: Arc<FormRenderer>,
) -> Router {
    router
        .route(
            "/settings",
            get(get_settings_handler).put(save_settings_handler),
        )
        .route("/settings/schema", get(get_schema_handler))
        .route(
            "/settings/form/{tab}/{section}",
            get(render_section_handler).post(submit_section_handler),
        )
        // Add collaborators as extensions for handlers
        .layer(Extension(service))
        .layer(Extension(renderer))
}

// ===== Handler wrappers that extract collaborators from Extensions =====

async fn get_settings_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<SettingsRecordResponse>, Problem> {
    handlers::get_settings(service).await
}

async fn save_settings_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Json<SaveSettingsRequest>,
) -> Result<Json<SettingsRecordResponse>, Problem> {
    handlers::save_settings(service, json).await
}

async fn get_schema_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Json<SchemaResponse> {
    handlers::get_schema(service).await
}

async fn render_section_handler(
    Extension(service): Extension<Arc<Service>>,
    Extension(renderer): Extension<Arc<FormRenderer>>,
    path: Path<(String, String)>,
) -> Result<Html<String>, Problem> {
    handlers::render_section(service, renderer, path).await
}

async fn submit_section_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<(String, String)>,
    json: Json<SubmitSectionRequest>,
) -> Result<Json<SettingsRecordResponse>, Problem> {
    handlers::submit_section(service, path, json).await
}
