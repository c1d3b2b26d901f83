//! HTTP request handlers - thin layer that delegates to the domain service

use super::dto::{SaveSettingsRequest, SchemaResponse, SettingsRecordResponse, SubmitSectionRequest};
use super::error::{map_domain_error, Problem};
use super::mapper;
use crate::contract::RequestContext;
use crate::domain::Service;
use crate::render::FormRenderer;
use axum::{extract::Path, response::Html, Json};
use std::sync::Arc;

/// Get the whole persisted settings record
pub async fn get_settings(
    service: Arc<Service>,
) -> Result<Json<SettingsRecordResponse>, Problem> {
    let record = service.record().await.map_err(map_domain_error)?;
    Ok(Json(mapper::record_to_response(&record)))
}

/// Full-namespace save without tab/section context
pub async fn save_settings(
    service: Arc<Service>,
    Json(req): Json<SaveSettingsRequest>,
) -> Result<Json<SettingsRecordResponse>, Problem> {
    let submitted = mapper::submitted_from_json(&req.values).map_err(map_domain_error)?;
    let record = service.save_all(submitted).await.map_err(map_domain_error)?;
    Ok(Json(mapper::record_to_response(&record)))
}

/// Overview of the frozen schema
pub async fn get_schema(service: Arc<Service>) -> Json<SchemaResponse> {
    Json(mapper::schema_to_response(service.schema()))
}

/// Render one section of the settings form as HTML
pub async fn render_section(
    service: Arc<Service>,
    renderer: Arc<FormRenderer>,
    Path((tab, section)): Path<(String, String)>,
) -> Result<Html<String>, Problem> {
    let record = service.record().await.map_err(map_domain_error)?;
    let html = renderer
        .section(service.schema(), &record, &tab, &section)
        .map_err(map_domain_error)?;
    Ok(Html(html))
}

/// Section-scoped submit
pub async fn submit_section(
    service: Arc<Service>,
    Path((tab, section)): Path<(String, String)>,
    Json(req): Json<SubmitSectionRequest>,
) -> Result<Json<SettingsRecordResponse>, Problem> {
    let submitted = mapper::submitted_from_json(&req.values).map_err(map_domain_error)?;

    let mut ctx = RequestContext::section_scoped(tab, section);
    if let Some(section_override) = req.section_override {
        ctx = ctx.with_section_override(section_override);
    }

    let record = service
        .submit(submitted, ctx)
        .await
        .map_err(map_domain_error)?;
    Ok(Json(mapper::record_to_response(&record)))
}
