//! Native client implementation - wraps the domain service for in-process calls
//!
//! This client is used for in-process communication without HTTP overhead
//! and is the handle other modules receive through dependency injection.

use crate::contract::{
    RequestContext, SettingValue, SettingsError, SettingsFormApi, SettingsRecord, SubmittedValues,
};
use crate::domain::Service;
use crate::render::FormRenderer;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
    renderer: Arc<FormRenderer>,
}

impl NativeClient {
    /// Create a new native client.
    pub fn new(service: Arc<Service>, renderer: Arc<FormRenderer>) -> Self {
        Self { service, renderer }
    }
}

#[async_trait]
impl SettingsFormApi for NativeClient {
    async fn get_record(&self) -> Result<SettingsRecord, SettingsError> {
        self.service.record().await
    }

    async fn get_value(&self, id: &str) -> Result<Option<SettingValue>, SettingsError> {
        self.service.value(id).await
    }

    async fn submit_section(
        &self,
        ctx: RequestContext,
        submitted: SubmittedValues,
    ) -> Result<SettingsRecord, SettingsError> {
        self.service.submit(submitted, ctx).await
    }

    async fn save_all(&self, submitted: SubmittedValues) -> Result<SettingsRecord, SettingsError> {
        self.service.save_all(submitted).await
    }

    async fn render_section(&self, tab: &str, section: &str) -> Result<String, SettingsError> {
        let record = self.service.record().await?;
        self.renderer
            .section(self.service.schema(), &record, tab, section)
    }
}
