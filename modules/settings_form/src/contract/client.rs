//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to interact with the
//! settings form service. NO HTTP - direct function calls for performance.

use super::{
    error::SettingsError,
    model::{RequestContext, SettingValue, SettingsRecord, SubmittedValues},
};
use async_trait::async_trait;

/// Settings form API for inter-module communication
#[async_trait]
pub trait SettingsFormApi: Send + Sync {
    /// Get the whole persisted settings record
    async fn get_record(&self) -> Result<SettingsRecord, SettingsError>;

    /// Get a single persisted value by field id
    async fn get_value(&self, id: &str) -> Result<Option<SettingValue>, SettingsError>;

    /// Merge a section-scoped submission into the record and persist it
    async fn submit_section(
        &self,
        ctx: RequestContext,
        submitted: SubmittedValues,
    ) -> Result<SettingsRecord, SettingsError>;

    /// Merge a full-namespace submission into the record and persist it
    async fn save_all(&self, submitted: SubmittedValues) -> Result<SettingsRecord, SettingsError>;

    /// Render one section of the settings form as HTML
    async fn render_section(&self, tab: &str, section: &str) -> Result<String, SettingsError>;
}
