//! Domain service - merge and submission orchestration

use super::events::NoticeSink;
use super::repository::SettingsRepository;
use super::sanitize::SanitizerRegistry;
use crate::config::Config;
use crate::contract::{
    AdminNotice, FieldKind, RequestContext, Schema, SettingValue, SettingsError, SettingsRecord,
    SubmittedValues,
};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Domain service for the settings form: owns the frozen schema and merges
/// submissions into the persisted record.
pub struct Service {
    schema: Schema,
    sanitizers: SanitizerRegistry,
    repository: Arc<dyn SettingsRepository>,
    notices: Arc<dyn NoticeSink>,
    default_tab: String,
    default_section: String,
}

impl Service {
    /// Create a new service instance over the wired collaborators.
    pub fn new(
        schema: Schema,
        sanitizers: SanitizerRegistry,
        repository: Arc<dyn SettingsRepository>,
        notices: Arc<dyn NoticeSink>,
        config: &Config,
    ) -> Self {
        Self {
            schema,
            sanitizers,
            repository,
            notices,
            default_tab: config.default_tab.clone(),
            default_section: config.default_section.clone(),
        }
    }

    /// The frozen settings schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Load the persisted record, creating an empty one on first access.
    pub async fn record(&self) -> Result<SettingsRecord, SettingsError> {
        self.repository.ensure_exists().await.map_err(|err| {
            error!(error = ?err, "failed to initialize settings record");
            SettingsError::Internal
        })?;

        let record = self.repository.load().await.map_err(|err| {
            error!(error = ?err, "failed to load settings record");
            SettingsError::Internal
        })?;

        Ok(record.unwrap_or_default())
    }

    /// A single persisted value; `None` means "use the field default".
    pub async fn value(&self, id: &str) -> Result<Option<SettingValue>, SettingsError> {
        Ok(self.record().await?.get(id).cloned())
    }

    /// Resolve the effective tab/section for a submission. The explicit
    /// section override wins over the detected section.
    fn resolve_scope(&self, ctx: &RequestContext) -> (String, String) {
        let tab = ctx
            .tab
            .clone()
            .unwrap_or_else(|| self.default_tab.clone());
        let section = ctx
            .section_override
            .clone()
            .or_else(|| ctx.section.clone())
            .unwrap_or_else(|| self.default_section.clone());
        (tab, section)
    }

    /// Merge a submission into the existing record per field-kind rules.
    ///
    /// Section-scoped submissions see only their tab/section's field-type
    /// index (plus legacy tab-level fields) and prune with sentinel
    /// semantics; a full-namespace save prunes only keys submitted with an
    /// empty value. A field inside the scoped index that is absent from the
    /// submission is pruned even when only present in `existing` - kept
    /// deliberately, downstream behavior depends on it.
    pub fn sanitize_merge(
        &self,
        existing: &SettingsRecord,
        submitted: SubmittedValues,
        ctx: &RequestContext,
    ) -> SettingsRecord {
        let (tab, section) = self.resolve_scope(ctx);

        let (field_types, submitted) = if ctx.scoped {
            let field_types = self.schema.field_types(Some(&tab), Some(&section));
            let submitted = self
                .sanitizers
                .apply_section_hooks(&tab, &section, submitted);
            (field_types, submitted)
        } else {
            (self.schema.field_types(None, None), submitted)
        };

        // Merge the new values with the existing record; submitted wins.
        let mut output = existing.clone();
        for (id, value) in &submitted {
            output.set(id.clone(), value.clone());
        }

        for (id, kind) in &field_types {
            // Some kinds are not actually settings, just keep moving along here
            if self.sanitizers.is_non_setting(kind) {
                continue;
            }

            if let Some(value) = output.get_mut(id) {
                *value = self.sanitizers.apply_value(kind, value.clone(), id);
            }

            if ctx.scoped {
                let in_submission = submitted.contains_key(id);
                if kind.is_group() {
                    if in_submission
                        && output.get(id).is_some_and(SettingValue::is_unchecked_sentinel)
                    {
                        output.remove(id);
                    }
                } else if *kind == FieldKind::Text {
                    if submitted.get(id).is_some_and(SettingValue::is_empty) {
                        output.remove(id);
                    }
                } else if submitted.get(id).is_some_and(SettingValue::is_empty)
                    || (output.contains(id) && !in_submission)
                {
                    output.remove(id);
                }
            } else if submitted.get(id).is_some_and(SettingValue::is_empty) {
                output.remove(id);
            }
        }

        output
    }

    /// Merge a submission into the persisted record and write it back.
    ///
    /// Read-modify-write against a single storage slot: concurrent admin
    /// submissions race with last-write-wins semantics. Accepted limitation.
    pub async fn submit(
        &self,
        submitted: SubmittedValues,
        ctx: RequestContext,
    ) -> Result<SettingsRecord, SettingsError> {
        let existing = self.record().await?;
        let merged = self.sanitize_merge(&existing, submitted, &ctx);

        self.repository.save(&merged).await.map_err(|err| {
            error!(error = ?err, "failed to persist settings record");
            SettingsError::Internal
        })?;

        if ctx.scoped {
            if let Err(err) = self
                .notices
                .publish(AdminNotice::updated("Settings updated."))
                .await
            {
                warn!(error = ?err, "failed to publish settings notice");
            }
        }

        info!(scoped = ctx.scoped, keys = merged.len(), "settings record saved");
        Ok(merged)
    }

    /// Full-namespace save without tab/section context.
    pub async fn save_all(
        &self,
        submitted: SubmittedValues,
    ) -> Result<SettingsRecord, SettingsError> {
        self.submit(submitted, RequestContext::full_save()).await
    }
}
