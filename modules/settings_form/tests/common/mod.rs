//! Common test utilities: schema fixture and a wired in-memory service

use settings_form::config::Config;
use settings_form::domain::schema::{SchemaBuilder, SchemaContributor};
use settings_form::domain::{BuiltinSettings, MemoryNoticeSink, SanitizerRegistry, Service};
use settings_form::infra::storage::MemorySettingsStore;
use settings_form::{Field, FieldKind, SettingValue, SettingsRecord, SubmittedValues};
use std::sync::Arc;

/// Contributor standing in for a host extension: adds plain-text fields to
/// the (otherwise empty) extensions tab, plus a legacy tab-level field.
pub struct ExtensionSettings;

impl SchemaContributor for ExtensionSettings {
    fn contribute(&self, builder: &mut SchemaBuilder) {
        builder.add_fields(
            "extensions",
            "main",
            vec![
                Field::new("license_key", "License Key", FieldKind::Text)
                    .with_desc("License key for premium extensions."),
                Field::new("webhook_note", "Webhook Note", FieldKind::Textarea),
            ],
        );
        builder.add_tab_field(
            "extensions",
            Field::new("legacy_token", "Legacy Token", FieldKind::Text),
        );
    }
}

/// A wired service over the in-memory store with a collecting notice sink.
pub struct TestHarness {
    pub service: Service,
    pub notices: Arc<MemoryNoticeSink>,
}

/// Build the fixture schema: built-in declarations plus [`ExtensionSettings`].
pub fn fixture_schema() -> settings_form::Schema {
    let mut builder = SchemaBuilder::new();
    builder.apply(&BuiltinSettings);
    builder.apply(&ExtensionSettings);
    builder.build()
}

/// Service over an empty record and no registered sanitizers.
pub fn harness() -> TestHarness {
    harness_with(SettingsRecord::new(), SanitizerRegistry::new())
}

/// Service seeded with an existing record.
pub fn harness_with_record(record: SettingsRecord) -> TestHarness {
    harness_with(record, SanitizerRegistry::new())
}

/// Service seeded with an existing record and custom sanitizers.
pub fn harness_with(record: SettingsRecord, sanitizers: SanitizerRegistry) -> TestHarness {
    let store = Arc::new(MemorySettingsStore::with_record(record));
    let notices = Arc::new(MemoryNoticeSink::new());
    let service = Service::new(
        fixture_schema(),
        sanitizers,
        store,
        notices.clone(),
        &Config::default(),
    );
    TestHarness { service, notices }
}

/// Build a record from text entries.
pub fn record(entries: &[(&str, &str)]) -> SettingsRecord {
    entries
        .iter()
        .map(|(id, value)| (id.to_string(), SettingValue::text(*value)))
        .collect()
}

/// Build submitted values from text entries.
pub fn submitted(entries: &[(&str, &str)]) -> SubmittedValues {
    entries
        .iter()
        .map(|(id, value)| (id.to_string(), SettingValue::text(*value)))
        .collect()
}
