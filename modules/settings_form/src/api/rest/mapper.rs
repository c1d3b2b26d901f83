//! Contract to DTO mappers
//!
//! Conversions between contract models and REST DTOs. Submitted JSON
//! payloads reuse the storage document mapper, since the wire shape and the
//! persisted shape are the same flat document.

use super::dto::{
    FieldDto, SchemaResponse, SectionDto, SelectOptionDto, SettingsRecordResponse, TabDto,
};
use crate::contract::{Field, Schema, SettingsError, SettingsRecord, SubmittedValues};
use crate::infra::storage::mapper as document;

/// Record -> response document.
pub fn record_to_response(record: &SettingsRecord) -> SettingsRecordResponse {
    SettingsRecordResponse {
        values: document::record_to_document(record),
        total: record.len(),
    }
}

/// Parse a submitted JSON object into typed submitted values.
pub fn submitted_from_json(values: &serde_json::Value) -> Result<SubmittedValues, SettingsError> {
    let object = values.as_object().ok_or_else(|| SettingsError::Validation {
        message: "submitted values must be a JSON object".to_string(),
    })?;

    object
        .iter()
        .map(|(id, value)| {
            document::json_to_value(id, value)
                .map(|parsed| (id.clone(), parsed))
                .map_err(|err| SettingsError::Validation {
                    message: err.to_string(),
                })
        })
        .collect()
}

/// Schema -> overview response.
pub fn schema_to_response(schema: &Schema) -> SchemaResponse {
    SchemaResponse {
        tabs: schema
            .tabs()
            .iter()
            .map(|(key, tab)| TabDto {
                key: key.clone(),
                label: tab.label.clone(),
                sections: tab
                    .sections
                    .iter()
                    .map(|(section_key, section)| SectionDto {
                        key: section_key.clone(),
                        label: section.label.clone(),
                        fields: section.fields.iter().map(field_to_dto).collect(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn field_to_dto(field: &Field) -> FieldDto {
    FieldDto {
        id: field.id.clone(),
        name: field.name.clone(),
        kind: field.kind.as_str().to_string(),
        desc: field.desc.clone(),
        options: field
            .options
            .iter()
            .map(|option| SelectOptionDto {
                key: option.key.clone(),
                label: option.label.clone(),
            })
            .collect(),
        default: field.default.as_ref().map(document::value_to_json),
        placeholder: field.placeholder.clone(),
        multiple: field.multiple,
        readonly: field.readonly,
    }
}
