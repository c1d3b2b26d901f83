//! Record to document mappers
//!
//! Conversions between the contract record and the JSON document shape the
//! stores persist. The record -> document direction is total; reading a
//! document back can fail on unsupported value shapes.

use crate::contract::{SettingValue, SettingsRecord};
use serde_json::{Map, Value};

/// Document shapes the stores refuse to load.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("settings document must be a JSON object")]
    NotAnObject,

    #[error("unsupported value for '{id}': expected string, number, string list, or string map")]
    UnsupportedValue { id: String },
}

/// Serialize the whole record into a flat JSON object.
pub fn record_to_document(record: &SettingsRecord) -> Value {
    let mut document = Map::new();
    for (id, value) in record.iter() {
        document.insert(id.clone(), value_to_json(value));
    }
    Value::Object(document)
}

/// Serialize one setting value.
pub fn value_to_json(value: &SettingValue) -> Value {
    match value {
        SettingValue::Text(text) => Value::String(text.clone()),
        SettingValue::Number(number) => serde_json::Number::from_f64(*number)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        SettingValue::List(items) => {
            Value::Array(items.iter().cloned().map(Value::String).collect())
        }
        SettingValue::Map(entries) => Value::Object(
            entries
                .iter()
                .map(|(key, flag)| (key.clone(), Value::String(flag.clone())))
                .collect(),
        ),
    }
}

/// Parse a persisted JSON object back into a record.
pub fn document_to_record(document: &Value) -> Result<SettingsRecord, DocumentError> {
    let object = document.as_object().ok_or(DocumentError::NotAnObject)?;

    object
        .iter()
        .map(|(id, value)| Ok((id.clone(), json_to_value(id, value)?)))
        .collect()
}

/// Parse one setting value; `id` only feeds the error message.
pub fn json_to_value(id: &str, value: &Value) -> Result<SettingValue, DocumentError> {
    match value {
        Value::String(text) => Ok(SettingValue::Text(text.clone())),
        Value::Number(number) => number
            .as_f64()
            .map(SettingValue::Number)
            .ok_or_else(|| DocumentError::UnsupportedValue { id: id.to_string() }),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(text) => Ok(text.clone()),
                _ => Err(DocumentError::UnsupportedValue { id: id.to_string() }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(SettingValue::List),
        Value::Object(entries) => entries
            .iter()
            .map(|(key, flag)| match flag {
                Value::String(text) => Ok((key.clone(), text.clone())),
                _ => Err(DocumentError::UnsupportedValue { id: id.to_string() }),
            })
            .collect::<Result<indexmap::IndexMap<_, _>, _>>()
            .map(SettingValue::Map),
        _ => Err(DocumentError::UnsupportedValue { id: id.to_string() }),
    }
}
