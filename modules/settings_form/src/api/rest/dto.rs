//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Record DTOs =====

/// The persisted settings record as a flat JSON document
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SettingsRecordResponse {
    /// Field id -> persisted value
    pub values: serde_json::Value,

    /// Number of persisted keys
    pub total: usize,
}

/// Full-namespace save request (no tab/section scope)
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SaveSettingsRequest {
    /// Field id -> submitted value (flat JSON object)
    pub values: serde_json::Value,
}

/// Section-scoped submit request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SubmitSectionRequest {
    /// Field id -> submitted value for this section (flat JSON object)
    pub values: serde_json::Value,

    /// Optional override that wins over the section in the URL
    #[serde(default)]
    pub section_override: Option<String>,
}

// ===== Schema DTOs =====

/// Overview of the frozen settings schema
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SchemaResponse {
    /// Tabs in navigation order
    pub tabs: Vec<TabDto>,
}

/// One settings tab
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TabDto {
    /// Tab key used in URLs
    #[schema(example = "general")]
    pub key: String,

    /// Navigation label
    pub label: String,

    /// Sections in render order
    pub sections: Vec<SectionDto>,
}

/// One section of a tab
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SectionDto {
    /// Section key used in URLs
    #[schema(example = "main")]
    pub key: String,

    /// Section label
    pub label: String,

    /// Fields in render order
    pub fields: Vec<FieldDto>,
}

/// One field declaration
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldDto {
    /// Record key of the field
    #[schema(example = "currency")]
    pub id: String,

    /// Label shown next to the control
    pub name: String,

    /// Control kind name
    #[schema(example = "select")]
    pub kind: String,

    /// Description rendered next to the control
    pub desc: String,

    /// Options for select-like and group kinds
    pub options: Vec<SelectOptionDto>,

    /// Default value when nothing is persisted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,

    /// Placeholder for text and select controls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Whether a select accepts multiple values
    pub multiple: bool,

    /// Whether the control renders read-only
    pub readonly: bool,
}

/// One selectable option
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SelectOptionDto {
    /// Stored option key
    pub key: String,

    /// Human-readable label
    pub label: String,
}

// Note: Conversion implementations live in mapper.rs per module guidelines
