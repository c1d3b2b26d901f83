//! Settings Form Module
//!
//! Declarative admin settings for the payment plugin: a frozen tab/section/
//! field schema, HTML form rendering per field kind, and sanitize/merge of
//! submitted values into the single persisted settings record.

// Public exports
pub mod contract;
pub use contract::{
    AdminNotice, Field, FieldKind, NoticeKind, RequestContext, Schema, Section, SelectOption,
    SettingValue, SettingsError, SettingsFormApi, SettingsRecord, SubmittedValues, Tab,
    UNCHECKED_SENTINEL,
};

pub mod module;
pub use module::SettingsFormModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
#[doc(hidden)]
pub mod render;
