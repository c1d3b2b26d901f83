//! Domain layer - business logic and services

pub mod builtin;
pub mod events;
pub mod repository;
pub mod sanitize;
pub mod schema;
pub mod service;

pub use builtin::BuiltinSettings;
pub use events::{MemoryNoticeSink, NoOpNoticeSink, NoticeSink};
pub use repository::SettingsRepository;
pub use sanitize::SanitizerRegistry;
pub use schema::{SchemaBuilder, SchemaContributor};
pub use service::Service;
