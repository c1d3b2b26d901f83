//! Repository trait for settings persistence
//!
//! The persisted object is a single flat record replaced as a whole on
//! every save. Implementations are in infra/storage/.

use crate::contract::SettingsRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Storage collaborator holding the one persisted settings record.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Load the persisted record, or `None` before the first save.
    async fn load(&self) -> Result<Option<SettingsRecord>>;

    /// Replace the persisted record as a whole.
    async fn save(&self, record: &SettingsRecord) -> Result<()>;

    /// Create an empty record if none exists yet.
    async fn ensure_exists(&self) -> Result<()>;
}
