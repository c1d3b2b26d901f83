//! In-memory settings store
//!
//! Backs embedded use and tests; the record lives behind a synchronous
//! read/write lock.

use crate::contract::SettingsRecord;
use crate::domain::repository::SettingsRepository;
use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;

#[derive(Default)]
pub struct MemorySettingsStore {
    record: RwLock<Option<SettingsRecord>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing record instead of an empty slot.
    pub fn with_record(record: SettingsRecord) -> Self {
        Self {
            record: RwLock::new(Some(record)),
        }
    }
}

#[async_trait]
impl SettingsRepository for MemorySettingsStore {
    async fn load(&self) -> Result<Option<SettingsRecord>> {
        Ok(self.record.read().clone())
    }

    async fn save(&self, record: &SettingsRecord) -> Result<()> {
        *self.record.write() = Some(record.clone());
        Ok(())
    }

    async fn ensure_exists(&self) -> Result<()> {
        let mut slot = self.record.write();
        if slot.is_none() {
            *slot = Some(SettingsRecord::new());
        }
        Ok(())
    }
}
