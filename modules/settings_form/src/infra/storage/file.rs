//! JSON-file-backed settings store
//!
//! Persists the record as one flat JSON document. Saves go through a
//! sibling temp file plus rename so the record is replaced as a whole.

use super::mapper;
use crate::contract::SettingsRecord;
use crate::domain::repository::SettingsRepository;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

pub struct JsonFileSettingsStore {
    path: PathBuf,
}

impl JsonFileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut temp = self.path.as_os_str().to_os_string();
        temp.push(".tmp");
        PathBuf::from(temp)
    }
}

#[async_trait]
impl SettingsRepository for JsonFileSettingsStore {
    async fn load(&self) -> Result<Option<SettingsRecord>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("failed to read settings file {}", self.path.display())
                })
            }
        };

        let document: serde_json::Value = serde_json::from_str(&raw).with_context(|| {
            format!("settings file {} is not valid JSON", self.path.display())
        })?;

        Ok(Some(mapper::document_to_record(&document)?))
    }

    async fn save(&self, record: &SettingsRecord) -> Result<()> {
        let document = mapper::record_to_document(record);
        let raw = serde_json::to_string_pretty(&document)
            .context("failed to serialize settings record")?;

        let temp = self.temp_path();
        fs::write(&temp, raw).await.with_context(|| {
            format!("failed to write settings file {}", temp.display())
        })?;
        fs::rename(&temp, &self.path).await.with_context(|| {
            format!("failed to replace settings file {}", self.path.display())
        })?;

        Ok(())
    }

    async fn ensure_exists(&self) -> Result<()> {
        match fs::metadata(&self.path).await {
            Ok(_) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                self.save(&SettingsRecord::new()).await
            }
            Err(err) => Err(err).with_context(|| {
                format!("failed to stat settings file {}", self.path.display())
            }),
        }
    }
}
