//! Disk cache for the last successful rendering.
//!
//! One JSON file per name under the cache directory, always read and
//! written whole.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CacheError;

pub const OUTPUT_RECORD: &str = "output";

/// A rendered widget output and the moment it was rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheRecord {
    pub result: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    pub async fn save_value(&self, name: &str, record: &CacheRecord) -> Result<(), CacheError> {
        let json = serde_json::to_string(record)?;
        tokio::fs::write(self.path(name), json).await?;
        Ok(())
    }

    pub async fn get_value(&self, name: &str) -> Result<CacheRecord, CacheError> {
        let data = tokio::fs::read_to_string(self.path(name)).await?;
        Ok(serde_json::from_str(&data)?)
    }
}
