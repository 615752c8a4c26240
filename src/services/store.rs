//! Persistence collaborators for saved parties.
//!
//! The form only talks to [`PartyStore`]. Two implementations ship with the
//! crate: an in-memory store for tests and embedding, and a JSON file store
//! used by the CLI.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{PartyPayload, PartyRecord};

/// Persistence backend for new parties.
#[async_trait]
pub trait PartyStore: Send + Sync {
    /// Persists the payload and returns it merged with a server-assigned id.
    async fn create(&self, payload: PartyPayload) -> Result<PartyRecord>;
}

/// Store that keeps records in memory.
#[derive(Debug, Default)]
pub struct MemoryPartyStore {
    records: Mutex<Vec<PartyRecord>>,
}

impl MemoryPartyStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all stored records, oldest first.
    #[must_use]
    pub fn records(&self) -> Vec<PartyRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or_default()
    }

    /// True when nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl PartyStore for MemoryPartyStore {
    async fn create(&self, payload: PartyPayload) -> Result<PartyRecord> {
        let record = PartyRecord {
            id: Uuid::new_v4().to_string(),
            payload,
        };
        self.records
            .lock()
            .map_err(|_| anyhow::anyhow!("Party store lock poisoned"))?
            .push(record.clone());
        Ok(record)
    }
}

/// Store that writes one JSON file per party into a directory.
#[derive(Debug, Clone)]
pub struct JsonFilePartyStore {
    dir: PathBuf,
}

impl JsonFilePartyStore {
    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the party files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    /// Writes a record using temp file + rename.
    fn write_record(&self, record: &PartyRecord) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).context(format!(
            "Failed to create party directory: {}",
            self.dir.display()
        ))?;

        let content =
            serde_json::to_string_pretty(record).context("Failed to serialize party record")?;
        let path = self.record_path(&record.id);
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp party file: {}",
            temp_path.display()
        ))?;
        fs::rename(&temp_path, &path).context(format!(
            "Failed to rename temp party file to: {}",
            path.display()
        ))?;

        Ok(path)
    }

    /// Loads every stored record, ordered by creation time.
    ///
    /// A missing directory yields an empty list.
    pub fn list(&self) -> Result<Vec<PartyRecord>> {
        let mut records = Vec::new();
        if !self.dir.exists() {
            return Ok(records);
        }

        let entries = fs::read_dir(&self.dir).context(format!(
            "Failed to read party directory: {}",
            self.dir.display()
        ))?;

        for entry in entries {
            let path = entry.context("Failed to read directory entry")?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let content = fs::read_to_string(&path)
                .context(format!("Failed to read party file: {}", path.display()))?;
            let record: PartyRecord = serde_json::from_str(&content)
                .context(format!("Failed to parse party file: {}", path.display()))?;
            records.push(record);
        }

        records.sort_by(|a, b| a.payload.created_at.cmp(&b.payload.created_at));
        Ok(records)
    }
}

#[async_trait]
impl PartyStore for JsonFilePartyStore {
    async fn create(&self, payload: PartyPayload) -> Result<PartyRecord> {
        let record = PartyRecord {
            id: Uuid::new_v4().to_string(),
            payload,
        };
        // File IO runs on the blocking pool so form timers keep firing.
        let store = self.clone();
        let (record, path) = tokio::task::spawn_blocking(move || {
            let path = store.write_record(&record)?;
            Ok::<_, anyhow::Error>((record, path))
        })
        .await
        .context("Party write task failed")??;
        tracing::debug!("Wrote party {} to {}", record.id, path.display());
        Ok(record)
    }
}
