//! Durable learner progress: load, save, daily reset, export, import, clear.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::clock::Clock;
use crate::error::{ImportError, Result};
use crate::storage::KeyValueStore;
use crate::types::LearnerProgress;

/// Key of the main progress document.
pub const STORAGE_KEY: &str = "words-daily-data";
/// Key of the last daily-reset day string.
pub const LAST_RESET_KEY: &str = "words-daily-last-reset";

/// Day-string format for the reset key, e.g. `Mon Oct 19 2026`.
const DAY_FORMAT: &str = "%a %b %d %Y";

/// Learner progress persisted in a [`KeyValueStore`].
pub struct ProgressStore {
    kv: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl ProgressStore {
    pub fn new(kv: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { kv, clock }
    }

    /// Canonical zero state.
    pub fn create_empty_data(&self) -> LearnerProgress {
        LearnerProgress::default()
    }

    /// Read the stored document.
    ///
    /// Absent, unreadable or malformed data yields the empty state; the
    /// failure is logged and never returned. Read-modify-write callers use
    /// [`try_load_data`](Self::try_load_data) so a bad read is never saved
    /// back over the stored document.
    pub fn load_data(&self) -> LearnerProgress {
        match self.try_load_data() {
            Ok(data) => data,
            Err(e) => {
                tracing::error!("Failed to load learner data: {}", e);
                self.create_empty_data()
            }
        }
    }

    /// Read the stored document, failing on unreadable or malformed data.
    ///
    /// An absent document is the empty state, not an error.
    pub fn try_load_data(&self) -> Result<LearnerProgress> {
        match self.kv.get(STORAGE_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(self.create_empty_data()),
        }
    }

    /// Overwrite the stored document. Last writer wins.
    pub fn save_data(&self, data: &LearnerProgress) -> Result<()> {
        let json = serde_json::to_string(data)?;
        self.kv.set(STORAGE_KEY, &json)
    }

    /// Report whether a new local calendar day started since the last call.
    ///
    /// Returns true at most once per day; the stored day string is updated
    /// when it does.
    pub fn check_daily_reset(&self) -> Result<bool> {
        let today = self.clock.today().format(DAY_FORMAT).to_string();
        let last_reset = self.kv.get(LAST_RESET_KEY)?;

        if last_reset.as_deref() == Some(today.as_str()) {
            return Ok(false);
        }

        self.kv.set(LAST_RESET_KEY, &today)?;
        tracing::info!("Daily reset triggered for {}", today);
        Ok(true)
    }

    /// Pretty-printed JSON of the current stored state.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.load_data())?)
    }

    /// Backup file name stamped with the clock's epoch milliseconds.
    pub fn export_file_name(&self) -> String {
        format!(
            "words-daily-backup-{}.json",
            self.clock.now().timestamp_millis()
        )
    }

    /// Write a backup file into `dir` and return its path.
    pub fn export_data(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let path = dir.join(self.export_file_name());
        std::fs::write(&path, self.export_json()?)?;
        tracing::info!("Exported learner data to {}", path.display());
        Ok(path)
    }

    /// Replace the stored state with the parsed content of `path`.
    pub async fn import_data(
        &self,
        path: impl AsRef<Path>,
    ) -> std::result::Result<LearnerProgress, ImportError> {
        let content = tokio::fs::read_to_string(path.as_ref()).await?;
        self.import_str(&content)
    }

    /// Replace the stored state with `content`.
    ///
    /// Content must be valid JSON in the progress shape; otherwise nothing
    /// is written and the previous state stays in place.
    pub fn import_str(
        &self,
        content: &str,
    ) -> std::result::Result<LearnerProgress, ImportError> {
        let value: serde_json::Value = match serde_json::from_str(content) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Rejected import, invalid JSON: {}", e);
                return Err(ImportError::InvalidJson(e));
            }
        };
        let data: LearnerProgress = match serde_json::from_value(value) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("Rejected import, unexpected shape: {}", e);
                return Err(ImportError::InvalidSchema(e));
            }
        };

        self.save_data(&data)?;
        tracing::info!("Imported learner data with {} words", data.words.len());
        Ok(data)
    }

    /// Remove the progress document and the reset marker.
    pub fn clear_all(&self) -> Result<()> {
        self.kv.remove(STORAGE_KEY)?;
        self.kv.remove(LAST_RESET_KEY)?;
        tracing::info!("Cleared all learner data");
        Ok(())
    }
}
