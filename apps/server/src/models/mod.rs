//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from words-core
pub use words_core::types::{
    ChapterMeta, HistoryEntry, LearnerProgress, Progress, TodayTasks, WordRecord,
};

/// Body of POST /api/review
///
/// A null or missing level records an ungraded review on the fair schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkWordRequest {
    pub word_id: String,
    #[serde(default)]
    pub level: Option<u8>,
}

/// Chapter metadata with the learner's completion flag
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterStatus {
    #[serde(flatten)]
    pub chapter: ChapterMeta,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterCompletionResponse {
    pub chapter_id: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyResetResponse {
    pub reset: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupResponse {
    pub path: String,
}
