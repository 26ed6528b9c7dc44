//! Core types for the words-daily learner state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Schema tag written into every fresh [`LearnerProgress`].
pub const DATA_VERSION: &str = "1.0";

/// Keys a [`WordRecord`] owns itself. Enrichment maps never override them.
pub const RESERVED_WORD_KEYS: &[&str] = &[
    "id",
    "word",
    "chapter",
    "level",
    "reviewCount",
    "lastReviewedAt",
    "nextReviewAt",
    "history",
];

/// Learner's self-assessed familiarity with a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MasteryLevel {
    Fair,
    Familiar,
    Mastered,
}

impl MasteryLevel {
    /// Convert to the stored numeric tier (1-3).
    pub fn to_value(self) -> u8 {
        match self {
            Self::Fair => 1,
            Self::Familiar => 2,
            Self::Mastered => 3,
        }
    }

    /// Create from the stored numeric tier.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Fair),
            2 => Some(Self::Familiar),
            3 => Some(Self::Mastered),
            _ => None,
        }
    }

    /// Display name, also used in logs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Fair => "fair",
            Self::Familiar => "familiar",
            Self::Mastered => "mastered",
        }
    }
}

/// One review event in a word's history.
///
/// An ungraded review keeps `level: null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: DateTime<Utc>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub level: Option<u8>,
}

/// Read an optional integer field written by older clients.
///
/// Null, negative, fractional, out-of-range or non-numeric values read as
/// `None` instead of failing the whole document.
fn lenient_int<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_u64)
        .and_then(|n| T::try_from(n).ok()))
}

fn lenient_count<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_int(deserializer)?.unwrap_or(0))
}

/// Chapter position; anything that is not an integer reads as 0, which
/// names no chapter.
fn lenient_position<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_i64).unwrap_or(0))
}

/// A learner's per-word state.
///
/// Enrichment content (pronunciation, meanings, examples, memory tips, ...)
/// travels in `details` and is flattened into the same JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRecord {
    pub id: String,
    pub word: String,
    pub chapter: String,
    #[serde(
        default,
        deserialize_with = "lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub level: Option<u8>,
    #[serde(
        default,
        deserialize_with = "lenient_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub review_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reviewed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_review_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<HistoryEntry>>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl WordRecord {
    /// Create an unreviewed record carrying only identity fields.
    pub fn new(id: impl Into<String>, word: impl Into<String>, chapter: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            word: word.into(),
            chapter: chapter.into(),
            level: None,
            review_count: None,
            last_reviewed_at: None,
            next_review_at: None,
            history: None,
            details: Map::new(),
        }
    }

    /// Number of reviews so far, treating an absent count as zero.
    pub fn reviews(&self) -> u32 {
        self.review_count.unwrap_or(0)
    }

    /// Whether the learner has graded this word with a non-zero level.
    pub fn is_learned(&self) -> bool {
        matches!(self.level, Some(level) if level >= 1)
    }
}

/// Aggregate counters maintained by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// 1-based position in the chapter list. Out-of-range values name no
    /// chapter.
    #[serde(default = "first_chapter", deserialize_with = "lenient_position")]
    pub current_chapter: i64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub completed_chapters: usize,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_words_learned: usize,
    #[serde(default)]
    pub last_sync_at: Option<DateTime<Utc>>,
}

fn first_chapter() -> i64 {
    1
}

impl Progress {
    /// 0-based index of the current chapter, if the position is positive.
    pub fn current_chapter_index(&self) -> Option<usize> {
        self.current_chapter
            .checked_sub(1)
            .and_then(|index| usize::try_from(index).ok())
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            current_chapter: first_chapter(),
            completed_chapters: 0,
            total_words_learned: 0,
            last_sync_at: None,
        }
    }
}

/// The whole persisted document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerProgress {
    pub version: String,
    #[serde(default)]
    pub words: Vec<WordRecord>,
    #[serde(default)]
    pub progress: Progress,
}

impl Default for LearnerProgress {
    fn default() -> Self {
        Self {
            version: DATA_VERSION.to_string(),
            words: Vec::new(),
            progress: Progress::default(),
        }
    }
}

impl LearnerProgress {
    pub fn find_word(&self, id: &str) -> Option<&WordRecord> {
        self.words.iter().find(|w| w.id == id)
    }

    /// Replace the record with the same id, or append it.
    pub fn upsert_word(&mut self, record: WordRecord) {
        match self.words.iter_mut().find(|w| w.id == record.id) {
            Some(existing) => *existing = record,
            None => self.words.push(record),
        }
    }

    /// Count of records that carry a level.
    pub fn learned_count(&self) -> usize {
        self.words.iter().filter(|w| w.is_learned()).count()
    }
}

/// Chapter entry from the generated `meta.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterMeta {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    #[serde(default)]
    pub word_count: usize,
    #[serde(default)]
    pub estimated_minutes: u32,
}

/// Static dictionary metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryMeta {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub total_chapters: usize,
    #[serde(default)]
    pub total_words: usize,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    pub chapters: Vec<ChapterMeta>,
}

/// What the learner should work on today.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayTasks {
    pub new_chapter: Option<ChapterMeta>,
    pub review_words: Vec<WordRecord>,
}
