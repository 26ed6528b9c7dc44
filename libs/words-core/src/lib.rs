//! Core vocabulary-review library shared by the words-daily apps.
//!
//! Provides:
//! - Forgetting-curve review scheduling (fixed interval table per mastery tier)
//! - Learner progress persistence over a key-value medium (load, save,
//!   daily reset, export, import, clear)
//! - Static dictionary loading for chapter metadata and word details
//! - Shared types (WordRecord, LearnerProgress, MasteryLevel, etc.)

pub mod algorithm;
pub mod clock;
pub mod dictionary;
pub mod error;
pub mod review;
pub mod storage;
pub mod types;

pub use algorithm::{ForgettingCurve, SpacedRepetitionAlgorithm};
pub use clock::{Clock, FixedClock, SystemClock};
pub use dictionary::{Dictionary, DictionaryWord};
pub use error::{DictionaryError, ImportError, Result, StorageError};
pub use review::ReviewService;
pub use storage::{FileStore, KeyValueStore, MemoryStore, ProgressStore};
pub use types::{
    ChapterMeta, DictionaryMeta, HistoryEntry, LearnerProgress, MasteryLevel, Progress,
    TodayTasks, WordRecord,
};
