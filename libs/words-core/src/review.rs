//! Review scheduling over learner word records.
//!
//! Every operation is a pure function of its inputs plus the injected
//! clock. Nothing here persists; callers save the returned records.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::algorithm::{ForgettingCurve, SpacedRepetitionAlgorithm};
use crate::clock::Clock;
use crate::types::{
    DictionaryMeta, HistoryEntry, LearnerProgress, TodayTasks, WordRecord, RESERVED_WORD_KEYS,
};

/// Schedules reviews on the forgetting-curve table.
pub struct ReviewService {
    clock: Arc<dyn Clock>,
    algorithm: Box<dyn SpacedRepetitionAlgorithm>,
}

impl ReviewService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            algorithm: Box::new(ForgettingCurve::default()),
        }
    }

    /// Next review instant for `word` graded at `level`.
    ///
    /// Uses the review count *before* this review. An unknown or missing
    /// level schedules like the fair tier.
    pub fn calculate_next_review(&self, word: &WordRecord, level: Option<u8>) -> DateTime<Utc> {
        self.algorithm
            .next_review(level, word.reviews(), self.clock.now())
    }

    /// Grade `word` and return the updated record.
    ///
    /// The result takes its enrichment content from `word_details` and its
    /// identity from `word`; the input is left untouched.
    pub fn mark_word_level(
        &self,
        word: &WordRecord,
        level: Option<u8>,
        word_details: &Map<String, Value>,
    ) -> WordRecord {
        let now = self.clock.now();

        let details = word_details
            .iter()
            .filter(|(key, _)| !RESERVED_WORD_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        let mut history = word.history.clone().unwrap_or_default();
        history.push(HistoryEntry {
            date: now,
            level,
        });

        WordRecord {
            id: word.id.clone(),
            word: word.word.clone(),
            chapter: word.chapter.clone(),
            level,
            review_count: Some(word.reviews() + 1),
            last_reviewed_at: Some(now),
            next_review_at: Some(self.calculate_next_review(word, level)),
            history: Some(history),
            details,
        }
    }

    /// Words whose next review is at or before now, in input order.
    pub fn get_today_review_words(&self, all_words: &[WordRecord]) -> Vec<WordRecord> {
        let now = self.clock.now();
        all_words
            .iter()
            .filter(|word| matches!(word.next_review_at, Some(due) if due <= now))
            .cloned()
            .collect()
    }

    /// Current chapter (if in range) plus the due words.
    pub fn get_today_tasks(&self, meta: &DictionaryMeta, user_data: &LearnerProgress) -> TodayTasks {
        let new_chapter = user_data
            .progress
            .current_chapter_index()
            .and_then(|index| meta.chapters.get(index))
            .cloned();

        TodayTasks {
            new_chapter,
            review_words: self.get_today_review_words(&user_data.words),
        }
    }

    /// A chapter is complete when it has words and every one has a level.
    pub fn is_chapter_completed(&self, chapter_id: &str, user_data: &LearnerProgress) -> bool {
        let mut chapter_words = user_data
            .words
            .iter()
            .filter(|w| w.chapter == chapter_id)
            .peekable();

        if chapter_words.peek().is_none() {
            return false;
        }
        chapter_words.all(WordRecord::is_learned)
    }
}
