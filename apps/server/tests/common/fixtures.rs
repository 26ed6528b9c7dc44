//! Test fixtures and factory functions for creating test data.

use serde_json::{json, Map, Value};

use words_core::{ChapterMeta, Dictionary, DictionaryMeta, DictionaryWord};

/// Chapter metadata entry with `word_count` words.
pub fn chapter(id: &str, name: &str, word_count: usize) -> ChapterMeta {
    ChapterMeta {
        id: id.to_string(),
        name: name.to_string(),
        category: "基本词汇".to_string(),
        subcategory: String::new(),
        word_count,
        estimated_minutes: (word_count as f64 * 1.5).ceil() as u32,
    }
}

/// Enrichment content shaped like the generator's output.
pub fn word_details(word: &str) -> Map<String, Value> {
    json!({
        "type": "single",
        "pronunciation": {"us": format!("/{}/", word)},
        "meanings": [{"pos": "v.", "zh": "释义", "en": format!("meaning of {}", word)}],
        "examples": [{"en": format!("An example with {}.", word), "zh": "例句"}],
        "audioUrl": format!("https://dict.youdao.com/dictvoice?audio={}&type=2", word)
    })
    .as_object()
    .cloned()
    .unwrap_or_default()
}

pub fn dictionary_word(id: &str, word: &str, chapter: &str) -> DictionaryWord {
    DictionaryWord {
        id: id.to_string(),
        word: word.to_string(),
        chapter: chapter.to_string(),
        details: word_details(word),
    }
}

/// Two chapters: ch001 (w00001, w00002) and ch002 (w00003).
pub fn sample_dictionary() -> Dictionary {
    let meta = DictionaryMeta {
        version: "1.0".to_string(),
        source: "test".to_string(),
        total_chapters: 2,
        total_words: 3,
        last_updated: None,
        chapters: vec![
            chapter("ch001", "基本词汇 动词", 2),
            chapter("ch002", "基本词汇 名词", 1),
        ],
    };
    let words = vec![
        dictionary_word("w00001", "abandon", "ch001"),
        dictionary_word("w00002", "ability", "ch001"),
        dictionary_word("w00003", "climate", "ch002"),
    ];
    Dictionary::from_parts(meta, words)
}

/// Body for POST /api/review.
pub fn mark_request(word_id: &str, level: u8) -> Value {
    json!({ "wordId": word_id, "level": level })
}

/// Progress document as saved by the browser app, including an ungraded
/// review with null levels on w00002.
pub fn browser_document() -> String {
    json!({
        "version": "1.0",
        "words": [
            {
                "id": "w00001", "word": "abandon", "chapter": "ch001",
                "level": 2, "reviewCount": 1,
                "lastReviewedAt": "2026-10-18T08:00:00.000Z",
                "nextReviewAt": "2026-10-19T08:00:00.000Z",
                "history": [{"date": "2026-10-18T08:00:00.000Z", "level": 2}]
            },
            {
                "id": "w00002", "word": "ability", "chapter": "ch001",
                "level": null, "reviewCount": 1,
                "lastReviewedAt": "2026-10-18T08:00:00.000Z",
                "nextReviewAt": "2026-10-18T20:00:00.000Z",
                "history": [{"date": "2026-10-18T08:00:00.000Z", "level": null}]
            }
        ],
        "progress": {
            "currentChapter": 1,
            "completedChapters": 0,
            "totalWordsLearned": 1,
            "lastSyncAt": null
        }
    })
    .to_string()
}
