//! Static dictionary content produced by the offline generator.
//!
//! # Layout
//! ```text
//! <data dir>/meta.json            chapter metadata
//! <data dir>/chapters/*.json      [{ id, name, words: [{ id, word, ...details }] }]
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DictionaryError;
use crate::types::{ChapterMeta, DictionaryMeta, WordRecord};

type Result<T> = std::result::Result<T, DictionaryError>;

/// One dictionary word with its enrichment content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryWord {
    pub id: String,
    pub word: String,
    #[serde(default)]
    pub chapter: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl DictionaryWord {
    /// Fresh, unreviewed learner record for this word.
    pub fn to_record(&self) -> WordRecord {
        WordRecord::new(&self.id, &self.word, &self.chapter)
    }
}

#[derive(Debug, Deserialize)]
struct ChapterContent {
    id: String,
    #[serde(default)]
    words: Vec<DictionaryWord>,
}

/// Read-only dictionary indexed by word id.
#[derive(Debug, Clone)]
pub struct Dictionary {
    meta: DictionaryMeta,
    words: Vec<DictionaryWord>,
    by_id: HashMap<String, usize>,
}

impl Dictionary {
    /// Load `meta.json` and every chapter file under `dir`.
    ///
    /// A missing `chapters` directory yields a dictionary with metadata only.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let meta_path = dir.join("meta.json");
        if !meta_path.exists() {
            return Err(DictionaryError::MissingMeta(meta_path));
        }
        let meta: DictionaryMeta = read_json(&meta_path)?;

        let mut words = Vec::new();
        let chapters_dir = dir.join("chapters");
        if chapters_dir.is_dir() {
            let mut files: Vec<_> = fs::read_dir(&chapters_dir)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|path| path.extension().map_or(false, |ext| ext == "json"))
                .collect();
            files.sort();

            for path in files {
                let chapters: Vec<ChapterContent> = read_json(&path)?;
                for chapter in chapters {
                    words.extend(chapter.words.into_iter().map(|mut word| {
                        word.chapter = chapter.id.clone();
                        word
                    }));
                }
            }
        }

        tracing::info!(
            "Loaded dictionary: {} chapters, {} words",
            meta.chapters.len(),
            words.len()
        );
        Ok(Self::from_parts(meta, words))
    }

    /// Build from in-memory parts. Later duplicates of an id are ignored.
    pub fn from_parts(meta: DictionaryMeta, words: Vec<DictionaryWord>) -> Self {
        let mut by_id = HashMap::with_capacity(words.len());
        for (index, word) in words.iter().enumerate() {
            by_id.entry(word.id.clone()).or_insert(index);
        }
        Self { meta, words, by_id }
    }

    pub fn meta(&self) -> &DictionaryMeta {
        &self.meta
    }

    /// Chapter by 0-based position.
    pub fn chapter(&self, index: usize) -> Option<&ChapterMeta> {
        self.meta.chapters.get(index)
    }

    pub fn chapter_by_id(&self, id: &str) -> Option<&ChapterMeta> {
        self.meta.chapters.iter().find(|c| c.id == id)
    }

    pub fn word(&self, id: &str) -> Option<&DictionaryWord> {
        self.by_id.get(id).map(|&index| &self.words[index])
    }

    pub fn chapter_words<'a>(
        &'a self,
        chapter_id: &'a str,
    ) -> impl Iterator<Item = &'a DictionaryWord> + 'a {
        self.words.iter().filter(move |w| w.chapter == chapter_id)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| DictionaryError::Json {
        path: path.to_path_buf(),
        source,
    })
}
