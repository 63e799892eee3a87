//! In-memory word lexicon: records added explicitly, embedded once at
//! insertion, never mutated or deleted for the life of the process. Lookup
//! by meaning and by surface word, plus best-match search over embeddings.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::warn;

use crate::providers::embedding::{cosine_similarity, Embedder};

const DEFAULT_LEARNING_THRESHOLD: f64 = 0.7;
const DEFAULT_MAX_AUTO_WORDS: usize = 1000;
const DUPLICATE_SIMILARITY: f64 = 0.9;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRecord {
    pub id: u64,
    pub word: String,
    pub meaning: String,
    pub part_of_speech: Option<String>,
    #[serde(skip)]
    pub embedding: Option<Vec<f32>>,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LexiconMatch {
    pub word_id: u64,
    pub word: String,
    pub meaning: String,
    pub part_of_speech: Option<String>,
    pub similarity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LexiconStats {
    pub total_words: usize,
    pub total_meanings: usize,
    pub total_unique_words: usize,
}

#[derive(Default)]
struct LexiconInner {
    words: BTreeMap<u64, WordRecord>,
    next_id: u64,
    meaning_index: HashMap<String, Vec<u64>>,
    word_index: HashMap<String, Vec<u64>>,
}

pub struct WordLexicon {
    embedder: Arc<dyn Embedder>,
    inner: Mutex<LexiconInner>,
}

impl WordLexicon {
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self {
            embedder,
            inner: Mutex::new(LexiconInner {
                next_id: 1,
                ..LexiconInner::default()
            }),
        }
    }

    /// Adds a word, computing its embedding once. An embedding failure is
    /// logged and the record stored without a vector; it is then invisible
    /// to best-match search but still indexed.
    pub async fn add_word(
        &self,
        word: &str,
        meaning: &str,
        part_of_speech: Option<String>,
        keywords: Vec<String>,
    ) -> u64 {
        let embedding = match self.embedder.embed(word).await {
            Ok(vector) => Some(vector),
            Err(err) => {
                warn!(error = %err, word, "Embedding failed, storing word without vector");
                None
            }
        };

        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;

        inner.words.insert(
            id,
            WordRecord {
                id,
                word: word.to_string(),
                meaning: meaning.to_string(),
                part_of_speech,
                embedding,
                keywords,
            },
        );
        inner
            .meaning_index
            .entry(meaning.to_string())
            .or_default()
            .push(id);
        inner
            .word_index
            .entry(word.to_string())
            .or_default()
            .push(id);
        id
    }

    pub fn get(&self, id: u64) -> Option<WordRecord> {
        self.inner.lock().words.get(&id).cloned()
    }

    pub fn ids_for_meaning(&self, meaning: &str) -> Vec<u64> {
        self.inner
            .lock()
            .meaning_index
            .get(meaning)
            .cloned()
            .unwrap_or_default()
    }

    pub fn ids_for_word(&self, word: &str) -> Vec<u64> {
        self.inner
            .lock()
            .word_index
            .get(word)
            .cloned()
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().words.is_empty()
    }

    pub fn stats(&self) -> LexiconStats {
        let inner = self.inner.lock();
        LexiconStats {
            total_words: inner.words.len(),
            total_meanings: inner.meaning_index.len(),
            total_unique_words: inner.word_index.len(),
        }
    }

    /// Ranks stored words by their best cosine similarity against any of
    /// the user's words. Embedding failure yields an empty result rather
    /// than an error.
    pub async fn find_best_match(&self, user_words: &[String], top_k: usize) -> Vec<LexiconMatch> {
        if user_words.is_empty() || self.is_empty() {
            return Vec::new();
        }

        let user_vectors = match self.embedder.embed_batch(user_words).await {
            Ok(vectors) => vectors,
            Err(err) => {
                warn!(error = %err, "Embedding failed, best-match search returns nothing");
                return Vec::new();
            }
        };

        let inner = self.inner.lock();
        let mut matches: Vec<LexiconMatch> = inner
            .words
            .values()
            .filter_map(|record| {
                let embedding = record.embedding.as_ref()?;
                let similarity = user_vectors
                    .iter()
                    .map(|vector| cosine_similarity(vector, embedding) as f64)
                    .fold(0.0f64, f64::max);
                Some(LexiconMatch {
                    word_id: record.id,
                    word: record.word.clone(),
                    meaning: record.meaning.clone(),
                    part_of_speech: record.part_of_speech.clone(),
                    similarity,
                })
            })
            .collect();

        matches.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        matches.truncate(top_k);
        matches
    }
}

/// Policy for growing the lexicon from well-scored submissions: learn only
/// above the score threshold, below the size cap, and skip inputs that
/// already have a near-duplicate entry.
#[derive(Debug, Clone, Copy)]
pub struct AutoLearner {
    pub learning_threshold: f64,
    pub max_auto_words: usize,
}

impl Default for AutoLearner {
    fn default() -> Self {
        Self {
            learning_threshold: DEFAULT_LEARNING_THRESHOLD,
            max_auto_words: DEFAULT_MAX_AUTO_WORDS,
        }
    }
}

impl AutoLearner {
    pub async fn should_learn(&self, lexicon: &WordLexicon, user_input: &str, score: f64) -> bool {
        let existing = lexicon
            .find_best_match(&[user_input.to_string()], 1)
            .await;
        if existing
            .first()
            .is_some_and(|best| best.similarity > DUPLICATE_SIMILARITY)
        {
            return false;
        }

        score > self.learning_threshold && lexicon.len() < self.max_auto_words
    }

    pub async fn learn(
        &self,
        lexicon: &WordLexicon,
        user_input: &str,
        meaning: &str,
        part_of_speech: Option<String>,
        keywords: Vec<String>,
    ) -> u64 {
        let id = lexicon
            .add_word(user_input, meaning, part_of_speech, keywords)
            .await;
        tracing::info!(word = user_input, meaning, id, "Auto-learned word");
        id
    }
}
