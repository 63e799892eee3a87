//! Evaluation orchestrator: validates the input, runs the four signals and
//! aggregates them into a structured result. Single pass, no retries; the
//! only shared state is the embedding model, the synonym table and the
//! tagging cache.

use std::sync::Arc;

use serde::Serialize;

use crate::answer::{self, EvaluationVerdict};
use crate::config::EngineConfig;
use crate::keywords::KeywordExtractor;
use crate::pos::parse::{check_incomplete, parse_pos_input, IncompletePosInput, PosWordMap};
use crate::providers::embedding::Embedder;
use crate::providers::tagger::MorphTagger;
use crate::providers::{HttpEmbeddingProvider, HttpMorphTagger};
use crate::scoring::{self, SignalScores};
use crate::semantic::SemanticEngine;
use crate::synonyms::SynonymLexicon;
use crate::text;

const HIGH_PAIR_SIMILARITY: f64 = 0.7;
const LOW_PAIR_SIMILARITY: f64 = 0.4;

/// Signal breakdown and parsed word lists for one comparison, kept in the
/// result for transparency and debugging.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    #[serde(flatten)]
    pub signals: SignalScores,
    pub total_score: f64,
    pub meaning_words: Vec<String>,
    pub user_words: Vec<String>,
    pub meaning_pos: PosWordMap,
    pub user_pos: PosWordMap,
}

/// Either a scored comparison or an input-incompleteness notice; the notice
/// is a correctable validation state, not a scoring failure.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ComparisonOutcome {
    Incomplete(IncompletePosInput),
    Scored(ComparisonReport),
}

/// One entry of the word-by-word comparison report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordPairComparison {
    pub meaning_word: String,
    pub user_word: String,
    pub similarity_score: f64,
    pub meaning_index: usize,
    pub user_index: usize,
    pub is_exact_match: bool,
    pub is_high_similarity: bool,
    pub is_medium_similarity: bool,
    pub is_low_similarity: bool,
}

pub struct EvalEngine {
    semantic: SemanticEngine,
    keywords: KeywordExtractor,
    synonyms: SynonymLexicon,
}

impl EvalEngine {
    pub fn new(
        embedder: Arc<dyn Embedder>,
        tagger: Arc<dyn MorphTagger>,
        config: &EngineConfig,
    ) -> Self {
        Self {
            semantic: SemanticEngine::new(embedder),
            keywords: KeywordExtractor::new(tagger, config.tag_cache_capacity),
            synonyms: SynonymLexicon::builtin(),
        }
    }

    /// Builds the engine with HTTP-backed providers from the environment.
    pub fn from_env() -> Self {
        let config = EngineConfig::from_env();
        let embedder: Arc<dyn Embedder> =
            Arc::new(HttpEmbeddingProvider::new(config.embedding.clone()));
        let tagger: Arc<dyn MorphTagger> = Arc::new(HttpMorphTagger::new(config.tagger.clone()));
        Self::new(embedder, tagger, &config)
    }

    /// Replaces the built-in synonym table.
    pub fn with_synonym_lexicon(mut self, synonyms: SynonymLexicon) -> Self {
        self.synonyms = synonyms;
        self
    }

    /// Word-list comparison (policy: semantic 0.6, POS 0.2, synonym 0.15,
    /// keyword 0.05 plus tier bonus). Incomplete POS input short-circuits
    /// before any similarity computation.
    pub async fn compare_meanings(&self, meaning: &str, user_input: &str) -> ComparisonOutcome {
        if let Some(incomplete) = check_incomplete(user_input) {
            return ComparisonOutcome::Incomplete(incomplete);
        }

        let meaning_pos = parse_pos_input(meaning);
        let user_pos = parse_pos_input(user_input);

        let meaning_words = if meaning_pos.is_empty() {
            text::split_list(meaning)
        } else {
            meaning_pos.all_words()
        };
        let user_words = if user_pos.is_empty() {
            text::split_list(user_input)
        } else {
            user_pos.all_words()
        };

        // The four signals are independent and side-effect-free.
        let pos_score = scoring::pos_matching_score(&meaning_pos, &user_pos);
        let semantic = self
            .semantic
            .phrase_similarity(&meaning_words, &user_words)
            .await;
        let synonym = self.synonyms.score(&meaning_words, &user_words);
        let keyword = self.keywords.score(meaning, user_input).await;

        let signals = SignalScores::new(semantic, pos_score, synonym, keyword);
        let total_score = scoring::total_score(&signals);

        ComparisonOutcome::Scored(ComparisonReport {
            signals,
            total_score,
            meaning_words,
            user_words,
            meaning_pos,
            user_pos,
        })
    }

    /// Submit-answer evaluation (policy: embedding 0.7, structure 0.3)
    /// against the stored accepted meaning and the raw submission.
    pub async fn evaluate_answer(
        &self,
        accepted_meaning: &str,
        user_meaning: &str,
    ) -> EvaluationVerdict {
        let embedding_similarity = self.semantic.similarity(accepted_meaning, user_meaning).await;
        answer::build_verdict(embedding_similarity, accepted_meaning, user_meaning)
    }

    /// Word-by-word comparison breakdown, sorted by similarity descending.
    pub async fn compare_word_pairs(
        &self,
        meaning_words: &[String],
        user_words: &[String],
    ) -> Vec<WordPairComparison> {
        let matrix = self
            .semantic
            .cross_similarities(meaning_words, user_words)
            .await;

        let mut comparisons = Vec::with_capacity(meaning_words.len() * user_words.len());
        for (i, meaning_word) in meaning_words.iter().enumerate() {
            for (j, user_word) in user_words.iter().enumerate() {
                let similarity = matrix
                    .get(i)
                    .and_then(|row| row.get(j))
                    .copied()
                    .unwrap_or(0.0);
                comparisons.push(WordPairComparison {
                    meaning_word: meaning_word.clone(),
                    user_word: user_word.clone(),
                    similarity_score: similarity,
                    meaning_index: i,
                    user_index: j,
                    is_exact_match: meaning_word == user_word,
                    is_high_similarity: similarity > HIGH_PAIR_SIMILARITY,
                    is_medium_similarity: (LOW_PAIR_SIMILARITY..=HIGH_PAIR_SIMILARITY)
                        .contains(&similarity),
                    is_low_similarity: similarity < LOW_PAIR_SIMILARITY,
                });
            }
        }

        comparisons.sort_by(|a, b| {
            b.similarity_score
                .partial_cmp(&a.similarity_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        comparisons
    }
}
