//! daneo-eval: multi-signal evaluation of free-text vocabulary answers.
//!
//! Given an accepted meaning and a learner's submission, the engine combines
//! embedding-based semantic similarity with part-of-speech agreement, synonym
//! clusters and keyword overlap into a weighted score and a pass/fail verdict
//! with Korean-language feedback.
//!
//! External collaborators (the embedding model and the morphological tagger)
//! are injected behind the [`providers::Embedder`] and
//! [`providers::MorphTagger`] traits; everything else is deterministic and
//! side-effect-free.

pub mod answer;
pub mod cache;
pub mod config;
pub mod engine;
pub mod keywords;
pub mod lexicon;
pub mod logging;
pub mod pos;
pub mod providers;
pub mod scoring;
pub mod semantic;
pub mod synonyms;
pub mod text;

pub use answer::{EvaluationResult, EvaluationVerdict};
pub use config::EngineConfig;
pub use engine::{ComparisonOutcome, ComparisonReport, EvalEngine, WordPairComparison};
pub use scoring::SignalScores;
pub use synonyms::SynonymLexicon;
