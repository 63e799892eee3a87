//! External collaborators: the sentence-embedding model and the Korean
//! morphological tagger, each behind a trait so the engine can be driven by
//! an HTTP-backed service in production and a mock in tests.

pub mod embedding;
pub mod mock;
pub mod tagger;

pub use embedding::{cosine_similarity, Embedder, EmbeddingConfig, EmbeddingError, HttpEmbeddingProvider};
pub use tagger::{HttpMorphTagger, MorphTagger, TaggedToken, TaggerConfig, TaggerError};
