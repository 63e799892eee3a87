//! Deterministic in-memory providers for tests and offline runs.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;

use crate::providers::embedding::{Embedder, EmbeddingError};
use crate::providers::tagger::{MorphTagger, TaggedToken, TaggerError};

const MOCK_DIMENSION: usize = 8;

/// Embedder returning fixed vectors per text. Unregistered texts get a
/// deterministic pseudo-vector derived from the text itself, so
/// `embed(t)` is stable across calls and identical texts compare at 1.0.
#[derive(Debug, Default, Clone)]
pub struct MockEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    fail: bool,
}

impl MockEmbedder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            vectors: HashMap::new(),
            fail: true,
        }
    }

    pub fn with_vector(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.to_string(), vector);
        self
    }

    fn vector_for(&self, text: &str) -> Vec<f32> {
        if let Some(vector) = self.vectors.get(text) {
            return vector.clone();
        }
        (0..MOCK_DIMENSION)
            .map(|i| {
                let mut hasher = DefaultHasher::new();
                text.hash(&mut hasher);
                i.hash(&mut hasher);
                let raw = hasher.finish() % 1000;
                raw as f32 / 1000.0 + 0.001
            })
            .collect()
    }
}

#[async_trait]
impl Embedder for MockEmbedder {
    async fn embed(&self, input: &str) -> Result<Vec<f32>, EmbeddingError> {
        if self.fail {
            return Err(EmbeddingError::Unavailable("mock failure".to_string()));
        }
        Ok(self.vector_for(input))
    }

    async fn embed_batch(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if self.fail {
            return Err(EmbeddingError::Unavailable("mock failure".to_string()));
        }
        Ok(inputs.iter().map(|text| self.vector_for(text)).collect())
    }
}

/// Tagger returning registered token sequences. Unregistered texts fall
/// back to whitespace tokens tagged `Noun`.
#[derive(Debug, Default, Clone)]
pub struct MockTagger {
    analyses: HashMap<String, Vec<TaggedToken>>,
    fail: bool,
}

impl MockTagger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            analyses: HashMap::new(),
            fail: true,
        }
    }

    pub fn with_analysis(mut self, text: &str, tokens: Vec<(&str, &str)>) -> Self {
        let tokens = tokens
            .into_iter()
            .map(|(surface, tag)| TaggedToken {
                surface: surface.to_string(),
                tag: tag.to_string(),
            })
            .collect();
        self.analyses.insert(text.to_string(), tokens);
        self
    }
}

#[async_trait]
impl MorphTagger for MockTagger {
    async fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, TaggerError> {
        if self.fail {
            return Err(TaggerError::Unavailable("mock failure".to_string()));
        }
        if let Some(tokens) = self.analyses.get(text) {
            return Ok(tokens.clone());
        }
        Ok(text
            .split_whitespace()
            .map(|word| TaggedToken {
                surface: word.to_string(),
                tag: "Noun".to_string(),
            })
            .collect())
    }
}
