//! Embedding-based semantic similarity. One shared embedder instance serves
//! every call; provider failures are logged and degraded to 0.0 so the
//! aggregate score stays computable.

use std::sync::Arc;

use tracing::warn;

use crate::providers::embedding::{cosine_similarity, Embedder};

pub struct SemanticEngine {
    embedder: Arc<dyn Embedder>,
}

impl SemanticEngine {
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self { embedder }
    }

    /// Cosine similarity between two texts, in [-1, 1]; 0.0 on provider
    /// failure.
    pub async fn similarity(&self, text1: &str, text2: &str) -> f64 {
        let inputs = [text1.to_string(), text2.to_string()];
        match self.embedder.embed_batch(&inputs).await {
            Ok(vectors) if vectors.len() == 2 => {
                cosine_similarity(&vectors[0], &vectors[1]) as f64
            }
            Ok(_) => 0.0,
            Err(err) => {
                warn!(error = %err, "Embedding failed, similarity degraded to 0.0");
                0.0
            }
        }
    }

    /// Pairwise diagonal similarities of two equal-length text sequences.
    /// Returns zeros on provider failure or a length mismatch.
    pub async fn similarity_pairs(&self, left: &[String], right: &[String]) -> Vec<f64> {
        if left.len() != right.len() {
            warn!(
                left = left.len(),
                right = right.len(),
                "Batch similarity called with unequal lengths"
            );
            return vec![0.0; left.len().min(right.len())];
        }
        if left.is_empty() {
            return Vec::new();
        }

        let left_vectors = self.embedder.embed_batch(left).await;
        let right_vectors = self.embedder.embed_batch(right).await;
        match (left_vectors, right_vectors) {
            (Ok(a), Ok(b)) => a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| cosine_similarity(x, y) as f64)
                .collect(),
            (Err(err), _) | (_, Err(err)) => {
                warn!(error = %err, "Batch embedding failed, similarities degraded to 0.0");
                vec![0.0; left.len()]
            }
        }
    }

    /// Full similarity matrix between two word lists, row-major over
    /// `words_a`. Zeros on provider failure.
    pub async fn cross_similarities(
        &self,
        words_a: &[String],
        words_b: &[String],
    ) -> Vec<Vec<f64>> {
        if words_a.is_empty() || words_b.is_empty() {
            return Vec::new();
        }

        let vectors_a = self.embedder.embed_batch(words_a).await;
        let vectors_b = self.embedder.embed_batch(words_b).await;
        match (vectors_a, vectors_b) {
            (Ok(a), Ok(b)) => a
                .iter()
                .map(|x| {
                    b.iter()
                        .map(|y| cosine_similarity(x, y) as f64)
                        .collect()
                })
                .collect(),
            (Err(err), _) | (_, Err(err)) => {
                warn!(error = %err, "Batch embedding failed, similarities degraded to 0.0");
                vec![vec![0.0; words_b.len()]; words_a.len()]
            }
        }
    }

    /// Best single-pair similarity between two word lists; 0.0 when either
    /// list is empty. A single strongly matching pair should dominate, so
    /// this is a max, not an average.
    pub async fn phrase_similarity(&self, words_a: &[String], words_b: &[String]) -> f64 {
        let matrix = self.cross_similarities(words_a, words_b).await;
        matrix
            .iter()
            .flatten()
            .fold(0.0f64, |best, &sim| best.max(sim))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::mock::MockEmbedder;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_self_similarity_is_one() {
        let engine = SemanticEngine::new(Arc::new(MockEmbedder::new()));
        let score = engine.similarity("사랑", "사랑").await;
        assert!((score - 1.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_orthogonal_vectors() {
        let embedder = MockEmbedder::new()
            .with_vector("a", vec![1.0, 0.0])
            .with_vector("b", vec![0.0, 1.0]);
        let engine = SemanticEngine::new(Arc::new(embedder));
        assert_eq!(engine.similarity("a", "b").await, 0.0);
    }

    #[tokio::test]
    async fn test_failure_degrades_to_zero() {
        let engine = SemanticEngine::new(Arc::new(MockEmbedder::failing()));
        assert_eq!(engine.similarity("a", "b").await, 0.0);
        assert_eq!(
            engine.phrase_similarity(&words(&["a"]), &words(&["b"])).await,
            0.0
        );
        assert_eq!(
            engine.similarity_pairs(&words(&["a"]), &words(&["b"])).await,
            vec![0.0]
        );
    }

    #[tokio::test]
    async fn test_similarity_pairs_diagonal() {
        let embedder = MockEmbedder::new()
            .with_vector("a", vec![1.0, 0.0])
            .with_vector("b", vec![0.0, 1.0])
            .with_vector("c", vec![1.0, 0.0])
            .with_vector("d", vec![1.0, 1.0]);
        let engine = SemanticEngine::new(Arc::new(embedder));
        let scores = engine
            .similarity_pairs(&words(&["a", "b"]), &words(&["c", "d"]))
            .await;
        assert!((scores[0] - 1.0).abs() < 1e-6);
        let expected = 1.0 / 2.0f64.sqrt();
        assert!((scores[1] - expected).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_phrase_similarity_takes_maximum() {
        let embedder = MockEmbedder::new()
            .with_vector("x", vec![1.0, 0.0])
            .with_vector("far", vec![0.0, 1.0])
            .with_vector("near", vec![1.0, 0.1]);
        let engine = SemanticEngine::new(Arc::new(embedder));
        let single = engine.similarity("x", "near").await;
        let phrase = engine
            .phrase_similarity(&words(&["x"]), &words(&["far", "near"]))
            .await;
        assert!((phrase - single).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_phrase_similarity_empty_lists() {
        let engine = SemanticEngine::new(Arc::new(MockEmbedder::new()));
        assert_eq!(engine.phrase_similarity(&[], &words(&["a"])).await, 0.0);
        assert_eq!(engine.phrase_similarity(&words(&["a"]), &[]).await, 0.0);
    }
}
