//! Content-word extraction over the morphological tagger, feeding the
//! keyword-overlap signal.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::warn;

use crate::cache::LruCache;
use crate::providers::tagger::{MorphTagger, TaggedToken};

const CONTENT_TAGS: [&str; 3] = ["Noun", "Verb", "Adjective"];

pub struct KeywordExtractor {
    tagger: Arc<dyn MorphTagger>,
    cache: Mutex<LruCache<String, Vec<TaggedToken>>>,
}

impl KeywordExtractor {
    pub fn new(tagger: Arc<dyn MorphTagger>, cache_capacity: usize) -> Self {
        Self {
            tagger,
            cache: Mutex::new(LruCache::new(cache_capacity)),
        }
    }

    /// Morphological analysis with a bounded LRU cache over distinct inputs.
    /// Analyzer failures degrade to an empty tag sequence.
    pub async fn tagged(&self, text: &str) -> Vec<TaggedToken> {
        if let Some(tokens) = self.cache.lock().get(&text.to_string()) {
            return tokens;
        }

        let tokens = match self.tagger.tag(text).await {
            Ok(tokens) => tokens,
            Err(err) => {
                warn!(error = %err, "Morphological tagging failed, using empty analysis");
                Vec::new()
            }
        };

        self.cache.lock().put(text.to_string(), tokens.clone());
        tokens
    }

    /// Surface forms tagged noun, verb or adjective, deduplicated in first
    /// encounter order.
    pub async fn extract(&self, text: &str) -> Vec<String> {
        let tokens = self.tagged(text).await;
        let mut keywords: Vec<String> = Vec::new();
        for token in tokens {
            if CONTENT_TAGS.contains(&token.tag.as_str()) && !keywords.contains(&token.surface) {
                keywords.push(token.surface);
            }
        }
        keywords
    }

    /// Jaccard-style overlap between the two texts' keyword sets: exact
    /// string matches only, 0.0 when either set is empty.
    pub async fn score(&self, meaning_text: &str, user_text: &str) -> f64 {
        let meaning_keywords = self.extract(meaning_text).await;
        let user_keywords = self.extract(user_text).await;
        keyword_overlap(&meaning_keywords, &user_keywords)
    }
}

/// `matches / (|A| + |B| - matches)` with a divide-by-zero guard.
pub fn keyword_overlap(meaning_keywords: &[String], user_keywords: &[String]) -> f64 {
    if meaning_keywords.is_empty() || user_keywords.is_empty() {
        return 0.0;
    }

    let matches = meaning_keywords
        .iter()
        .filter(|keyword| user_keywords.contains(keyword))
        .count();

    let denominator = meaning_keywords.len() + user_keywords.len() - matches;
    if denominator == 0 {
        return 0.0;
    }
    matches as f64 / denominator as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::mock::MockTagger;

    fn extractor(tagger: MockTagger) -> KeywordExtractor {
        KeywordExtractor::new(Arc::new(tagger), 16)
    }

    #[tokio::test]
    async fn test_extract_keeps_content_words() {
        let tagger = MockTagger::new().with_analysis(
            "나는 사랑을 배운다",
            vec![
                ("나", "Pronoun"),
                ("는", "Josa"),
                ("사랑", "Noun"),
                ("을", "Josa"),
                ("배운다", "Verb"),
            ],
        );
        let extractor = extractor(tagger);
        assert_eq!(
            extractor.extract("나는 사랑을 배운다").await,
            vec!["사랑".to_string(), "배운다".to_string()]
        );
    }

    #[tokio::test]
    async fn test_extract_deduplicates() {
        let tagger = MockTagger::new().with_analysis(
            "사랑 사랑",
            vec![("사랑", "Noun"), ("사랑", "Noun")],
        );
        let extractor = extractor(tagger);
        assert_eq!(extractor.extract("사랑 사랑").await, vec!["사랑".to_string()]);
    }

    #[tokio::test]
    async fn test_tagger_failure_degrades_to_empty() {
        let extractor = extractor(MockTagger::failing());
        assert!(extractor.extract("사랑").await.is_empty());
        assert_eq!(extractor.score("사랑", "사랑").await, 0.0);
    }

    #[tokio::test]
    async fn test_score_jaccard() {
        let tagger = MockTagger::new()
            .with_analysis("사랑 애정", vec![("사랑", "Noun"), ("애정", "Noun")])
            .with_analysis("사랑 행복", vec![("사랑", "Noun"), ("행복", "Noun")]);
        let extractor = extractor(tagger);
        // One shared keyword over (2 + 2 - 1) total.
        let score = extractor.score("사랑 애정", "사랑 행복").await;
        assert!((score - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_overlap_empty_sets() {
        assert_eq!(keyword_overlap(&[], &["a".to_string()]), 0.0);
        assert_eq!(keyword_overlap(&["a".to_string()], &[]), 0.0);
    }

    #[test]
    fn test_overlap_identical_sets() {
        let set = vec!["a".to_string(), "b".to_string()];
        assert_eq!(keyword_overlap(&set, &set), 1.0);
    }
}
