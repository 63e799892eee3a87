//! Synonym clusters and the synonym-overlap signal.
//!
//! The cluster table is static configuration data embedded at compile time;
//! lookup is exact string membership, never fuzzy.

use serde::{Deserialize, Serialize};

const BUILTIN_CLUSTERS: &str = include_str!("../data/synonyms.json");

/// Canonical concept word with its accepted surface synonyms.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynonymCluster {
    pub canonical: String,
    pub synonyms: Vec<String>,
}

impl SynonymCluster {
    fn contains(&self, word: &str) -> bool {
        self.canonical == word || self.synonyms.iter().any(|s| s == word)
    }
}

#[derive(Debug, Clone)]
pub struct SynonymLexicon {
    clusters: Vec<SynonymCluster>,
}

impl SynonymLexicon {
    /// Loads the built-in Korean emotion/action concept table.
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_CLUSTERS).expect("builtin synonym table is valid JSON")
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let clusters = serde_json::from_str(json)?;
        Ok(Self { clusters })
    }

    pub fn from_clusters(clusters: Vec<SynonymCluster>) -> Self {
        Self { clusters }
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// True when both words belong to the same cluster (canonical key or
    /// listed synonym). The first cluster containing both wins; a pair is
    /// never counted against multiple entries.
    pub fn same_cluster(&self, a: &str, b: &str) -> bool {
        self.clusters
            .iter()
            .any(|cluster| cluster.contains(a) && cluster.contains(b))
    }

    /// Fraction of (meaning, user) word pairs that match exactly or through
    /// a shared cluster; 0.0 when either list is empty.
    pub fn score(&self, meaning_words: &[String], user_words: &[String]) -> f64 {
        let total_pairs = meaning_words.len() * user_words.len();
        if total_pairs == 0 {
            return 0.0;
        }

        let mut matches = 0usize;
        for meaning_word in meaning_words {
            for user_word in user_words {
                if meaning_word == user_word || self.same_cluster(meaning_word, user_word) {
                    matches += 1;
                }
            }
        }
        matches as f64 / total_pairs as f64
    }
}

impl Default for SynonymLexicon {
    fn default() -> Self {
        Self::builtin()
    }
}
