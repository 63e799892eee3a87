//! Engine configuration, resolved once at startup from the environment and
//! threaded through explicitly; no ambient globals.

use crate::cache::DEFAULT_CAPACITY;
use crate::providers::embedding::EmbeddingConfig;
use crate::providers::tagger::TaggerConfig;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub embedding: EmbeddingConfig,
    pub tagger: TaggerConfig,
    pub tag_cache_capacity: usize,
    pub log_level: String,
}

impl EngineConfig {
    pub fn from_env() -> Self {
        let tag_cache_capacity = env_u64("TAG_CACHE_CAPACITY")
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_CAPACITY);
        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            embedding: EmbeddingConfig::from_env(),
            tagger: TaggerConfig::from_env(),
            tag_cache_capacity,
            log_level,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

pub(crate) fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

pub(crate) fn env_u64(key: &str) -> Option<u64> {
    env_string(key)?.parse().ok()
}
