use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{env_string, env_u64};

const DEFAULT_MODEL: &str = "paraphrase-multilingual-MiniLM-L12-v2";
const DEFAULT_API_ENDPOINT: &str = "https://api.openai.com/v1";
const DEFAULT_TIMEOUT_MS: u64 = 60_000;

#[derive(Debug, Clone)]
pub struct EmbeddingConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_endpoint: String,
    pub timeout: Duration,
}

impl EmbeddingConfig {
    pub fn from_env() -> Self {
        let api_key = env_string("EMBEDDING_API_KEY");
        let model = env_string("EMBEDDING_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_endpoint = normalize_endpoint(
            env_string("EMBEDDING_API_ENDPOINT")
                .or_else(|| env_string("EMBEDDING_BASE_URL"))
                .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string()),
        );
        let timeout =
            Duration::from_millis(env_u64("EMBEDDING_TIMEOUT").unwrap_or(DEFAULT_TIMEOUT_MS));

        Self {
            api_key,
            model,
            api_endpoint,
            timeout,
        }
    }
}

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("Embedding not configured: {0}")]
    NotConfigured(&'static str),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("empty embedding response")]
    Empty,
    #[error("count mismatch: expected {expected}, got {actual}")]
    CountMismatch { expected: usize, actual: usize },
    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

/// Sentence-embedding collaborator. The engine never inspects vector
/// dimensionality; it only hands vectors back to [`cosine_similarity`].
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, input: &str) -> Result<Vec<f32>, EmbeddingError>;
    async fn embed_batch(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError>;
}

/// Cosine similarity between two embedding vectors; 0.0 when either vector
/// has zero norm or the lengths disagree.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// OpenAI-compatible `/embeddings` client. One instance is constructed at
/// startup and shared; failures surface as `Err` and are degraded by the
/// caller, never retried here.
#[derive(Clone)]
pub struct HttpEmbeddingProvider {
    config: EmbeddingConfig,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingItem>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingItem {
    embedding: Vec<f32>,
}

impl HttpEmbeddingProvider {
    pub fn new(config: EmbeddingConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { config, client }
    }

    pub fn from_env() -> Self {
        Self::new(EmbeddingConfig::from_env())
    }

    pub fn is_available(&self) -> bool {
        self.config
            .api_key
            .as_deref()
            .is_some_and(|v| !v.trim().is_empty())
            && !self.config.model.trim().is_empty()
            && !self.config.api_endpoint.trim().is_empty()
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    async fn request(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .ok_or(EmbeddingError::NotConfigured("EMBEDDING_API_KEY"))?;

        let url = format!(
            "{}/embeddings",
            self.config.api_endpoint.trim_end_matches('/')
        );
        let payload = EmbeddingRequest {
            model: &self.config.model,
            input: inputs,
        };

        let resp = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(EmbeddingError::HttpStatus { status, body });
        }

        let resp = resp.json::<EmbeddingResponse>().await?;
        if resp.data.is_empty() {
            return Err(EmbeddingError::Empty);
        }
        if resp.data.len() != inputs.len() {
            return Err(EmbeddingError::CountMismatch {
                expected: inputs.len(),
                actual: resp.data.len(),
            });
        }
        Ok(resp.data.into_iter().map(|item| item.embedding).collect())
    }
}

#[async_trait]
impl Embedder for HttpEmbeddingProvider {
    async fn embed(&self, input: &str) -> Result<Vec<f32>, EmbeddingError> {
        let inputs = vec![input.to_string()];
        let mut vectors = self.request(&inputs).await?;
        vectors.pop().ok_or(EmbeddingError::Empty)
    }

    async fn embed_batch(&self, inputs: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if inputs.is_empty() {
            return Ok(Vec::new());
        }
        self.request(inputs).await
    }
}

fn normalize_endpoint(endpoint: String) -> String {
    let trimmed = endpoint.trim().trim_end_matches('/');
    if trimmed.ends_with("/v1") || trimmed.contains("/v1/") {
        trimmed.to_string()
    } else {
        format!("{trimmed}/v1")
    }
}
