use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{env_string, env_u64};

const DEFAULT_API_ENDPOINT: &str = "http://localhost:5001";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// One token of a morphological analysis: the surface form and the
/// analyzer's tag (`Noun`, `Verb`, `Josa`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaggedToken {
    pub surface: String,
    pub tag: String,
}

#[derive(Debug, Clone)]
pub struct TaggerConfig {
    pub api_endpoint: String,
    pub timeout: Duration,
}

impl TaggerConfig {
    pub fn from_env() -> Self {
        let api_endpoint = env_string("TAGGER_API_ENDPOINT")
            .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeout = Duration::from_millis(env_u64("TAGGER_TIMEOUT").unwrap_or(DEFAULT_TIMEOUT_MS));
        Self {
            api_endpoint,
            timeout,
        }
    }
}

#[derive(Debug, Error)]
pub enum TaggerError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("analyzer unavailable: {0}")]
    Unavailable(String),
}

/// Korean morphological-analysis collaborator. A failed call yields an
/// empty tag sequence at the call sites, never a hard evaluation failure.
#[async_trait]
pub trait MorphTagger: Send + Sync {
    async fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, TaggerError>;
}

/// HTTP client for a morphological-analysis service exposing
/// `POST /analyze` with `{ "text": ... }` → `{ "tokens": [...] }`.
#[derive(Clone)]
pub struct HttpMorphTagger {
    config: TaggerConfig,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    tokens: Vec<TaggedToken>,
}

impl HttpMorphTagger {
    pub fn new(config: TaggerConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { config, client }
    }

    pub fn from_env() -> Self {
        Self::new(TaggerConfig::from_env())
    }
}

#[async_trait]
impl MorphTagger for HttpMorphTagger {
    async fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, TaggerError> {
        let url = format!("{}/analyze", self.config.api_endpoint);
        let resp = self
            .client
            .post(&url)
            .json(&AnalyzeRequest { text })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TaggerError::HttpStatus { status, body });
        }

        let resp = resp.json::<AnalyzeResponse>().await?;
        Ok(resp.tokens)
    }
}
