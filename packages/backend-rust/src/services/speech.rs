use thiserror::Error;

use crate::config::TtsConfig;

const DEFAULT_CONTENT_TYPE: &str = "audio/mpeg";

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("speech provider returned HTTP {status}")]
    UpstreamStatus { status: reqwest::StatusCode },
}

/// Passthrough client for the text-to-speech provider
#[derive(Clone)]
pub struct SpeechProxy {
    config: TtsConfig,
    client: reqwest::Client,
}

/// Upstream audio ready to be streamed to the caller
pub struct SpeechAudio {
    pub content_type: String,
    pub response: reqwest::Response,
}

impl SpeechProxy {
    pub fn new(config: TtsConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { config, client }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Request synthesized speech for `text` in `lang`. No retries, no caching.
    pub async fn fetch(&self, text: &str, lang: &str) -> Result<SpeechAudio, SpeechError> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[
                ("ie", "UTF-8"),
                ("q", text),
                ("tl", lang),
                ("client", self.config.client.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpeechError::UpstreamStatus { status });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();

        Ok(SpeechAudio {
            content_type,
            response,
        })
    }
}
