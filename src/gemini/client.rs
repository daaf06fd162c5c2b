use super::{extract::extract_json, types::*};
use crate::{Error, Result, config::GeminiConfig};
use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Header carrying the credential. Keeping it out of the URL keeps it out
/// of access logs.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

const MAX_ERROR_BODY_CHARS: usize = 512;

/// Turns a bill image into the structured data the model extracted from it.
#[async_trait]
pub trait BillExtractor: Send + Sync {
    async fn extract(&self, image: &[u8], mime_type: &str) -> Result<Value>;
}

pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    prompt: String,
}

impl GeminiClient {
    /// Fails with [`Error::MissingCredential`] when no API key is configured.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(Error::MissingCredential)?;

        let mut builder = reqwest::Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder.build()?;

        let endpoint = format!(
            "{}/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.model
        );

        debug!("Creating Gemini client for endpoint: {}", endpoint);

        Ok(Self {
            client,
            endpoint,
            api_key,
            prompt: config.prompt,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        debug!(
            "Gemini responded with status {} ({} bytes)",
            status,
            body.len()
        );

        if !status.is_success() {
            warn!("Gemini returned status {}", status);
            return Err(Error::response_parse(format!(
                "status {}: {}",
                status,
                truncate(&body, MAX_ERROR_BODY_CHARS)
            )));
        }

        serde_json::from_str(&body).map_err(|e| Error::response_parse(e.to_string()))
    }
}

#[async_trait]
impl BillExtractor for GeminiClient {
    async fn extract(&self, image: &[u8], mime_type: &str) -> Result<Value> {
        let encoded = STANDARD.encode(image);
        debug!(
            "Encoded {} image bytes as {} base64 chars ({})",
            image.len(),
            encoded.len(),
            mime_type
        );

        let request = GenerateContentRequest::bill_analysis(&self.prompt, mime_type, encoded);
        let response = self.generate_content(&request).await?;

        let text = response.first_text().ok_or(Error::EmptyResponse)?;
        debug!("Gemini response text: {}", text);

        let json_text = extract_json(text)?;
        serde_json::from_str(json_text).map_err(Error::DataParse)
    }
}

fn truncate(body: &str, max_chars: usize) -> String {
    match body.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
