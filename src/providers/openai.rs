use std::sync::Arc;

use futures::future::BoxFuture;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ImageProvider, ProviderError, ProviderResult};

const PROVIDER: &str = "openai";

/// Settings for the OpenAI images endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OpenAiConfig {
    /// API root without the trailing `/images/generations`.
    pub base_url: String,
    /// Image model name, `dall-e-3` by default.
    pub model: String,
    /// Requested dimensions such as `1024x1024`.
    pub size: String,
    /// `standard` or `hd`.
    pub quality: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".into(),
            model: "dall-e-3".into(),
            size: "1024x1024".into(),
            quality: "standard".into(),
        }
    }
}

#[derive(Serialize)]
struct GenerationRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u8,
    size: &'a str,
    quality: &'a str,
}

#[derive(Deserialize)]
struct GenerationResponse {
    #[serde(default)]
    data: Vec<GeneratedImage>,
}

#[derive(Deserialize)]
struct GeneratedImage {
    url: Option<String>,
}

/// Calls `POST {base_url}/images/generations` with bearer auth.
#[derive(Clone)]
pub struct OpenAiProvider {
    client: Client,
    endpoint: Arc<str>,
    api_key: Arc<str>,
    config: Arc<OpenAiConfig>,
}

impl OpenAiProvider {
    /// Build a client for `config`, authenticating with `api_key`.
    pub fn new(config: OpenAiConfig, api_key: impl Into<String>) -> ProviderResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|source| ProviderError::ClientBuilder { source })?;
        let endpoint = format!("{}/images/generations", config.base_url.trim_end_matches('/'));
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: Arc::from(api_key.into()),
            config: Arc::new(config),
        })
    }

    async fn request_image(&self, prompt: &str) -> ProviderResult<String> {
        let body = GenerationRequest {
            model: &self.config.model,
            prompt,
            n: 1,
            size: &self.config.size,
            quality: &self.config.quality,
        };
        let response = self
            .client
            .post(self.endpoint.as_ref())
            .bearer_auth(self.api_key.as_ref())
            .json(&body)
            .send()
            .await
            .map_err(|source| ProviderError::Request {
                provider: PROVIDER,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                provider: PROVIDER,
                status,
                body,
            });
        }

        let decoded: GenerationResponse =
            response
                .json()
                .await
                .map_err(|source| ProviderError::Request {
                    provider: PROVIDER,
                    source,
                })?;
        debug!(images = decoded.data.len(), "OpenAI generation answered");
        decoded
            .data
            .into_iter()
            .next()
            .and_then(|image| image.url)
            .ok_or(ProviderError::MissingImage { provider: PROVIDER })
    }
}

impl ImageProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    // the endpoint has no seed parameter; variation comes from the prompt suffix
    fn generate(&self, prompt: String, _seed: u32) -> BoxFuture<'static, ProviderResult<String>> {
        let provider = self.clone();
        Box::pin(async move { provider.request_image(&prompt).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_the_images_api() {
        let body = GenerationRequest {
            model: "dall-e-3",
            prompt: "a fox",
            n: 1,
            size: "1024x1024",
            quality: "standard",
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "model": "dall-e-3",
                "prompt": "a fox",
                "n": 1,
                "size": "1024x1024",
                "quality": "standard"
            })
        );
    }

    #[test]
    fn endpoint_ignores_trailing_slash() {
        let config = OpenAiConfig {
            base_url: "http://localhost:9999/v1/".into(),
            ..OpenAiConfig::default()
        };
        let provider = OpenAiProvider::new(config, "sk-test").unwrap();
        assert_eq!(
            provider.endpoint.as_ref(),
            "http://localhost:9999/v1/images/generations"
        );
    }

    #[test]
    fn first_url_is_taken() {
        let decoded: GenerationResponse = serde_json::from_str(
            r#"{"created":1,"data":[{"url":"https://img/1.png","revised_prompt":"x"}]}"#,
        )
        .unwrap();
        assert_eq!(decoded.data[0].url.as_deref(), Some("https://img/1.png"));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_request_error() {
        let config = OpenAiConfig {
            base_url: "http://127.0.0.1:9".into(),
            ..OpenAiConfig::default()
        };
        let provider = OpenAiProvider::new(config, "sk-test").unwrap();
        let err = provider.generate("a fox".into(), 1).await.unwrap_err();
        assert!(matches!(err, ProviderError::Request { provider: "openai", .. }));
    }
}
