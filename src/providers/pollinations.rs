use futures::future::{self, BoxFuture, FutureExt};
use reqwest::Url;
use serde::Deserialize;

use super::{ImageProvider, ProviderError, ProviderResult};

const PROVIDER: &str = "pollinations";
const IMAGE_SIZE: u32 = 1024;

/// Settings for the keyless fallback provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PollinationsConfig {
    /// Whether the fallback joins the provider chain.
    pub enabled: bool,
    /// Prompt endpoint; the prompt is appended as the last path segment.
    pub base_url: String,
}

impl Default for PollinationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://image.pollinations.ai/prompt".into(),
        }
    }
}

/// Builds a direct image URL; the image renders when the client fetches it.
#[derive(Debug, Clone)]
pub struct PollinationsProvider {
    base: Url,
}

impl PollinationsProvider {
    /// Validate the configured base URL.
    pub fn new(config: &PollinationsConfig) -> ProviderResult<Self> {
        let base = Url::parse(&config.base_url).map_err(|err| ProviderError::InvalidUrl {
            url: config.base_url.clone(),
            reason: err.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(ProviderError::InvalidUrl {
                url: config.base_url.clone(),
                reason: "url cannot carry path segments".into(),
            });
        }
        Ok(Self { base })
    }

    /// Square image URL for `prompt`, pinned to `seed` and without a watermark.
    pub fn image_url(&self, prompt: &str, seed: u32) -> String {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(prompt);
        }
        url.query_pairs_mut()
            .append_pair("width", &IMAGE_SIZE.to_string())
            .append_pair("height", &IMAGE_SIZE.to_string())
            .append_pair("seed", &seed.to_string())
            .append_pair("nologo", "true");
        url.into()
    }
}

impl ImageProvider for PollinationsProvider {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    fn generate(&self, prompt: String, seed: u32) -> BoxFuture<'static, ProviderResult<String>> {
        future::ready(Ok(self.image_url(&prompt, seed))).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_is_percent_encoded_into_the_path() {
        let provider = PollinationsProvider::new(&PollinationsConfig::default()).unwrap();
        let url = provider.image_url("Design a fox/owl logo (variation 2)", 42);
        assert!(url.starts_with(
            "https://image.pollinations.ai/prompt/Design%20a%20fox%2Fowl%20logo%20(variation%202)?"
        ));
        assert!(url.ends_with("width=1024&height=1024&seed=42&nologo=true"));
    }

    #[test]
    fn malformed_base_is_rejected() {
        let config = PollinationsConfig {
            enabled: true,
            base_url: "mailto:someone".into(),
        };
        assert!(matches!(
            PollinationsProvider::new(&config),
            Err(ProviderError::InvalidUrl { .. })
        ));
    }

    #[tokio::test]
    async fn generation_never_touches_the_network() {
        let provider = PollinationsProvider::new(&PollinationsConfig::default()).unwrap();
        let url = provider.generate("fox".into(), 7).await.unwrap();
        assert!(url.contains("/prompt/fox?"));
    }
}
