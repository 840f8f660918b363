use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    config::AppConfig,
    dto::logo::LogoResponse,
    error::ServiceError,
    providers::{ImageProvider, OpenAiProvider, PollinationsProvider, ProviderResult},
    state::SharedState,
};

/// Upper bound on variations per request.
pub const MAX_VARIATIONS: u8 = 4;

/// Ordered chain of image providers; earlier providers win.
#[derive(Clone, Default)]
pub struct LogoGenerator {
    providers: Vec<Arc<dyn ImageProvider>>,
}

impl LogoGenerator {
    /// Chain tried in the given order.
    pub fn new(providers: Vec<Arc<dyn ImageProvider>>) -> Self {
        Self { providers }
    }

    /// OpenAI first when a key is present, then the keyless fallback when enabled.
    pub fn from_config(config: &AppConfig) -> ProviderResult<Self> {
        let mut providers: Vec<Arc<dyn ImageProvider>> = Vec::new();
        if let Some(key) = &config.openai_api_key {
            providers.push(Arc::new(OpenAiProvider::new(config.openai.clone(), key.clone())?));
        }
        if config.fallback.enabled {
            providers.push(Arc::new(PollinationsProvider::new(&config.fallback)?));
        }
        Ok(Self::new(providers))
    }

    /// True when no provider is configured.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Provider names in chain order, for health reporting.
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Generate `n` variations of `prompt` (clamped to `1..=MAX_VARIATIONS`).
    ///
    /// Each variation takes the first provider that succeeds. Variations where
    /// every provider fails are dropped; an empty overall result is an error.
    pub async fn generate(&self, prompt: &str, n: u8) -> Result<Vec<String>, ServiceError> {
        if self.providers.is_empty() {
            return Err(ServiceError::Unavailable(
                "no image provider is configured".into(),
            ));
        }

        let count = n.clamp(1, MAX_VARIATIONS);
        let mut images = Vec::with_capacity(usize::from(count));
        for index in 0..count {
            let prompt = variation_prompt(prompt, index);
            let seed: u32 = rand::random();
            for provider in &self.providers {
                match provider.generate(prompt.clone(), seed).await {
                    Ok(url) => {
                        images.push(url);
                        break;
                    }
                    Err(err) => {
                        warn!(
                            provider = provider.name(),
                            variation = index + 1,
                            error = %err,
                            "image generation failed"
                        );
                    }
                }
            }
        }

        if images.is_empty() {
            return Err(ServiceError::Upstream("all image generations failed".into()));
        }
        info!(requested = count, produced = images.len(), "logo images generated");
        Ok(images)
    }
}

/// Suffix every variation after the first so providers return distinct images.
pub fn variation_prompt(prompt: &str, index: u8) -> String {
    if index == 0 {
        prompt.to_string()
    } else {
        format!("{prompt} (variation {})", index + 1)
    }
}

/// Run the configured provider chain for a caller-supplied prompt.
pub async fn generate_logos(
    state: &SharedState,
    prompt: &str,
    n: u32,
) -> Result<LogoResponse, ServiceError> {
    let n = u8::try_from(n).unwrap_or(MAX_VARIATIONS);
    let images = state.logos().generate(prompt.trim(), n).await?;
    Ok(LogoResponse { images })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use futures::future::{self, BoxFuture, FutureExt};

    use super::*;
    use crate::providers::ProviderError;

    /// Records prompts and fails on the listed call indices.
    struct Scripted {
        name: &'static str,
        fail_on: Vec<usize>,
        calls: Mutex<Vec<String>>,
    }

    impl Scripted {
        fn new(name: &'static str, fail_on: Vec<usize>) -> Arc<Self> {
            Arc::new(Self {
                name,
                fail_on,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn prompts(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl ImageProvider for Scripted {
        fn name(&self) -> &'static str {
            self.name
        }

        fn generate(&self, prompt: String, _seed: u32) -> BoxFuture<'static, ProviderResult<String>> {
            let mut calls = self.calls.lock().unwrap();
            let index = calls.len();
            calls.push(prompt);
            let result = if self.fail_on.contains(&index) {
                Err(ProviderError::MissingImage { provider: self.name })
            } else {
                Ok(format!("https://{}/{index}.png", self.name))
            };
            future::ready(result).boxed()
        }
    }

    #[test]
    fn variations_are_suffixed_after_the_first() {
        assert_eq!(variation_prompt("fox", 0), "fox");
        assert_eq!(variation_prompt("fox", 1), "fox (variation 2)");
        assert_eq!(variation_prompt("fox", 3), "fox (variation 4)");
    }

    #[tokio::test]
    async fn count_is_clamped() {
        let primary = Scripted::new("primary", vec![]);
        let generator = LogoGenerator::new(vec![primary.clone() as Arc<dyn ImageProvider>]);

        assert_eq!(generator.generate("fox", 9).await.unwrap().len(), 4);
        assert_eq!(generator.generate("fox", 0).await.unwrap().len(), 1);
        assert_eq!(primary.prompts()[3], "fox (variation 4)");
    }

    #[tokio::test]
    async fn failed_variations_fall_through_to_the_next_provider() {
        let primary = Scripted::new("primary", vec![1]);
        let fallback = Scripted::new("fallback", vec![]);
        let generator = LogoGenerator::new(vec![
            primary.clone() as Arc<dyn ImageProvider>,
            fallback.clone() as Arc<dyn ImageProvider>,
        ]);

        let images = generator.generate("fox", 3).await.unwrap();
        assert_eq!(
            images,
            vec![
                "https://primary/0.png",
                "https://fallback/0.png",
                "https://primary/2.png",
            ]
        );
        assert_eq!(fallback.prompts(), vec!["fox (variation 2)"]);
    }

    #[tokio::test]
    async fn partial_failures_are_skipped() {
        let only = Scripted::new("only", vec![0, 2]);
        let generator = LogoGenerator::new(vec![only as Arc<dyn ImageProvider>]);
        let images = generator.generate("fox", 3).await.unwrap();
        assert_eq!(images, vec!["https://only/1.png"]);
    }

    #[tokio::test]
    async fn total_failure_and_empty_chain_are_errors() {
        let broken = Scripted::new("broken", vec![0, 1]);
        let generator = LogoGenerator::new(vec![broken as Arc<dyn ImageProvider>]);
        assert!(matches!(
            generator.generate("fox", 2).await,
            Err(ServiceError::Upstream(_))
        ));

        assert!(matches!(
            LogoGenerator::default().generate("fox", 1).await,
            Err(ServiceError::Unavailable(_))
        ));
    }

    #[test]
    fn chain_follows_configuration() {
        let mut config = AppConfig::default();
        assert_eq!(LogoGenerator::from_config(&config).unwrap().provider_names(), vec!["pollinations"]);

        config.openai_api_key = Some("sk-test".into());
        assert_eq!(
            LogoGenerator::from_config(&config).unwrap().provider_names(),
            vec!["openai", "pollinations"]
        );

        config.fallback.enabled = false;
        config.openai_api_key = None;
        assert!(LogoGenerator::from_config(&config).unwrap().is_empty());
    }
}
