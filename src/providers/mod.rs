//! Image providers the logo generator can draw from.

/// Provider error types.
pub mod error;
/// OpenAI images API client.
pub mod openai;
/// Keyless Pollinations URL builder.
pub mod pollinations;

use futures::future::BoxFuture;

pub use self::error::{ProviderError, ProviderResult};
pub use self::openai::{OpenAiConfig, OpenAiProvider};
pub use self::pollinations::{PollinationsConfig, PollinationsProvider};

/// A backend that turns a text prompt into a hosted image URL.
pub trait ImageProvider: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;
    /// Resolve `prompt` to an image URL. `seed` keeps variations distinct where
    /// the provider supports it.
    fn generate(&self, prompt: String, seed: u32) -> BoxFuture<'static, ProviderResult<String>>;
}
