use reqwest::StatusCode;
use thiserror::Error;

/// Convenient result alias returning [`ProviderError`] failures.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Failures raised while asking a provider for an image.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Building the HTTP client failed.
    #[error("failed to build HTTP client")]
    ClientBuilder {
        /// Underlying reqwest failure.
        #[source]
        source: reqwest::Error,
    },
    /// The request could not be sent or its body could not be read.
    #[error("request to {provider} failed")]
    Request {
        /// Provider that issued the request.
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },
    /// The provider answered with a non-success status.
    #[error("{provider} returned status {status}: {body}")]
    Status {
        /// Provider that answered.
        provider: &'static str,
        /// HTTP status received.
        status: StatusCode,
        /// Response body, for diagnostics.
        body: String,
    },
    /// The response decoded but held no image URL.
    #[error("{provider} response contained no image url")]
    MissingImage {
        /// Provider that answered.
        provider: &'static str,
    },
    /// A configured base URL could not be parsed.
    #[error("invalid base url `{url}`: {reason}")]
    InvalidUrl {
        /// Offending configuration value.
        url: String,
        /// Parser message.
        reason: String,
    },
}
