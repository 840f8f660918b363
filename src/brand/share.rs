//! Shareable links that carry brand inputs in a query parameter.

use reqwest::Url;
use thiserror::Error;

use super::BrandInput;

/// Query parameter holding the JSON-encoded inputs.
pub const SHARE_PARAM: &str = "brand";

/// Failures building or reading share links.
#[derive(Debug, Error)]
pub enum ShareError {
    /// The configured base URL does not parse.
    #[error("invalid share base url `{base}`: {reason}")]
    InvalidBaseUrl {
        /// Configured value.
        base: String,
        /// Parser message.
        reason: String,
    },
    /// Inputs could not be serialized.
    #[error("failed to encode brand inputs")]
    Encode(#[source] serde_json::Error),
    /// The payload is not valid brand-input JSON.
    #[error("malformed share payload")]
    Decode(#[source] serde_json::Error),
}

/// Build `{base}?brand=<json>`, keeping any query the base already carries.
pub fn share_link(base: &str, input: &BrandInput) -> Result<String, ShareError> {
    let mut url = Url::parse(base).map_err(|err| ShareError::InvalidBaseUrl {
        base: base.to_string(),
        reason: err.to_string(),
    })?;
    let payload = serde_json::to_string(input).map_err(ShareError::Encode)?;
    url.query_pairs_mut().append_pair(SHARE_PARAM, &payload);
    Ok(url.into())
}

/// Decode an already percent-decoded `brand` parameter.
pub fn decode_share(payload: &str) -> Result<BrandInput, ShareError> {
    serde_json::from_str(payload).map_err(ShareError::Decode)
}

/// Pull the payload out of a full share link and decode it.
pub fn decode_share_link(link: &str) -> Result<BrandInput, ShareError> {
    let url = Url::parse(link).map_err(|err| ShareError::InvalidBaseUrl {
        base: link.to_string(),
        reason: err.to_string(),
    })?;
    let payload = url
        .query_pairs()
        .find(|(key, _)| key == SHARE_PARAM)
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default();
    decode_share(&payload)
}
