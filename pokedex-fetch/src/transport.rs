//! The seam between the fetchers and the network.
//!
//! [`PokeApiClient`](crate::PokeApiClient) is the production implementation.
//! Tests substitute an in-memory transport that serves canned bodies.

use serde::de::DeserializeOwned;

use crate::error::FetchError;

/// Number of body characters quoted in parse errors.
const PREVIEW_CHARS: usize = 200;

/// Retrieves the body of a resource by locator.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// GET `url` and return the body text of a successful response.
    ///
    /// Non-success statuses must be reported as [`FetchError::Status`].
    async fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

/// GET `url` and decode the body as JSON.
///
/// Bodies that do not match `T` become [`FetchError::Malformed`].
pub async fn get_json<T, R>(transport: &R, url: &str) -> Result<T, FetchError>
where
    T: DeserializeOwned,
    R: Transport,
{
    let text = transport.get_text(url).await?;
    serde_json::from_str(&text).map_err(|e| {
        let preview: String = text.chars().take(PREVIEW_CHARS).collect();
        FetchError::malformed(url, format!("{e}. Response: {preview}"))
    })
}
