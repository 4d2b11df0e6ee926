use std::time::Duration;

use crate::error::FetchError;
use crate::settings::FetchOptions;
use crate::transport::Transport;

/// HTTP client for the PokeAPI REST service.
pub struct PokeApiClient {
    http: reqwest::Client,
}

impl PokeApiClient {
    /// Build a client with the request timeout from `options`.
    pub fn new(options: &FetchOptions) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(options.timeout_secs))
            .user_agent(concat!("pokedex-cards/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }
}

impl Transport for PokeApiClient {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        log::debug!("GET {}", url);

        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(resp.text().await?)
    }
}
