//! HTTP transport to the n8n webhooks.

use crate::response::WebhookResponse;
use async_trait::async_trait;
use hookrelay_common::{RelayError, Result};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use tracing::{debug, instrument, warn};
use url::Url;

/// Performs the single outbound call of a relay invocation.
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    /// Issues a GET to `url` and decodes the body as JSON.
    ///
    /// Non-success statuses map to [`RelayError::Status`], undecodable bodies
    /// to [`RelayError::Decode`], everything else to [`RelayError::Transport`].
    async fn fetch(&self, url: &Url) -> Result<WebhookResponse>;
}

/// reqwest-backed transport. No retries and no timeout beyond reqwest's defaults.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with its own connection pool.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("hookrelay/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RelayError::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl WebhookTransport for HttpTransport {
    #[instrument(skip(self), fields(url = %url))]
    async fn fetch(&self, url: &Url) -> Result<WebhookResponse> {
        let response = self
            .client
            .get(url.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Webhook answered with {}", status);
            return Err(RelayError::Status(status.as_u16()));
        }

        debug!("Webhook answered with {}", status);
        response
            .json::<WebhookResponse>()
            .await
            .map_err(|e| RelayError::Decode(e.to_string()))
    }
}
