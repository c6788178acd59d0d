use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::domain::errors::RegistrarError;
use crate::domain::ports::EventRegistrar;
use crate::domain::registration::{RegistrantRequest, RegistrantResponse};

pub const DEFAULT_SEQUEL_API_URL: &str = "https://api.introvoke.com";

// Thin wrapper around reqwest for the event service registration API.
// No timeout is set: a hung upstream hangs the proxied request with it.
#[derive(Clone)]
pub struct SequelClient {
    http: Client,
    pub base_url: String,
}

// Error bodies are best-effort; anything unreadable is treated as `{}`.
#[derive(Debug, Default, Deserialize)]
struct UpstreamErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl SequelClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn registrant_url(&self, event_id: &str) -> Result<Url, RegistrarError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| RegistrarError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| RegistrarError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["api", "v3", "events", event_id, "registrant"]);
        Ok(url)
    }
}

#[async_trait]
impl EventRegistrar for SequelClient {
    async fn register(
        &self,
        event_id: &str,
        registrant: RegistrantRequest,
    ) -> Result<RegistrantResponse, RegistrarError> {
        // Compose the registrant URL and POST the registrant payload.
        let url = self.registrant_url(event_id)?;
        let res = self
            .http
            .post(url)
            .json(&registrant)
            .send()
            .await
            .map_err(RegistrarError::Transport)?;
        let status = res.status();

        if !status.is_success() {
            let body = res.json::<UpstreamErrorBody>().await.unwrap_or_default();
            return Err(RegistrarError::Upstream {
                status,
                message: body.message.unwrap_or_else(|| "Unknown error".to_string()),
            });
        }

        res.json::<RegistrantResponse>()
            .await
            .map_err(RegistrarError::Decode)
    }
}
