use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::domain::content::{LANDING_PAGE_CONTENT_TYPE, LandingPageEntry};
use crate::domain::errors::ContentSourceError;
use crate::domain::ports::ContentSource;

pub const DEFAULT_CONTENTFUL_API_URL: &str = "https://cdn.contentful.com";
pub const DEFAULT_CONTENTFUL_ENVIRONMENT: &str = "master";

// Everything needed to reach one Contentful space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentfulSettings {
    pub api_url: String,
    pub space_id: String,
    pub access_token: String,
    pub environment: String,
}

// Thin wrapper around reqwest for the Contentful delivery API.
#[derive(Clone)]
pub struct ContentfulClient {
    http: Client,
    settings: ContentfulSettings,
}

#[derive(Debug, Deserialize)]
struct EntriesResponse {
    #[serde(default)]
    items: Vec<EntryItem>,
}

#[derive(Debug, Deserialize)]
struct EntryItem {
    #[serde(default)]
    fields: LandingPageEntry,
}

impl ContentfulClient {
    pub fn new(settings: ContentfulSettings) -> Self {
        Self {
            http: Client::new(),
            settings,
        }
    }

    fn entries_url(&self, slug: &str) -> Result<Url, ContentSourceError> {
        let settings = &self.settings;
        let mut url = Url::parse(&settings.api_url)
            .map_err(|e| ContentSourceError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ContentSourceError::InvalidUrl(settings.api_url.clone()))?
            .pop_if_empty()
            .extend([
                "spaces",
                settings.space_id.as_str(),
                "environments",
                settings.environment.as_str(),
                "entries",
            ]);
        url.query_pairs_mut()
            .append_pair("content_type", LANDING_PAGE_CONTENT_TYPE)
            .append_pair("fields.slug", slug)
            .append_pair("limit", "1");
        Ok(url)
    }
}

#[async_trait]
impl ContentSource for ContentfulClient {
    async fn find_landing_page(
        &self,
        slug: &str,
    ) -> Result<Option<LandingPageEntry>, ContentSourceError> {
        let url = self.entries_url(slug)?;
        let res = self
            .http
            .get(url)
            .bearer_auth(&self.settings.access_token)
            .send()
            .await
            .map_err(ContentSourceError::Transport)?;

        let status = res.status();
        if !status.is_success() {
            return Err(ContentSourceError::Upstream { status });
        }

        let body = res
            .json::<EntriesResponse>()
            .await
            .map_err(ContentSourceError::Decode)?;
        Ok(body.items.into_iter().next().map(|item| item.fields))
    }
}
