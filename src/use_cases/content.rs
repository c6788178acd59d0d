use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::domain::content::PageContent;
use crate::domain::ports::{Clock, ContentSource};

/// Why the provider returned the content it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentOrigin {
    Remote,
    Unconfigured,
    NotFound,
    FetchFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContent {
    pub content: PageContent,
    pub origin: ContentOrigin,
}

/// Resolves page content from the content source, falling back to the
/// built-in defaults. A `None` source means the CMS is not configured.
pub struct ContentProvider<S> {
    source: Option<S>,
}

impl<S> ContentProvider<S>
where
    S: ContentSource,
{
    pub fn new(source: Option<S>) -> Self {
        Self { source }
    }

    pub fn is_configured(&self) -> bool {
        self.source.is_some()
    }

    // Never fails: every source error degrades to the defaults.
    pub async fn get_content(&self, slug: &str) -> PageContent {
        self.resolve(slug).await.content
    }

    pub async fn resolve(&self, slug: &str) -> ResolvedContent {
        let Some(source) = &self.source else {
            tracing::debug!(slug, "content source not configured, using defaults.");
            return fallback(ContentOrigin::Unconfigured);
        };

        match source.find_landing_page(slug).await {
            Ok(Some(entry)) => ResolvedContent {
                content: PageContent::from_entry(entry),
                origin: ContentOrigin::Remote,
            },
            Ok(None) => {
                tracing::info!(slug, "no landing page entry for slug, using defaults.");
                fallback(ContentOrigin::NotFound)
            }
            Err(e) => {
                tracing::error!(slug, error = %e, "failed to fetch landing page content.");
                fallback(ContentOrigin::FetchFailed)
            }
        }
    }
}

fn fallback(origin: ContentOrigin) -> ResolvedContent {
    ResolvedContent {
        content: PageContent::default(),
        origin,
    }
}

struct CachedPage {
    resolved: ResolvedContent,
    fetched_at: u64,
}

/// Keeps the last resolved content per slug and re-resolves it once it is
/// older than `revalidate`. A zero interval resolves on every call.
pub struct ContentCache<S, C> {
    provider: ContentProvider<S>,
    clock: C,
    revalidate: Duration,
    pages: Mutex<HashMap<String, CachedPage>>,
}

impl<S, C> ContentCache<S, C>
where
    S: ContentSource,
    C: Clock,
{
    pub fn new(provider: ContentProvider<S>, clock: C, revalidate: Duration) -> Self {
        Self {
            provider,
            clock,
            revalidate,
            pages: Mutex::new(HashMap::new()),
        }
    }

    pub async fn get_content(&self, slug: &str) -> PageContent {
        self.resolve(slug).await.content
    }

    pub async fn resolve(&self, slug: &str) -> ResolvedContent {
        let ttl = u64::try_from(self.revalidate.as_millis()).unwrap_or(u64::MAX);
        if ttl == 0 {
            return self.provider.resolve(slug).await;
        }

        let now = self.clock.now_epoch_millis();
        {
            let pages = self.pages.lock().await;
            if let Some(page) = pages
                .get(slug)
                .filter(|page| now.saturating_sub(page.fetched_at) < ttl)
            {
                return page.resolved.clone();
            }
        }

        // The lock is released while the source is queried.
        let resolved = self.provider.resolve(slug).await;
        tracing::debug!(slug, origin = ?resolved.origin, "landing page content revalidated.");

        let mut pages = self.pages.lock().await;
        pages.insert(
            slug.to_string(),
            CachedPage {
                resolved: resolved.clone(),
                fetched_at: self.clock.now_epoch_millis(),
            },
        );
        resolved
    }
}
