use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::ports::{Clock, ContentSource, EventRegistrar};
use crate::use_cases::ContentCache;

pub type SharedContent = ContentCache<Arc<dyn ContentSource>, Arc<dyn Clock>>;

// Per-deployment settings the landing page is rendered with.
#[derive(Debug, Clone)]
pub struct PageSettings {
    pub slug: String,
    pub widget_script_url: String,
    pub company_id: Option<String>,
}

#[derive(Clone)]
pub struct AppState {
    // We use Arc<dyn Trait> to hold any implementation (dependency injection).
    pub registrar: Arc<dyn EventRegistrar>,
    pub content: Arc<SharedContent>,
    pub page: PageSettings,
}

// System clock adapter used by the content cache.
#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}
