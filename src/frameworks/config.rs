use std::{env, net::IpAddr, time::Duration};

use crate::domain::content::DEFAULT_SLUG;
use crate::interface_adapters::clients::contentful::{
    ContentfulSettings, DEFAULT_CONTENTFUL_API_URL, DEFAULT_CONTENTFUL_ENVIRONMENT,
};
use crate::interface_adapters::clients::sequel::DEFAULT_SEQUEL_API_URL;

// Runtime/server configuration, all read from the environment.

pub const DEFAULT_WIDGET_SCRIPT_URL: &str =
    "https://prod-assets.sequelvideo.com/uploads/toolkit/sequel.js";

pub fn http_port() -> u16 {
    env::var("LANDING_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000)
}

pub fn bind_addr() -> IpAddr {
    env::var("LANDING_BIND_ADDR")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(IpAddr::from([127, 0, 0, 1]))
}

pub fn page_slug() -> String {
    non_empty_var("LANDING_PAGE_SLUG").unwrap_or_else(|| DEFAULT_SLUG.to_string())
}

pub fn sequel_api_url() -> String {
    non_empty_var("SEQUEL_API_URL").unwrap_or_else(|| DEFAULT_SEQUEL_API_URL.to_string())
}

pub fn widget_script_url() -> String {
    non_empty_var("SEQUEL_WIDGET_SCRIPT_URL")
        .unwrap_or_else(|| DEFAULT_WIDGET_SCRIPT_URL.to_string())
}

pub fn sequel_company_id() -> Option<String> {
    non_empty_var("SEQUEL_COMPANY_ID")
}

// `LOG_FORMAT=json` switches to one JSON object per line.
pub fn json_logs() -> bool {
    env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"))
}

pub fn content_revalidate() -> Duration {
    let secs = env::var("CONTENT_REVALIDATE_SECS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(60);
    Duration::from_secs(secs)
}

// The content source is enabled only when both space id and token are set.
pub fn contentful() -> Option<ContentfulSettings> {
    let space_id = non_empty_var("CONTENTFUL_SPACE_ID")?;
    let access_token = non_empty_var("CONTENTFUL_ACCESS_TOKEN")?;
    Some(ContentfulSettings {
        api_url: non_empty_var("CONTENTFUL_API_URL")
            .unwrap_or_else(|| DEFAULT_CONTENTFUL_API_URL.to_string()),
        space_id,
        access_token,
        environment: non_empty_var("CONTENTFUL_ENVIRONMENT")
            .unwrap_or_else(|| DEFAULT_CONTENTFUL_ENVIRONMENT.to_string()),
    })
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Everything the server needs, gathered once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub page_slug: String,
    pub sequel_api_url: String,
    pub widget_script_url: String,
    pub company_id: Option<String>,
    pub contentful: Option<ContentfulSettings>,
    pub content_revalidate: Duration,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            page_slug: page_slug(),
            sequel_api_url: sequel_api_url(),
            widget_script_url: widget_script_url(),
            company_id: sequel_company_id(),
            contentful: contentful(),
            content_revalidate: content_revalidate(),
        }
    }
}

impl Default for Settings {
    // Same values `from_env` yields with an empty environment.
    fn default() -> Self {
        Self {
            page_slug: DEFAULT_SLUG.to_string(),
            sequel_api_url: DEFAULT_SEQUEL_API_URL.to_string(),
            widget_script_url: DEFAULT_WIDGET_SCRIPT_URL.to_string(),
            company_id: None,
            contentful: None,
            content_revalidate: Duration::from_secs(60),
        }
    }
}
