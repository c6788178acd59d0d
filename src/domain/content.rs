use serde::{Deserialize, Deserializer, Serialize};

// Fallback copy used when no content source is configured or the lookup fails.
pub const DEFAULT_TITLE: &str = "Sequel with Custom Form Integration";
pub const DEFAULT_DESCRIPTION: &str = "Experience seamless event registration with a custom form";
// Entries that exist but leave the description blank get the shorter line.
pub const DEFAULT_ENTRY_DESCRIPTION: &str = "Experience seamless event registration";
pub const DEFAULT_EVENT_ID: &str = "f39bd025-3a7c-475c-8019-f8bb48b3d5ee";

// Content type and slug used when querying the content source.
pub const LANDING_PAGE_CONTENT_TYPE: &str = "landingPage";
pub const DEFAULT_SLUG: &str = "default";

/// Display text and target event for one rendered landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    pub title: String,
    pub description: String,
    #[serde(rename = "sequelEventId")]
    pub event_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_fields: Option<Vec<FormField>>,
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            event_id: DEFAULT_EVENT_ID.to_string(),
            form_fields: None,
        }
    }
}

impl PageContent {
    /// Merges an entry over the defaults one field at a time.
    pub fn from_entry(entry: LandingPageEntry) -> Self {
        Self {
            title: non_empty(entry.title).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            description: non_empty(entry.description)
                .unwrap_or_else(|| DEFAULT_ENTRY_DESCRIPTION.to_string()),
            event_id: non_empty(entry.sequel_event_id)
                .unwrap_or_else(|| DEFAULT_EVENT_ID.to_string()),
            form_fields: Some(entry.form_fields.unwrap_or_default()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Descriptor for one input on the registration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub placeholder: String,
    #[serde(rename = "type", default = "default_input_kind")]
    pub kind: String,
    #[serde(default)]
    pub required: bool,
}

fn default_input_kind() -> String {
    "text".to_string()
}

// The serialization within this layer is a dependency leak, but it keeps the
// source adapter trivial.
// Raw fields of a `landingPage` entry; every field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPageEntry {
    pub title: Option<String>,
    pub description: Option<String>,
    pub slug: Option<String>,
    pub sequel_event_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_form_fields")]
    pub form_fields: Option<Vec<FormField>>,
}

// A malformed descriptor is dropped on its own; it never costs the rest of
// the entry.
fn lenient_form_fields<'de, D>(deserializer: D) -> Result<Option<Vec<FormField>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}
