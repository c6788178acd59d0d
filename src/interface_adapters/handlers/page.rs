use crate::domain::content::PageContent;
use crate::interface_adapters::state::AppState;
use crate::interface_adapters::views::render_landing_page;
use axum::{Json, extract::State, response::Html};
use std::sync::Arc;

#[tracing::instrument(name = "landing_page", skip_all, fields(slug = %state.page.slug))]
pub async fn landing_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let content = state.content.get_content(&state.page.slug).await;
    Html(render_landing_page(&content, &state.page))
}

// Resolved content for headless consumers of the form descriptors.
pub async fn page_content(State(state): State<Arc<AppState>>) -> Json<PageContent> {
    Json(state.content.get_content(&state.page.slug).await)
}
