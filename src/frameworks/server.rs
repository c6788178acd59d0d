// Framework bootstrap for the landing page service.

use crate::domain::ports::{Clock, ContentSource};
use crate::frameworks::config::{self, Settings};
use crate::interface_adapters::clients::{ContentfulClient, SequelClient};
use crate::interface_adapters::routes;
use crate::interface_adapters::state::{AppState, PageSettings, SharedContent, SystemClock};
use crate::use_cases::ContentProvider;
use std::io::Result;
use std::net::SocketAddr;
use std::sync::Arc;

const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

fn init_runtime() {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    init_tracing(config::json_logs());
    install_panic_hook();
}

// Request spans from the trace layer are included at the default level.
fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if json {
        builder
            .json()
            .with_current_span(true)
            .flatten_event(true)
            .init();
    } else {
        builder.compact().init();
    }
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        let location = info.location().map(ToString::to_string);
        tracing::error!(%info, ?location, ?backtrace, "landing service panicked.");
    }));
}

pub fn build_state(settings: &Settings) -> Arc<AppState> {
    let source = match &settings.contentful {
        Some(contentful) => {
            tracing::info!(
                space_id = %contentful.space_id,
                environment = %contentful.environment,
                "content source configured."
            );
            Some(Arc::new(ContentfulClient::new(contentful.clone())) as Arc<dyn ContentSource>)
        }
        None => {
            tracing::info!("content source not configured, serving default content.");
            None
        }
    };

    let content = SharedContent::new(
        ContentProvider::new(source),
        Arc::new(SystemClock) as Arc<dyn Clock>,
        settings.content_revalidate,
    );

    tracing::debug!(sequel_api_url = %settings.sequel_api_url, "event service client configured.");
    let registrar = Arc::new(SequelClient::new(settings.sequel_api_url.clone()));

    Arc::new(AppState {
        registrar,
        content: Arc::new(content),
        page: PageSettings {
            slug: settings.page_slug.clone(),
            widget_script_url: settings.widget_script_url.clone(),
            company_id: settings.company_id.clone(),
        },
    })
}

pub async fn run(listener: tokio::net::TcpListener, settings: Settings) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state(&settings);

    // Start the web server with the HTTP routes wired up.
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::new(config::bind_addr(), config::http_port());

    // Bind TCP listener with error handling.
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, Settings::from_env()).await
}
