// Shared helpers for serving the app on an ephemeral port.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use event_landing::Settings;
use event_landing::domain::{
    JoinCode, RegistrationCheck, Widget, WidgetError, WidgetRegistration,
};

// Start the server against the given settings and return its base URL.
pub async fn spawn_server(settings: Settings) -> String {
    // Bind to an ephemeral port to avoid collisions with local services.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");

    // Serve until the test runtime shuts down.
    tokio::spawn(async move {
        event_landing::run(listener, settings)
            .await
            .expect("server failed");
    });

    // Retry for a short period to avoid racing server bind/accept.
    for _ in 0..100 {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return format!("http://{addr}");
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("server did not become ready in time");
}

// Settings pointing the event service at a mock and disabling the CMS.
pub fn settings_with_event_service(sequel_api_url: String) -> Settings {
    Settings {
        sequel_api_url,
        contentful: None,
        ..Settings::default()
    }
}

// Cookie-backed widget double: any stored join code counts as valid.
#[derive(Clone, Default)]
pub struct CookieWidget {
    cookies: Arc<Mutex<HashMap<String, String>>>,
    rendered: Arc<Mutex<Vec<(String, String)>>>,
}

impl CookieWidget {
    pub fn cookie(&self, event_id: &str) -> Option<String> {
        self.cookies.lock().expect("cookies mutex poisoned").get(event_id).cloned()
    }

    pub fn rendered(&self) -> Vec<(String, String)> {
        self.rendered.lock().expect("rendered mutex poisoned").clone()
    }
}

#[async_trait]
impl Widget for CookieWidget {
    fn init(&self, _company_id: &str) -> Result<(), WidgetError> {
        Ok(())
    }

    fn initialize_tracking(&self) -> Result<(), WidgetError> {
        Ok(())
    }

    async fn check_and_render_if_registered(
        &self,
        event_id: &str,
    ) -> Result<RegistrationCheck, WidgetError> {
        Ok(match self.cookie(event_id) {
            Some(code) => RegistrationCheck::AlreadyRegistered(JoinCode::issued(code)),
            None => RegistrationCheck::NotRegistered,
        })
    }

    fn render_event(&self, event_id: &str, join_code: &JoinCode) -> Result<(), WidgetError> {
        self.rendered
            .lock()
            .expect("rendered mutex poisoned")
            .push((event_id.to_string(), join_code.as_str().to_string()));
        Ok(())
    }

    async fn register_user_for_event(
        &self,
        _event_id: &str,
        _name: &str,
        _email: &str,
    ) -> Result<WidgetRegistration, WidgetError> {
        Err(WidgetError::NotLoaded)
    }

    fn set_join_code_cookie(
        &self,
        event_id: &str,
        join_code: &JoinCode,
        _days: Option<u32>,
    ) -> Result<(), WidgetError> {
        self.cookies
            .lock()
            .expect("cookies mutex poisoned")
            .insert(event_id.to_string(), join_code.as_str().to_string());
        Ok(())
    }

    fn clear_join_code_cookie(&self, event_id: &str) -> Result<(), WidgetError> {
        self.cookies
            .lock()
            .expect("cookies mutex poisoned")
            .remove(event_id);
        Ok(())
    }
}
