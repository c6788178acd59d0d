use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::domain::content::LandingPageEntry;
use crate::domain::errors::{ContentSourceError, GatewayError, RegistrarError, WidgetError};
use crate::domain::ports::{Clock, ContentSource, EventRegistrar, RegistrationGateway, Widget};
use crate::domain::registration::{
    JoinCode, RegistrantRequest, RegistrantResponse, RegistrationRequest,
};
use crate::domain::session::{RegistrationCheck, WidgetRegistration};

// Shared adjustable time source for deterministic use-case tests.
#[derive(Clone, Default)]
pub(crate) struct FixedClock(Arc<AtomicU64>);

impl FixedClock {
    pub(crate) fn at(millis: u64) -> Self {
        Self(Arc::new(AtomicU64::new(millis)))
    }

    pub(crate) fn advance(&self, millis: u64) {
        self.0.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_epoch_millis(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

// Canned answers for the content source double.
#[derive(Clone)]
pub(crate) enum SourceReply {
    Entry(LandingPageEntry),
    Empty,
    Fail,
}

#[derive(Clone)]
pub(crate) struct StubContentSource {
    reply: SourceReply,
    calls: Arc<AtomicUsize>,
}

impl StubContentSource {
    pub(crate) fn new(reply: SourceReply) -> Self {
        Self {
            reply,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentSource for StubContentSource {
    async fn find_landing_page(
        &self,
        _slug: &str,
    ) -> Result<Option<LandingPageEntry>, ContentSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            SourceReply::Entry(entry) => Ok(Some(entry.clone())),
            SourceReply::Empty => Ok(None),
            SourceReply::Fail => Err(ContentSourceError::Upstream {
                status: StatusCode::SERVICE_UNAVAILABLE,
            }),
        }
    }
}

// Canned answers for the event registrar double.
#[derive(Clone)]
pub(crate) enum RegistrarReply {
    Issued(&'static str),
    Rejected(StatusCode, &'static str),
}

#[derive(Clone)]
pub(crate) struct RecordingRegistrar {
    reply: RegistrarReply,
    // Shared log lets tests inspect exactly what was forwarded.
    calls: Arc<Mutex<Vec<(String, RegistrantRequest)>>>,
}

impl RecordingRegistrar {
    pub(crate) fn new(reply: RegistrarReply) -> Self {
        Self {
            reply,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn calls(&self) -> Vec<(String, RegistrantRequest)> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }
}

#[async_trait]
impl EventRegistrar for RecordingRegistrar {
    async fn register(
        &self,
        event_id: &str,
        registrant: RegistrantRequest,
    ) -> Result<RegistrantResponse, RegistrarError> {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .push((event_id.to_string(), registrant));
        match &self.reply {
            RegistrarReply::Issued(code) => Ok(RegistrantResponse {
                join_code: JoinCode::issued(*code),
                auth_token: Some("token".to_string()),
                join_url: Some("https://example.test/join".to_string()),
                email: None,
            }),
            RegistrarReply::Rejected(status, message) => Err(RegistrarError::Upstream {
                status: *status,
                message: message.to_string(),
            }),
        }
    }
}

// Proxy double for the hand-off flow.
#[derive(Clone)]
pub(crate) struct StubGateway {
    reply: Option<&'static str>,
    requests: Arc<Mutex<Vec<RegistrationRequest>>>,
}

impl StubGateway {
    pub(crate) fn issuing(code: &'static str) -> Self {
        Self {
            reply: Some(code),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            reply: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn requests(&self) -> Vec<RegistrationRequest> {
        self.requests.lock().expect("requests mutex poisoned").clone()
    }
}

#[async_trait]
impl RegistrationGateway for StubGateway {
    async fn submit(&self, request: &RegistrationRequest) -> Result<JoinCode, GatewayError> {
        self.requests
            .lock()
            .expect("requests mutex poisoned")
            .push(request.clone());
        match self.reply {
            Some(code) => Ok(JoinCode::issued(code)),
            None => Err(GatewayError::Rejected {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Registration failed. Please try again.".to_string(),
            }),
        }
    }
}

// Calls observed by the widget double, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WidgetCall {
    Init(String),
    InitializeTracking,
    Check(String),
    Render(String, String),
    SetCookie(String, String, Option<u32>),
    ClearCookie(String),
}

#[derive(Default)]
struct WidgetInner {
    // Join-code cookies keyed by event id, as the real widget keeps them.
    cookies: HashMap<String, String>,
    calls: Vec<WidgetCall>,
    fail_render: bool,
    unloaded: bool,
}

// In-memory stand-in for the embedded widget. Any stored cookie counts as a
// valid credential.
#[derive(Clone, Default)]
pub(crate) struct FakeWidget {
    inner: Arc<Mutex<WidgetInner>>,
}

impl FakeWidget {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_cookie(event_id: &str, join_code: &str) -> Self {
        let widget = Self::new();
        widget
            .lock()
            .cookies
            .insert(event_id.to_string(), join_code.to_string());
        widget
    }

    // Script never arrived: every call reports the widget as missing.
    pub(crate) fn unloaded() -> Self {
        let widget = Self::new();
        widget.lock().unloaded = true;
        widget
    }

    pub(crate) fn failing_render(self) -> Self {
        self.lock().fail_render = true;
        self
    }

    pub(crate) fn cookie(&self, event_id: &str) -> Option<String> {
        self.lock().cookies.get(event_id).cloned()
    }

    pub(crate) fn calls(&self) -> Vec<WidgetCall> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, WidgetInner> {
        self.inner.lock().expect("widget mutex poisoned")
    }
}

#[async_trait]
impl Widget for FakeWidget {
    fn init(&self, company_id: &str) -> Result<(), WidgetError> {
        self.lock().calls.push(WidgetCall::Init(company_id.to_string()));
        Ok(())
    }

    fn initialize_tracking(&self) -> Result<(), WidgetError> {
        self.lock().calls.push(WidgetCall::InitializeTracking);
        Ok(())
    }

    async fn check_and_render_if_registered(
        &self,
        event_id: &str,
    ) -> Result<RegistrationCheck, WidgetError> {
        let mut inner = self.lock();
        if inner.unloaded {
            return Err(WidgetError::NotLoaded);
        }
        inner.calls.push(WidgetCall::Check(event_id.to_string()));
        match inner.cookies.get(event_id).cloned() {
            Some(code) => {
                inner
                    .calls
                    .push(WidgetCall::Render(event_id.to_string(), code.clone()));
                Ok(RegistrationCheck::AlreadyRegistered(JoinCode::issued(code)))
            }
            None => Ok(RegistrationCheck::NotRegistered),
        }
    }

    fn render_event(&self, event_id: &str, join_code: &JoinCode) -> Result<(), WidgetError> {
        let mut inner = self.lock();
        if inner.fail_render {
            return Err(WidgetError::Call("render failed".to_string()));
        }
        inner.calls.push(WidgetCall::Render(
            event_id.to_string(),
            join_code.as_str().to_string(),
        ));
        Ok(())
    }

    async fn register_user_for_event(
        &self,
        _event_id: &str,
        _name: &str,
        _email: &str,
    ) -> Result<WidgetRegistration, WidgetError> {
        Err(WidgetError::Call("direct registration is not used".to_string()))
    }

    fn set_join_code_cookie(
        &self,
        event_id: &str,
        join_code: &JoinCode,
        days: Option<u32>,
    ) -> Result<(), WidgetError> {
        let mut inner = self.lock();
        inner.calls.push(WidgetCall::SetCookie(
            event_id.to_string(),
            join_code.as_str().to_string(),
            days,
        ));
        inner
            .cookies
            .insert(event_id.to_string(), join_code.as_str().to_string());
        Ok(())
    }

    fn clear_join_code_cookie(&self, event_id: &str) -> Result<(), WidgetError> {
        let mut inner = self.lock();
        inner.calls.push(WidgetCall::ClearCookie(event_id.to_string()));
        inner.cookies.remove(event_id);
        Ok(())
    }
}
