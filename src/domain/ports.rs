use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::content::LandingPageEntry;
use crate::domain::errors::{ContentSourceError, GatewayError, RegistrarError, WidgetError};
use crate::domain::registration::{
    JoinCode, RegistrantRequest, RegistrantResponse, RegistrationRequest,
};
use crate::domain::session::{RegistrationCheck, WidgetRegistration};

// Use cases depend on these traits, not on the concrete clients.
// Dependencies point inwards to the domain layer.

// Port for the headless CMS holding landing page copy.
#[async_trait]
pub trait ContentSource: Send + Sync {
    // Look up the single entry for a slug; Ok(None) when nothing matches.
    async fn find_landing_page(
        &self,
        slug: &str,
    ) -> Result<Option<LandingPageEntry>, ContentSourceError>;
}

// Port for the event service that issues join codes.
#[async_trait]
pub trait EventRegistrar: Send + Sync {
    async fn register(
        &self,
        event_id: &str,
        registrant: RegistrantRequest,
    ) -> Result<RegistrantResponse, RegistrarError>;
}

// Port used by the hand-off flow to reach the registration proxy.
#[async_trait]
pub trait RegistrationGateway: Send + Sync {
    async fn submit(&self, request: &RegistrationRequest) -> Result<JoinCode, GatewayError>;
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now_epoch_millis(&self) -> u64;
}

/// The embedded event widget, as seen from the page.
///
/// The widget owns join-code validation, event rendering and the join-code
/// cookie. This crate only calls into it.
#[async_trait]
pub trait Widget: Send + Sync {
    fn init(&self, company_id: &str) -> Result<(), WidgetError>;

    fn initialize_tracking(&self) -> Result<(), WidgetError>;

    /// Validates any stored join code for the event. When one is valid the
    /// widget also renders the event before answering.
    async fn check_and_render_if_registered(
        &self,
        event_id: &str,
    ) -> Result<RegistrationCheck, WidgetError>;

    fn render_event(&self, event_id: &str, join_code: &JoinCode) -> Result<(), WidgetError>;

    /// Registers directly against the event service from the page. The
    /// hand-off flow goes through the proxy instead.
    async fn register_user_for_event(
        &self,
        event_id: &str,
        name: &str,
        email: &str,
    ) -> Result<WidgetRegistration, WidgetError>;

    /// `days = None` keeps the widget's default cookie lifetime.
    fn set_join_code_cookie(
        &self,
        event_id: &str,
        join_code: &JoinCode,
        days: Option<u32>,
    ) -> Result<(), WidgetError>;

    fn clear_join_code_cookie(&self, event_id: &str) -> Result<(), WidgetError>;
}

// Shared handles stand in for the port they wrap, so state can hold Arc<dyn ..>.

#[async_trait]
impl<T: ContentSource + ?Sized> ContentSource for Arc<T> {
    async fn find_landing_page(
        &self,
        slug: &str,
    ) -> Result<Option<LandingPageEntry>, ContentSourceError> {
        (**self).find_landing_page(slug).await
    }
}

#[async_trait]
impl<T: EventRegistrar + ?Sized> EventRegistrar for Arc<T> {
    async fn register(
        &self,
        event_id: &str,
        registrant: RegistrantRequest,
    ) -> Result<RegistrantResponse, RegistrarError> {
        (**self).register(event_id, registrant).await
    }
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now_epoch_millis(&self) -> u64 {
        (**self).now_epoch_millis()
    }
}
