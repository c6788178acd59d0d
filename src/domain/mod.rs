// Domain layer: page content, registration types, and the ports the use cases call.

pub mod content;
pub mod errors;
pub mod ports;
pub mod registration;
pub mod session;

// Re-export the domain boundary types and ports.
pub use content::{FormField, LandingPageEntry, PageContent};
pub use errors::{
    ContentSourceError, FormError, GatewayError, HandoffError, RegistrarError, RegistrationError,
    WidgetError,
};
pub use ports::{Clock, ContentSource, EventRegistrar, RegistrationGateway, Widget};
pub use registration::{
    EmployeeCount, JoinCode, RegistrantRequest, RegistrantResponse, RegistrationRequest,
    RegistrationResult,
};
pub use session::{RegistrationCheck, SessionState, WidgetRegistration};
