use reqwest::StatusCode;
use thiserror::Error;

// Failures talking to the content source. Never surfaced past the provider.
#[derive(Debug, Error)]
pub enum ContentSourceError {
    #[error("content source url is invalid: {0}")]
    InvalidUrl(String),
    #[error("content source transport error: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("content source returned {status}")]
    Upstream { status: StatusCode },
    #[error("content source response decode error: {0}")]
    Decode(#[source] reqwest::Error),
}

// Failures talking to the event service registration API.
#[derive(Debug, Error)]
pub enum RegistrarError {
    #[error("registration url is invalid: {0}")]
    InvalidUrl(String),
    #[error("registration transport error: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("event registration failed ({status}): {message}")]
    Upstream { status: StatusCode, message: String },
    #[error("registration response decode error: {0}")]
    Decode(#[source] reqwest::Error),
}

// Domain-level errors for the registration proxy workflow.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("missing required fields")]
    MissingFields,
    #[error(transparent)]
    Registrar(#[from] RegistrarError),
}

// Failures calling the registration proxy from the hand-off flow.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("registration endpoint transport error: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("registration endpoint returned {status}: {message}")]
    Rejected { status: StatusCode, message: String },
    #[error("registration endpoint response decode error: {0}")]
    Decode(#[source] reqwest::Error),
}

// Failures reported by the embedded widget.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("widget is not loaded")]
    NotLoaded,
    #[error("widget call failed: {0}")]
    Call(String),
}

// Actions the page refuses in its current state.
#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("registration form is not visible")]
    FormHidden,
    #[error("a registration is already being submitted")]
    AlreadySubmitting,
    #[error("no registration is being submitted")]
    NotSubmitting,
    #[error("reset is only available once registered")]
    ResetUnavailable,
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Widget(#[from] WidgetError),
}

// Form input that cannot be packaged into a registration request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("unknown employee count: {0}")]
    InvalidEmployeeCount(String),
}
