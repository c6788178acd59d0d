use crate::domain::errors::RegistrationError;
use crate::interface_adapters::protocol::{
    ErrorResponse, SubmitRegistrationRequest, SubmitRegistrationResponse,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::SubmitRegistrationUseCase;
use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use std::sync::Arc;

// Generic message returned for every downstream failure.
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed. Please try again.";

// Registration proxy: validate, forward to the event service, return the join code.
#[tracing::instrument(name = "submit_registration", skip_all)]
pub async fn submit_registration(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SubmitRegistrationRequest>, JsonRejection>,
) -> Result<Json<SubmitRegistrationResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "unreadable registration payload.");
        error_response(StatusCode::BAD_REQUEST, "Invalid request body")
    })?;

    let use_case = SubmitRegistrationUseCase {
        registrar: state.registrar.clone(),
    };

    let result = use_case.execute(payload).await.map_err(map_registration_error)?;

    Ok(Json(SubmitRegistrationResponse {
        join_code: result.join_code.into_inner(),
    }))
}

// Any method other than POST on the registration route.
pub async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}

// Details stay in the log; the client only ever sees the generic message.
fn map_registration_error(err: RegistrationError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        RegistrationError::MissingFields => {
            error_response(StatusCode::BAD_REQUEST, "Missing required fields")
        }
        RegistrationError::Registrar(e) => {
            tracing::error!(error = %e, "registration error.");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, REGISTRATION_FAILED_MESSAGE)
        }
    }
}
