use crate::domain::errors::RegistrationError;
use crate::domain::ports::EventRegistrar;
use crate::domain::registration::{RegistrantRequest, RegistrationResult};
use crate::interface_adapters::protocol::SubmitRegistrationRequest;

// Registration proxy use case with the event registrar injected.
pub struct SubmitRegistrationUseCase<R> {
    pub registrar: R,
}

impl<R> SubmitRegistrationUseCase<R>
where
    R: EventRegistrar,
{
    pub async fn execute(
        &self,
        payload: SubmitRegistrationRequest,
    ) -> Result<RegistrationResult, RegistrationError> {
        // Presence only; whitespace is forwarded and left to the event service.
        if payload.full_name.is_empty()
            || payload.email.is_empty()
            || payload.event_id.is_empty()
        {
            return Err(RegistrationError::MissingFields);
        }

        // Company, size and phone stay on this side; the event service only
        // receives name and email.
        tracing::info!(
            email = %payload.email,
            event_id = %payload.event_id,
            company_name = %payload.company_name,
            number_of_employees = %payload.number_of_employees,
            "registration received."
        );

        let registrant = RegistrantRequest::new(payload.full_name, payload.email);
        let response = self
            .registrar
            .register(&payload.event_id, registrant)
            .await?;

        tracing::info!(event_id = %payload.event_id, "registrant created with event service.");

        // Auth token and join url are dropped here on purpose.
        Ok(RegistrationResult {
            join_code: response.join_code,
        })
    }
}
