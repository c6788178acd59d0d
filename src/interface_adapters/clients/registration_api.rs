use async_trait::async_trait;
use reqwest::Client;

use crate::domain::errors::GatewayError;
use crate::domain::ports::RegistrationGateway;
use crate::domain::registration::{JoinCode, RegistrationRequest};
use crate::interface_adapters::protocol::{ErrorResponse, SubmitRegistrationResponse};

// Client for this service's own registration endpoint, used by the hand-off
// flow when it runs outside the browser.
#[derive(Clone)]
pub struct RegistrationApiClient {
    http: Client,
    pub base_url: String,
}

impl RegistrationApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl RegistrationGateway for RegistrationApiClient {
    async fn submit(&self, request: &RegistrationRequest) -> Result<JoinCode, GatewayError> {
        let url = format!(
            "{}/registration/submit",
            self.base_url.trim_end_matches('/')
        );
        let res = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(GatewayError::Transport)?;
        let status = res.status();

        if !status.is_success() {
            let message = res
                .json::<ErrorResponse>()
                .await
                .map(|payload| payload.message)
                .unwrap_or_default();
            return Err(GatewayError::Rejected { status, message });
        }

        let body = res
            .json::<SubmitRegistrationResponse>()
            .await
            .map_err(GatewayError::Decode)?;
        Ok(JoinCode::issued(body.join_code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registration::EmployeeCount;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn request() -> RegistrationRequest {
        RegistrationRequest {
            full_name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            company_name: "Acme".to_string(),
            number_of_employees: EmployeeCount::UpTo50,
            phone_number: "555-1234".to_string(),
            event_id: "evt-1".to_string(),
        }
    }

    #[tokio::test]
    async fn when_endpoint_returns_join_code_then_it_is_handed_back() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/registration/submit")
            .match_body(Matcher::Json(json!({
                "fullName": "Jane Doe",
                "email": "jane@x.com",
                "companyName": "Acme",
                "numberOfEmployees": "11-50",
                "phoneNumber": "555-1234",
                "eventId": "evt-1"
            })))
            .with_status(200)
            .with_body(r#"{"joinCode":"XYZ"}"#)
            .create_async()
            .await;

        let code = RegistrationApiClient::new(server.url())
            .submit(&request())
            .await
            .expect("expected submit to succeed");

        mock.assert_async().await;
        assert_eq!(code.as_str(), "XYZ");
    }

    #[tokio::test]
    async fn when_endpoint_fails_then_returns_rejected_with_message() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/registration/submit")
            .with_status(500)
            .with_body(r#"{"message":"Registration failed. Please try again."}"#)
            .create_async()
            .await;

        let result = RegistrationApiClient::new(server.url())
            .submit(&request())
            .await;

        assert!(matches!(
            result,
            Err(GatewayError::Rejected { status, message })
                if status.as_u16() == 500 && message == "Registration failed. Please try again."
        ));
    }
}
