//! Client-side registration hand-off.
//!
//! [`LandingSession`] models one page lifetime: the load-time check through
//! the widget, the registration form state machine, and the reset action.
//! The widget and the proxy are injected so the whole flow runs against test
//! doubles as easily as against the real collaborators.

use crate::domain::errors::{FormError, HandoffError, WidgetError};
use crate::domain::ports::{RegistrationGateway, Widget};
use crate::domain::registration::{EmployeeCount, JoinCode, RegistrationRequest};
use crate::domain::session::SessionState;
use crate::use_cases::bootstrap::SessionBootstrapper;
use crate::use_cases::page_view::{PageView, REGISTRATION_FAILED_ALERT};

/// Raw values typed into the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub company_name: String,
    pub number_of_employees: String,
    pub phone_number: String,
}

impl RegistrationForm {
    /// Packages the form with the page's event id. Every field is required.
    pub fn into_request(self, event_id: &str) -> Result<RegistrationRequest, FormError> {
        let number_of_employees: EmployeeCount =
            required("numberOfEmployees", &self.number_of_employees)?.parse()?;

        Ok(RegistrationRequest {
            full_name: required("fullName", &self.full_name)?.to_string(),
            email: required("email", &self.email)?.to_string(),
            company_name: required("companyName", &self.company_name)?.to_string(),
            number_of_employees,
            phone_number: required("phoneNumber", &self.phone_number)?.to_string(),
            event_id: required("eventId", event_id)?.to_string(),
        })
    }
}

fn required<'a>(name: &'static str, value: &'a str) -> Result<&'a str, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::MissingField(name));
    }
    Ok(trimmed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Submitting,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Complete(JoinCode),
    // The visitor was alerted and the form is back to idle.
    Failed,
}

pub struct LandingSession<W, G> {
    widget: W,
    gateway: G,
    event_id: String,
    company_id: Option<String>,
    view: PageView,
    flow: FlowState,
    session: SessionState,
}

impl<W, G> LandingSession<W, G>
where
    W: Widget,
    G: RegistrationGateway,
{
    pub fn new(widget: W, gateway: G, event_id: impl Into<String>) -> Self {
        Self {
            widget,
            gateway,
            event_id: event_id.into(),
            company_id: None,
            view: PageView::default(),
            flow: FlowState::Idle,
            session: SessionState::NoCredential,
        }
    }

    pub fn with_company_id(mut self, company_id: impl Into<String>) -> Self {
        self.company_id = Some(company_id.into());
        self
    }

    pub fn view(&self) -> &PageView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut PageView {
        &mut self.view
    }

    pub fn flow_state(&self) -> FlowState {
        self.flow
    }

    pub fn session_state(&self) -> &SessionState {
        &self.session
    }

    /// Runs the registration check. Call once the widget has loaded.
    pub async fn on_load(&mut self) -> Result<&SessionState, WidgetError> {
        let state = SessionBootstrapper {
            widget: &self.widget,
            event_id: &self.event_id,
            company_id: self.company_id.as_deref(),
        }
        .execute(&mut self.view)
        .await?;
        self.session = state;
        Ok(&self.session)
    }

    /// Idle -> Submitting. Rejected input leaves the flow idle.
    pub fn begin_submit(
        &mut self,
        form: RegistrationForm,
    ) -> Result<RegistrationRequest, HandoffError> {
        if !self.view.form_visible {
            return Err(HandoffError::FormHidden);
        }
        if self.flow == FlowState::Submitting || !self.view.submit_enabled {
            return Err(HandoffError::AlreadySubmitting);
        }

        let request = form.into_request(&self.event_id)?;
        self.flow = FlowState::Submitting;
        self.view.begin_submitting();
        Ok(request)
    }

    /// Submitting -> Complete, or back to Idle with an alert.
    pub async fn complete_submit(
        &mut self,
        request: RegistrationRequest,
    ) -> Result<SubmitOutcome, HandoffError> {
        if self.flow != FlowState::Submitting {
            return Err(HandoffError::NotSubmitting);
        }

        let outcome = match self.hand_off(&request).await {
            Ok(join_code) => {
                self.session = SessionState::Credential(join_code.clone());
                self.view.show_confirmation();
                self.flow = FlowState::Complete;
                SubmitOutcome::Complete(join_code)
            }
            Err(message) => {
                tracing::error!(event_id = %self.event_id, error = %message, "registration hand-off failed.");
                self.view.raise_alert(REGISTRATION_FAILED_ALERT);
                self.flow = FlowState::Idle;
                SubmitOutcome::Failed
            }
        };
        self.view.end_submitting();
        Ok(outcome)
    }

    pub async fn submit(&mut self, form: RegistrationForm) -> Result<SubmitOutcome, HandoffError> {
        let request = self.begin_submit(form)?;
        self.complete_submit(request).await
    }

    async fn hand_off(&self, request: &RegistrationRequest) -> Result<JoinCode, String> {
        let join_code = self
            .gateway
            .submit(request)
            .await
            .map_err(|e| e.to_string())?;

        self.widget
            .set_join_code_cookie(&self.event_id, &join_code, None)
            .map_err(|e| e.to_string())?;
        self.widget
            .render_event(&self.event_id, &join_code)
            .map_err(|e| e.to_string())?;

        Ok(join_code)
    }

    /// Clears the stored credential and reloads the page, which re-runs the
    /// registration check.
    pub async fn reset(&mut self) -> Result<&SessionState, HandoffError> {
        if !self.view.confirmation_visible {
            return Err(HandoffError::ResetUnavailable);
        }

        self.widget.clear_join_code_cookie(&self.event_id)?;
        tracing::info!(event_id = %self.event_id, "join code cleared, reloading.");

        self.view = PageView::default();
        self.flow = FlowState::Idle;
        self.session = SessionState::NoCredential;
        Ok(self.on_load().await?)
    }
}
