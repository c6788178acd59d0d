use crate::domain::errors::WidgetError;
use crate::domain::ports::Widget;
use crate::domain::session::{RegistrationCheck, SessionState};
use crate::use_cases::page_view::PageView;

// Load-time registration check, run once the widget script is available.
pub struct SessionBootstrapper<'a, W: ?Sized> {
    pub widget: &'a W,
    pub event_id: &'a str,
    pub company_id: Option<&'a str>,
}

impl<W> SessionBootstrapper<'_, W>
where
    W: Widget + ?Sized,
{
    // The check is the only thing that decides which panel is shown.
    pub async fn execute(&self, view: &mut PageView) -> Result<SessionState, WidgetError> {
        if let Some(company_id) = self.company_id {
            self.widget.init(company_id)?;
            self.widget.initialize_tracking()?;
        }

        let check = self
            .widget
            .check_and_render_if_registered(self.event_id)
            .await
            .inspect_err(|e| {
                tracing::warn!(event_id = self.event_id, error = %e, "registration check failed.");
            })?;

        match &check {
            RegistrationCheck::AlreadyRegistered(_) => {
                tracing::info!(event_id = self.event_id, "visitor already registered.");
                view.show_confirmation();
            }
            RegistrationCheck::NotRegistered => {
                tracing::info!(event_id = self.event_id, "visitor not registered, showing form.");
                view.show_form();
            }
        }

        Ok(check.into())
    }
}
