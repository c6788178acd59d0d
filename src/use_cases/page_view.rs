// What the visitor currently sees on the landing page.

pub const SUBMIT_LABEL: &str = "Register Now";
pub const SUBMITTING_LABEL: &str = "Registering...";
pub const REGISTRATION_FAILED_ALERT: &str = "Registration failed. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub form_visible: bool,
    pub confirmation_visible: bool,
    pub submit_enabled: bool,
    // Blocking alert awaiting dismissal.
    pub alert: Option<String>,
}

impl Default for PageView {
    // Before the registration check answers neither panel is shown.
    fn default() -> Self {
        Self {
            form_visible: false,
            confirmation_visible: false,
            submit_enabled: true,
            alert: None,
        }
    }
}

impl PageView {
    pub fn submit_label(&self) -> &'static str {
        if self.submit_enabled {
            SUBMIT_LABEL
        } else {
            SUBMITTING_LABEL
        }
    }

    pub fn show_form(&mut self) {
        self.form_visible = true;
        self.confirmation_visible = false;
    }

    pub fn show_confirmation(&mut self) {
        self.form_visible = false;
        self.confirmation_visible = true;
    }

    pub fn begin_submitting(&mut self) {
        self.submit_enabled = false;
    }

    pub fn end_submitting(&mut self) {
        self.submit_enabled = true;
    }

    pub fn raise_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    pub fn dismiss_alert(&mut self) -> Option<String> {
        self.alert.take()
    }
}
