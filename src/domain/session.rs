use crate::domain::registration::JoinCode;

// What the visitor holds for the configured event. The widget's cookie is the
// only store; this is a read-out of it, never a second copy of the truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    NoCredential,
    Credential(JoinCode),
}

/// Result of asking the widget whether the visitor is already registered.
///
/// Exactly one variant comes back per check, which stands in for the pair of
/// "already registered" / "not registered" callbacks of the widget script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationCheck {
    AlreadyRegistered(JoinCode),
    NotRegistered,
}

impl From<RegistrationCheck> for SessionState {
    fn from(check: RegistrationCheck) -> Self {
        match check {
            RegistrationCheck::AlreadyRegistered(code) => SessionState::Credential(code),
            RegistrationCheck::NotRegistered => SessionState::NoCredential,
        }
    }
}

/// Credentials handed back by the widget's own direct-registration call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetRegistration {
    pub join_code: JoinCode,
    pub auth_token: String,
    pub join_url: String,
}
