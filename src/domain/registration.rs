use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::FormError;

/// Opaque credential issued by the event service for one registrant.
///
/// Join codes are only ever produced by the registration API (or read back
/// by the widget); nothing in this crate derives one locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JoinCode(String);

impl JoinCode {
    // Wrap a code that came back from the event service or the widget.
    pub fn issued(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for JoinCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Company size buckets offered by the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeCount {
    #[serde(rename = "1-10")]
    UpTo10,
    #[serde(rename = "11-50")]
    UpTo50,
    #[serde(rename = "51-200")]
    UpTo200,
    #[serde(rename = "201-1000")]
    UpTo1000,
    #[serde(rename = "1000+")]
    Over1000,
}

impl EmployeeCount {
    pub const ALL: [EmployeeCount; 5] = [
        EmployeeCount::UpTo10,
        EmployeeCount::UpTo50,
        EmployeeCount::UpTo200,
        EmployeeCount::UpTo1000,
        EmployeeCount::Over1000,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EmployeeCount::UpTo10 => "1-10",
            EmployeeCount::UpTo50 => "11-50",
            EmployeeCount::UpTo200 => "51-200",
            EmployeeCount::UpTo1000 => "201-1000",
            EmployeeCount::Over1000 => "1000+",
        }
    }
}

impl FromStr for EmployeeCount {
    type Err = FormError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        EmployeeCount::ALL
            .into_iter()
            .find(|bucket| bucket.as_str() == value.trim())
            .ok_or_else(|| FormError::InvalidEmployeeCount(value.to_string()))
    }
}

/// A complete registration, as packaged by the form before it is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub full_name: String,
    pub email: String,
    pub company_name: String,
    pub number_of_employees: EmployeeCount,
    pub phone_number: String,
    pub event_id: String,
}

/// Outcome of a successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationResult {
    pub join_code: JoinCode,
}

// Payload sent to the event service when adding a registrant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrantRequest {
    pub name: String,
    pub email: String,
    pub resend_invite: bool,
    pub ignore_custom_questions: bool,
}

impl RegistrantRequest {
    // Invites are always re-sent and custom questions always skipped.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            resend_invite: true,
            ignore_custom_questions: true,
        }
    }
}

// Payload returned by the event service after registration. Only the join
// code is required; the rest is read so it can be deliberately dropped.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrantResponse {
    pub join_code: JoinCode,
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default)]
    pub join_url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
