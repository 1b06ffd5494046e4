//! Contact form: field table, form state and submission.
//!
//! [`FIELDS`] is the single description of the form. The contact page
//! renders its inputs (type, label, `required`) from it, the browser driver
//! reads the same `required` flags back from the markup, and [`ContactForm`]
//! applies the same rules when a submission is replayed in tests.
//!
//! Delivery goes through a [`Transport`]. Submitting with a required field
//! blank never reaches the transport; a delivery failure leaves every entered
//! value in place so the visitor can retry.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContactError {
    #[error("Unknown form field '{0}'")]
    UnknownField(String),
    #[error("Required fields are empty: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Textarea,
}

impl InputKind {
    /// Value of the `<input type>` attribute; `None` for `<textarea>`.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            InputKind::Text => Some("text"),
            InputKind::Email => Some("email"),
            InputKind::Tel => Some("tel"),
            InputKind::Textarea => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub required: bool,
}

pub const FIELDS: [FieldSpec; 5] = [
    FieldSpec {
        name: "name",
        label: "Your Name",
        kind: InputKind::Text,
        required: true,
    },
    FieldSpec {
        name: "email",
        label: "Your Email",
        kind: InputKind::Email,
        required: true,
    },
    FieldSpec {
        name: "phone",
        label: "Your Phone",
        kind: InputKind::Tel,
        required: false,
    },
    FieldSpec {
        name: "subject",
        label: "Subject",
        kind: InputKind::Text,
        required: false,
    },
    FieldSpec {
        name: "message",
        label: "Your Message",
        kind: InputKind::Textarea,
        required: true,
    },
];

/// Current values of the five fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl FormState {
    pub fn get(&self, field: &str) -> Option<&str> {
        Some(match field {
            "name" => &self.name,
            "email" => &self.email,
            "phone" => &self.phone,
            "subject" => &self.subject,
            "message" => &self.message,
            _ => return None,
        })
    }

    fn get_mut(&mut self, field: &str) -> Option<&mut String> {
        Some(match field {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "subject" => &mut self.subject,
            "message" => &mut self.message,
            _ => return None,
        })
    }
}

/// Delivers a completed form somewhere (HTTP endpoint, mailbox, test log).
pub trait Transport {
    fn deliver(&mut self, message: &FormState) -> Result<(), String>;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    /// Delivery failed; the message is shown inline next to the form.
    Failed(String),
}

#[derive(Debug, Default)]
pub struct ContactForm {
    state: FormState,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// Input change. Editing after a failure clears the error.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<(), ContactError> {
        let slot = self
            .state
            .get_mut(field)
            .ok_or_else(|| ContactError::UnknownField(field.to_string()))?;
        *slot = value.into();
        if matches!(self.status, SubmitStatus::Failed(_)) {
            self.status = SubmitStatus::Idle;
        }
        Ok(())
    }

    /// Required fields that are blank (whitespace counts as blank), in form order.
    pub fn missing_required(&self) -> Vec<&'static str> {
        FIELDS
            .iter()
            .filter(|f| f.required)
            .filter(|f| self.state.get(f.name).is_none_or(|v| v.trim().is_empty()))
            .map(|f| f.name)
            .collect()
    }

    /// Validate and hand the current values to `transport` exactly once.
    ///
    /// On success the fields are cleared. On delivery failure they are kept.
    pub fn submit(&mut self, transport: &mut dyn Transport) -> Result<SubmitOutcome, ContactError> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(ContactError::MissingFields(missing));
        }

        self.status = SubmitStatus::Sending;
        match transport.deliver(&self.state) {
            Ok(()) => {
                self.status = SubmitStatus::Sent;
                self.state = FormState::default();
                Ok(SubmitOutcome::Sent)
            }
            Err(msg) => {
                self.status = SubmitStatus::Failed(msg.clone());
                Ok(SubmitOutcome::Failed(msg))
            }
        }
    }
}
