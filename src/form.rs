//! Modal form state owned by the presentation layer.
//!
//! The state only changes through discrete user actions. The gateway never reads or
//! writes it; `submit` just threads a payload out and a result back in.

use std::collections::HashMap;

use crate::error::SubmissionError;
use crate::submission::fields::{self, FieldType};
use crate::submission::payload::{FormKind, Ratings, SubmissionPayload};
use crate::submission::SubmissionGateway;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormState {
    #[default]
    Closed,
    Open(OpenForm),
    /// Thank-you view after a successful submission.
    Submitted(FormKind),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpenForm {
    pub kind: FormKind,
    pub fields: HashMap<String, String>,
    pub ratings: Ratings,
    pub submitting: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    NotOpen,
    Submitting,
    UnknownField(String),
    UnknownRating(String),
    InvalidRating(String),
    Invalid(Vec<String>),
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::NotOpen => write!(f, "No form is open"),
            FormError::Submitting => write!(f, "A submission is already in progress"),
            FormError::UnknownField(name) => write!(f, "Unknown field: {name}"),
            FormError::UnknownRating(category) => write!(f, "Unknown rating category: {category}"),
            FormError::InvalidRating(msg) => write!(f, "{msg}"),
            FormError::Invalid(problems) => write!(f, "{}", problems.join("; ")),
        }
    }
}

impl std::error::Error for FormError {}

impl OpenForm {
    fn new(kind: FormKind) -> Self {
        let fields = fields::defaults_for(kind)
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            kind,
            fields,
            ratings: Ratings::new(),
            submitting: false,
            error: None,
        }
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    fn to_payload(&self) -> SubmissionPayload {
        // Every named input in catalogue order, values as typed. Only an unchecked
        // checkbox is absent.
        let values = fields::fields_for(self.kind).iter().filter_map(|def| {
            match (def.field_type, self.value(def.name)) {
                (FieldType::Checkbox, None) => None,
                (_, value) => Some((def.name, value.unwrap_or("").to_string())),
            }
        });
        SubmissionPayload::for_form(self.kind, values, &self.ratings)
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        matches!(self, FormState::Open(_))
    }

    pub fn open_form(&self) -> Option<&OpenForm> {
        match self {
            FormState::Open(form) => Some(form),
            _ => None,
        }
    }

    pub fn kind(&self) -> Option<FormKind> {
        match self {
            FormState::Closed => None,
            FormState::Open(form) => Some(form.kind),
            FormState::Submitted(kind) => Some(*kind),
        }
    }

    /// Open `kind` with fresh values, discarding whatever was showing.
    pub fn open(&mut self, kind: FormKind) {
        *self = FormState::Open(OpenForm::new(kind));
    }

    pub fn close(&mut self) {
        *self = FormState::Closed;
    }

    fn editable(&mut self) -> Result<&mut OpenForm, FormError> {
        match self {
            FormState::Open(form) if form.submitting => Err(FormError::Submitting),
            FormState::Open(form) => Ok(form),
            _ => Err(FormError::NotOpen),
        }
    }

    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let form = self.editable()?;
        let def = fields::find_field(form.kind, name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;

        if def.field_type == FieldType::Checkbox {
            // Unchecking removes the key entirely.
            if value.is_empty() {
                form.fields.remove(name);
                return Ok(());
            }
        }
        form.fields.insert(name.to_string(), value.to_string());
        Ok(())
    }

    pub fn rate(&mut self, category: &str, value: u8) -> Result<(), FormError> {
        let form = self.editable()?;
        if !fields::ratings_for(form.kind)
            .iter()
            .any(|r| r.category == category)
        {
            return Err(FormError::UnknownRating(category.to_string()));
        }
        form.ratings
            .rate(category, value)
            .map_err(FormError::InvalidRating)
    }

    /// Validate and lock the form. Returns the payload to hand to the gateway.
    pub fn begin_submit(&mut self) -> Result<SubmissionPayload, FormError> {
        let form = self.editable()?;

        let problems = fields::validate_fields(form.kind, |name| {
            form.fields.get(name).map(String::as_str)
        });
        if !problems.is_empty() {
            form.error = Some(problems.join("; "));
            return Err(FormError::Invalid(problems));
        }

        form.submitting = true;
        form.error = None;
        Ok(form.to_payload())
    }

    /// Apply the gateway's verdict for the submission started by `begin_submit`.
    pub fn finish_submit(&mut self, result: Result<(), SubmissionError>) -> Result<(), FormError> {
        let FormState::Open(form) = self else {
            return Err(FormError::NotOpen);
        };
        if !form.submitting {
            return Err(FormError::NotOpen);
        }
        let kind = form.kind;

        match result {
            Ok(()) => {
                *self = FormState::Submitted(kind);
            }
            Err(e) => {
                tracing::error!("Submission failed: {e}");
                form.submitting = false;
                form.error = Some(e.user_message().to_string());
            }
        }
        Ok(())
    }

    pub async fn submit(&mut self, gateway: &SubmissionGateway) -> Result<(), FormError> {
        let payload = self.begin_submit()?;
        let result = gateway.submit(&payload).await;
        self.finish_submit(result)
    }
}
