use crate::contact::{ContactField, ContactInput, ContactPayload};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"\S+@\S+\.\S+").expect("email regex is valid");
}

/// A validation failure for a single field of a contact payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    Missing(ContactField),

    #[error("Invalid email format")]
    InvalidEmail,
}

impl FieldError {
    pub fn field(&self) -> ContactField {
        match self {
            FieldError::Missing(field) => *field,
            FieldError::InvalidEmail => ContactField::Email,
        }
    }
}

/// Checks whether the given email has a `local@domain.tld` shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

impl ContactPayload {
    /// Returns the first required field that is missing or blank after trimming
    pub fn first_missing_field(&self) -> Option<ContactField> {
        ContactField::REQUIRED
            .into_iter()
            .find(|field| non_blank(self.get(*field)).is_none())
    }

    /// Returns every problem with the payload, in field order
    pub fn field_errors(&self) -> Vec<FieldError> {
        ContactField::REQUIRED
            .into_iter()
            .filter_map(|field| match non_blank(self.get(field)) {
                None => Some(FieldError::Missing(field)),
                Some(email) if field == ContactField::Email && !is_valid_email(&email) => {
                    Some(FieldError::InvalidEmail)
                }
                Some(_) => None,
            })
            .collect()
    }

    /// Validates the payload. Missing required fields are reported before a malformed email.
    pub fn validate(&self) -> Result<ContactInput, FieldError> {
        if let Some(field) = self.first_missing_field() {
            return Err(FieldError::Missing(field));
        }
        // all required fields are set at this point
        let required = |field| non_blank(self.get(field)).unwrap_or_default();

        let email = required(ContactField::Email);
        if !is_valid_email(&email) {
            return Err(FieldError::InvalidEmail);
        }

        Ok(ContactInput {
            first_name: required(ContactField::FirstName),
            last_name: required(ContactField::LastName),
            email,
            phone: required(ContactField::Phone),
            company: non_blank(self.company.as_deref()),
            job_title: non_blank(self.job_title.as_deref()),
        })
    }
}
