use crate::util::date::DateTimeUtc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fields of a contact that can be set by a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Phone,
    Company,
    JobTitle,
}

impl ContactField {
    /// The required fields, in the order they are validated
    pub const REQUIRED: [ContactField; 4] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::Phone,
    ];

    /// The name of the field on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::FirstName => "firstName",
            ContactField::LastName => "lastName",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Company => "company",
            ContactField::JobTitle => "jobTitle",
        }
    }

    /// A human readable label for the field
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::FirstName => "First name",
            ContactField::LastName => "Last name",
            ContactField::Email => "Email",
            ContactField::Phone => "Phone number",
            ContactField::Company => "Company",
            ContactField::JobTitle => "Job title",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted contact record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl Contact {
    /// Creates a new contact from validated input, both timestamps are set to `now`
    pub fn new(id: String, input: ContactInput, now: DateTimeUtc) -> Self {
        Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            company: input.company,
            job_title: input.job_title,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces all mutable fields with the given input and refreshes `updated_at`.
    /// The id and `created_at` stay untouched.
    pub fn apply(&mut self, input: ContactInput, now: DateTimeUtc) {
        self.first_name = input.first_name;
        self.last_name = input.last_name;
        self.email = input.email;
        self.phone = input.phone;
        self.company = input.company;
        self.job_title = input.job_title;
        self.updated_at = now;
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns true, if the already normalized query is contained in the full name or the phone
    /// number of the contact, ignoring case
    pub fn matches_search(&self, normalized_query: &str) -> bool {
        self.full_name().to_lowercase().contains(normalized_query)
            || self.phone.to_lowercase().contains(normalized_query)
    }
}

/// The raw input for creating or editing a contact, as sent by a client.
/// Every field may be missing, use [`ContactPayload::validate`] to get a [`ContactInput`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
}

impl ContactPayload {
    /// Returns the value of the given field, if it's set
    pub fn get(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::FirstName => self.first_name.as_deref(),
            ContactField::LastName => self.last_name.as_deref(),
            ContactField::Email => self.email.as_deref(),
            ContactField::Phone => self.phone.as_deref(),
            ContactField::Company => self.company.as_deref(),
            ContactField::JobTitle => self.job_title.as_deref(),
        }
    }
}

impl From<&Contact> for ContactPayload {
    fn from(value: &Contact) -> Self {
        Self {
            first_name: Some(value.first_name.clone()),
            last_name: Some(value.last_name.clone()),
            email: Some(value.email.clone()),
            phone: Some(value.phone.clone()),
            company: value.company.clone(),
            job_title: value.job_title.clone(),
        }
    }
}

/// Validated contact input - required fields are trimmed and non-empty, blank optional fields
/// are `None`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub job_title: Option<String>,
}
