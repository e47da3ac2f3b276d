use chrono::{DateTime, Utc};
use contacts_api::data::{Contact, ContactPayload};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub trait IntoWeb<T> {
    fn into_web(self) -> T;
}

pub trait FromWeb<T> {
    fn from_web(value: T) -> Self;
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub message: String,
}

/// A contact as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactWeb {
    /// The system assigned, immutable identifier
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl IntoWeb<ContactWeb> for Contact {
    fn into_web(self) -> ContactWeb {
        ContactWeb {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            company: self.company,
            job_title: self.job_title,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// The payload for creating and editing a contact. Required fields are checked by the service,
/// so that a missing field is reported as a validation error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactPayloadWeb {
    /// required
    pub first_name: Option<String>,
    /// required
    pub last_name: Option<String>,
    /// required, has to look like local@domain.tld
    pub email: Option<String>,
    /// required
    pub phone: Option<String>,
    pub company: Option<String>,
    pub job_title: Option<String>,
}

impl FromWeb<ContactPayloadWeb> for ContactPayload {
    fn from_web(value: ContactPayloadWeb) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            phone: value.phone,
            company: value.company,
            job_title: value.job_title,
        }
    }
}
