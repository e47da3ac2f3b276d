pub mod contact_service;

use crate::persistence::DbContext;
use contact_service::{ContactService, ContactServiceApi};
use contacts_core::FieldError;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Generic result type
pub type Result<T> = std::result::Result<T, Error>;

/// Generic error type
#[derive(Debug, Error)]
pub enum Error {
    /// all errors originating from the persistence layer
    #[error("Persistence error: {0}")]
    Persistence(#[from] contacts_persistence::Error),

    /// errors that currently return early http status code Status::NotFound
    #[error("not found")]
    NotFound,

    /// errors that stem from validation
    #[error("Validation Error: {0}")]
    Validation(String),

    /// error returned if a unique field is already used by another contact
    #[error("A contact with this {0} already exists")]
    Duplicate(DuplicateField),
}

impl From<FieldError> for Error {
    fn from(value: FieldError) -> Self {
        Error::Validation(value.to_string())
    }
}

/// The contact fields that have to be unique across all contacts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateField {
    Email,
    Phone,
}

impl fmt::Display for DuplicateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateField::Email => f.write_str("email"),
            DuplicateField::Phone => f.write_str("phone"),
        }
    }
}

/// A dependency container for all services that are used by the application
#[derive(Clone)]
pub struct ServiceContext {
    pub contact_service: Arc<dyn ContactServiceApi>,
}

/// building up the service context dependencies here
pub fn create_service_context(db: DbContext) -> ServiceContext {
    let contact_service = Arc::new(ContactService::new(db.contact_store));

    ServiceContext { contact_service }
}
