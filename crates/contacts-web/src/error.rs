use contacts_api::service;
use std::fmt;
use thiserror::Error;

/// The operation a request was executing when it failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOperation {
    Create,
    List,
    Update,
    Delete,
}

impl ContactOperation {
    /// The message returned to the caller if the operation fails unexpectedly
    pub fn failure_message(&self) -> &'static str {
        match self {
            ContactOperation::Create => "Error creating contact",
            ContactOperation::List => "Error retrieving contacts",
            ContactOperation::Update => "Error updating contact",
            ContactOperation::Delete => "Error deleting contact",
        }
    }
}

impl fmt::Display for ContactOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContactOperation::Create => "creating contact",
            ContactOperation::List => "retrieving contacts",
            ContactOperation::Update => "updating contact",
            ContactOperation::Delete => "deleting contact",
        };
        f.write_str(name)
    }
}

/// Generic error type
#[derive(Debug, Error)]
pub enum Error {
    /// errors originating from the contact service, with the operation and its input
    #[error("Error {operation} ({context}): {source}")]
    Contact {
        operation: ContactOperation,
        context: String,
        #[source]
        source: service::Error,
    },
}

impl Error {
    pub fn contact(
        operation: ContactOperation,
        context: impl Into<String>,
        source: service::Error,
    ) -> Self {
        Error::Contact {
            operation,
            context: context.into(),
            source,
        }
    }
}
