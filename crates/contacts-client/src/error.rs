use thiserror::Error;

/// Generic result type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors of the contacts client. The display strings are shown to the user.
#[derive(Debug, Error)]
pub enum Error {
    /// the request could not be sent, or the response could not be read
    #[error("Could not reach the contacts API: {0}")]
    Http(#[from] reqwest::Error),

    /// the API answered with a non-2xx status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// the API answered with a body that isn't what we expected
    #[error("Unexpected response from the contacts API: {0}")]
    Decode(String),
}

impl Error {
    /// The HTTP status of the response, if the API answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e.to_string())
    }
}
