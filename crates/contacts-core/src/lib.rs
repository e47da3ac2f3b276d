pub mod contact;
pub mod search;
#[cfg(test)]
mod tests;
pub mod util;
pub mod validation;

pub use contact::{Contact, ContactField, ContactInput, ContactPayload};
pub use validation::FieldError;
