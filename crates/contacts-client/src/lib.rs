pub mod api;
pub mod controller;
mod error;
#[cfg(test)]
mod tests;
pub mod view;

pub use api::{ContactsApi, HttpContactsApi};
pub use controller::{ContactsController, ContactsState};
pub use error::{Error, Result};
pub use view::{ContactsView, FormErrors, Notification, Severity};
