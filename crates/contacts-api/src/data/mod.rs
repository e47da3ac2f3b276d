pub use contacts_core::contact;
pub use contacts_core::search;
pub use contacts_core::validation;

pub use contacts_core::Contact;
pub use contacts_core::ContactField;
pub use contacts_core::ContactInput;
pub use contacts_core::ContactPayload;
pub use contacts_core::FieldError;
