use crate::Result;
use crate::api::ContactsApi;
use contacts_core::{Contact, ContactPayload};
use log::{error, info};
use std::sync::Arc;

/// The data state of the client. `loading` is true until the first fetch finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactsState {
    pub contacts: Vec<Contact>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ContactsState {
    fn default() -> Self {
        Self {
            contacts: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

/// Owns the list of contacts. The list is never changed locally, every successful mutation is
/// followed by a full refetch.
pub struct ContactsController {
    api: Arc<dyn ContactsApi>,
    state: ContactsState,
}

impl ContactsController {
    pub fn new(api: Arc<dyn ContactsApi>) -> Self {
        Self {
            api,
            state: ContactsState::default(),
        }
    }

    pub fn state(&self) -> &ContactsState {
        &self.state
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.state.contacts
    }

    /// Fetches the list for the first time
    pub async fn load(&mut self) {
        self.state.loading = true;
        self.refresh().await;
    }

    /// Refetches the full list. On failure, the previous list is kept.
    pub async fn refresh(&mut self) {
        match self.api.list().await {
            Ok(contacts) => {
                self.state.contacts = contacts;
                self.state.error = None;
            }
            Err(e) => {
                error!("Error fetching contacts: {e}");
                self.state.error = Some(e.to_string());
            }
        }
        self.state.loading = false;
    }

    /// Creates a contact. The error is recorded and returned to the caller, so a form can stay
    /// open.
    pub async fn add(&mut self, payload: &ContactPayload) -> Result<()> {
        match self.api.create(payload).await {
            Ok(contact) => {
                info!("Created contact {}", contact.id);
                self.refresh().await;
                Ok(())
            }
            Err(e) => {
                error!("Error adding contact: {e}");
                self.state.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Updates a contact, returns whether it worked
    pub async fn update(&mut self, id: &str, payload: &ContactPayload) -> bool {
        match self.api.update(id, payload).await {
            Ok(_) => {
                info!("Updated contact {id}");
                self.refresh().await;
                true
            }
            Err(e) => {
                error!("Error updating contact {id}: {e}");
                self.state.error = Some(e.to_string());
                false
            }
        }
    }

    /// Deletes a contact, returns whether it worked
    pub async fn delete(&mut self, id: &str) -> bool {
        match self.api.delete(id).await {
            Ok(()) => {
                info!("Deleted contact {id}");
                self.refresh().await;
                true
            }
            Err(e) => {
                error!("Error deleting contact {id}: {e}");
                self.state.error = Some(e.to_string());
                false
            }
        }
    }
}
