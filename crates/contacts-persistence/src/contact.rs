use contacts_core::Contact;

use super::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ContactStoreApi: Send + Sync {
    /// Returns all contacts, oldest first
    async fn get_all(&self) -> Result<Vec<Contact>>;
    /// Returns the contact with the given id, if it exists
    async fn get(&self, id: &str) -> Result<Option<Contact>>;
    /// Checks if there is a contact with exactly the given phone number
    async fn exists_with_phone(&self, phone: &str) -> Result<bool>;
    /// Checks if there is a contact with exactly the given email
    async fn exists_with_email(&self, email: &str) -> Result<bool>;
    /// Inserts the contact under its id
    async fn insert(&self, data: &Contact) -> Result<()>;
    /// Replaces the contact with the given id, fails with `NoSuchEntity` if it doesn't exist
    async fn update(&self, id: &str, data: &Contact) -> Result<()>;
    /// Deletes the contact with the given id, fails with `NoSuchEntity` if it doesn't exist
    async fn delete(&self, id: &str) -> Result<()>;
}
