use super::{DuplicateField, Error, Result};
use crate::data::{Contact, ContactPayload};
use crate::persistence::contact::ContactStoreApi;
use async_trait::async_trait;
use contacts_core::util::{date, get_uuid_v4};
use log::{debug, info};
use std::sync::Arc;

#[async_trait]
pub trait ContactServiceApi: Send + Sync {
    /// Returns all contacts, without filtering or pagination
    async fn list_contacts(&self) -> Result<Vec<Contact>>;

    /// Returns the contact with the given id
    async fn get_contact(&self, id: &str) -> Result<Contact>;

    /// Validates the payload, checks that phone and email are not used by another contact yet
    /// and stores a new contact with a fresh id and timestamps
    async fn create_contact(&self, payload: &ContactPayload) -> Result<Contact>;

    /// Validates the payload and replaces the mutable fields of the contact with the given id.
    ///
    /// Unlike [`ContactServiceApi::create_contact`], this does NOT check phone and email for
    /// uniqueness, so a contact can be edited into a duplicate. This is intended behaviour for
    /// now, as is the unguarded check-then-insert in create, which can let two concurrent
    /// creates with the same phone or email through.
    async fn update_contact(&self, id: &str, payload: &ContactPayload) -> Result<Contact>;

    /// Permanently removes the contact with the given id
    async fn delete_contact(&self, id: &str) -> Result<()>;
}

/// The contact service is responsible for managing the contacts
#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn ContactStoreApi>,
}

impl ContactService {
    pub fn new(store: Arc<dyn ContactStoreApi>) -> Self {
        Self { store }
    }
}

fn map_missing(err: contacts_persistence::Error) -> Error {
    match err {
        contacts_persistence::Error::NoSuchEntity(_, _) => Error::NotFound,
        e => Error::Persistence(e),
    }
}

#[async_trait]
impl ContactServiceApi for ContactService {
    async fn list_contacts(&self) -> Result<Vec<Contact>> {
        let contacts = self.store.get_all().await?;
        Ok(contacts)
    }

    async fn get_contact(&self, id: &str) -> Result<Contact> {
        match self.store.get(id).await? {
            Some(contact) => Ok(contact),
            None => Err(Error::NotFound),
        }
    }

    async fn create_contact(&self, payload: &ContactPayload) -> Result<Contact> {
        let input = payload.validate()?;

        if self.store.exists_with_phone(&input.phone).await? {
            debug!("Rejecting new contact, phone {} is taken", input.phone);
            return Err(Error::Duplicate(DuplicateField::Phone));
        }
        if self.store.exists_with_email(&input.email).await? {
            debug!("Rejecting new contact, email {} is taken", input.email);
            return Err(Error::Duplicate(DuplicateField::Email));
        }

        let contact = Contact::new(get_uuid_v4().to_string(), input, date::now());
        self.store.insert(&contact).await?;
        info!("Created contact {}", contact.id);
        Ok(contact)
    }

    async fn update_contact(&self, id: &str, payload: &ContactPayload) -> Result<Contact> {
        let input = payload.validate()?;

        let mut contact = self.get_contact(id).await?;
        contact.apply(input, date::now());
        self.store.update(id, &contact).await.map_err(map_missing)?;
        info!("Updated contact {id}");
        Ok(contact)
    }

    async fn delete_contact(&self, id: &str) -> Result<()> {
        self.store.delete(id).await.map_err(map_missing)?;
        info!("Deleted contact {id}");
        Ok(())
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::tests::tests::{
        MockContactStoreApiMock, get_baseline_contact, get_baseline_payload,
    };
    use contacts_persistence::{SurrealContactStore, get_memory_db};

    fn get_service(mock_storage: MockContactStoreApiMock) -> ContactService {
        ContactService::new(Arc::new(mock_storage))
    }

    async fn get_memory_service() -> ContactService {
        let db = get_memory_db("test", "contact_service")
            .await
            .expect("could not create memory db");
        ContactService::new(Arc::new(SurrealContactStore::new(db)))
    }

    #[tokio::test]
    async fn list_contacts_baseline() {
        let mut store = MockContactStoreApiMock::new();
        store
            .expect_get_all()
            .returning(|| Ok(vec![get_baseline_contact("1"), get_baseline_contact("2")]));
        let result = get_service(store).list_contacts().await;
        assert!(result.is_ok());
        assert_eq!(result.as_ref().unwrap().len(), 2);
        assert_eq!(result.as_ref().unwrap()[1].id, "2");
    }

    #[tokio::test]
    async fn list_contacts_propagates_persistence_errors() {
        let mut store = MockContactStoreApiMock::new();
        store.expect_get_all().returning(|| {
            Err(contacts_persistence::Error::InsertFailed(
                "broken".to_string(),
            ))
        });
        let result = get_service(store).list_contacts().await;
        assert!(matches!(result, Err(Error::Persistence(_))));
    }

    #[tokio::test]
    async fn get_contact_not_found() {
        let mut store = MockContactStoreApiMock::new();
        store.expect_get().returning(|_| Ok(None));
        let result = get_service(store).get_contact("1").await;
        assert!(matches!(result, Err(Error::NotFound)));
    }

    #[tokio::test]
    async fn create_contact_baseline() {
        let mut store = MockContactStoreApiMock::new();
        store
            .expect_exists_with_phone()
            .withf(|phone| phone == "555-1111")
            .returning(|_| Ok(false));
        store
            .expect_exists_with_email()
            .withf(|email| email == "ann@example.com")
            .returning(|_| Ok(false));
        store.expect_insert().times(1).returning(|_| Ok(()));

        let contact = get_service(store)
            .create_contact(&get_baseline_payload())
            .await
            .unwrap();
        assert!(!contact.id.is_empty());
        assert_eq!(contact.created_at, contact.updated_at);
        assert_eq!(contact.first_name, "Ann");
        assert_eq!(contact.job_title, Some("Engineer".to_string()));
    }

    #[tokio::test]
    async fn create_contact_blank_phone_fails_without_persisting() {
        let mut store = MockContactStoreApiMock::new();
        store.expect_exists_with_phone().never();
        store.expect_exists_with_email().never();
        store.expect_insert().never();

        let mut payload = get_baseline_payload();
        payload.phone = Some("".to_string());
        let result = get_service(store).create_contact(&payload).await;
        assert!(matches!(result, Err(Error::Validation(ref msg)) if msg == "Phone number is required"));
    }

    #[tokio::test]
    async fn create_contact_whitespace_only_names_fail() {
        let mut store = MockContactStoreApiMock::new();
        store.expect_insert().never();

        let mut payload = get_baseline_payload();
        payload.last_name = Some("   ".to_string());
        let result = get_service(store).create_contact(&payload).await;
        assert!(matches!(result, Err(Error::Validation(ref msg)) if msg == "Last name is required"));
    }

    #[tokio::test]
    async fn create_contact_invalid_email() {
        let mut store = MockContactStoreApiMock::new();
        store.expect_insert().never();

        let mut payload = get_baseline_payload();
        payload.email = Some("ann-at-example".to_string());
        let result = get_service(store).create_contact(&payload).await;
        assert!(matches!(result, Err(Error::Validation(ref msg)) if msg == "Invalid email format"));
    }

    #[tokio::test]
    async fn create_contact_duplicate_phone_is_checked_first() {
        let mut store = MockContactStoreApiMock::new();
        store.expect_exists_with_phone().returning(|_| Ok(true));
        store.expect_exists_with_email().never();
        store.expect_insert().never();

        let result = get_service(store)
            .create_contact(&get_baseline_payload())
            .await;
        assert!(matches!(
            result,
            Err(Error::Duplicate(DuplicateField::Phone))
        ));
    }

    #[tokio::test]
    async fn create_contact_duplicate_email() {
        let mut store = MockContactStoreApiMock::new();
        store.expect_exists_with_phone().returning(|_| Ok(false));
        store.expect_exists_with_email().returning(|_| Ok(true));
        store.expect_insert().never();

        let result = get_service(store)
            .create_contact(&get_baseline_payload())
            .await;
        assert!(matches!(
            result,
            Err(Error::Duplicate(DuplicateField::Email))
        ));
    }

    #[tokio::test]
    async fn update_contact_baseline() {
        let mut store = MockContactStoreApiMock::new();
        let existing = get_baseline_contact("1");
        let created_at = existing.created_at;
        store
            .expect_get()
            .withf(|id| id == "1")
            .returning(move |_| Ok(Some(existing.clone())));
        store
            .expect_update()
            .withf(|id, c| id == "1" && c.first_name == "Anna")
            .times(1)
            .returning(|_, _| Ok(()));

        let mut payload = get_baseline_payload();
        payload.first_name = Some("Anna".to_string());
        let contact = get_service(store)
            .update_contact("1", &payload)
            .await
            .unwrap();
        assert_eq!(contact.id, "1");
        assert_eq!(contact.first_name, "Anna");
        assert_eq!(contact.created_at, created_at);
        assert!(contact.updated_at > created_at);
    }

    #[tokio::test]
    async fn update_contact_not_found_changes_nothing() {
        let mut store = MockContactStoreApiMock::new();
        store.expect_get().returning(|_| Ok(None));
        store.expect_update().never();

        let result = get_service(store)
            .update_contact("nope", &get_baseline_payload())
            .await;
        assert!(matches!(result, Err(Error::NotFound)));
    }

    #[tokio::test]
    async fn update_contact_validates_before_lookup() {
        let mut store = MockContactStoreApiMock::new();
        store.expect_get().never();
        store.expect_update().never();

        let mut payload = get_baseline_payload();
        payload.email = None;
        let result = get_service(store).update_contact("1", &payload).await;
        assert!(matches!(result, Err(Error::Validation(ref msg)) if msg == "Email is required"));
    }

    #[tokio::test]
    async fn update_contact_does_not_check_duplicates() {
        let mut store = MockContactStoreApiMock::new();
        store
            .expect_get()
            .returning(|_| Ok(Some(get_baseline_contact("1"))));
        store.expect_exists_with_phone().never();
        store.expect_exists_with_email().never();
        store.expect_update().returning(|_, _| Ok(()));

        let result = get_service(store)
            .update_contact("1", &get_baseline_payload())
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn update_contact_removed_concurrently() {
        let mut store = MockContactStoreApiMock::new();
        store
            .expect_get()
            .returning(|_| Ok(Some(get_baseline_contact("1"))));
        store.expect_update().returning(|id, _| {
            Err(contacts_persistence::Error::NoSuchEntity(
                "contact".to_string(),
                id.to_owned(),
            ))
        });

        let result = get_service(store)
            .update_contact("1", &get_baseline_payload())
            .await;
        assert!(matches!(result, Err(Error::NotFound)));
    }

    #[tokio::test]
    async fn delete_contact_baseline() {
        let mut store = MockContactStoreApiMock::new();
        store
            .expect_delete()
            .withf(|id| id == "1")
            .times(1)
            .returning(|_| Ok(()));
        assert!(get_service(store).delete_contact("1").await.is_ok());
    }

    #[tokio::test]
    async fn delete_contact_not_found() {
        let mut store = MockContactStoreApiMock::new();
        store.expect_delete().returning(|id| {
            Err(contacts_persistence::Error::NoSuchEntity(
                "contact".to_string(),
                id.to_owned(),
            ))
        });
        let result = get_service(store).delete_contact("1").await;
        assert!(matches!(result, Err(Error::NotFound)));
    }

    #[tokio::test]
    async fn create_then_list_contains_contact_once() {
        let service = get_memory_service().await;
        let created = service
            .create_contact(&get_baseline_payload())
            .await
            .unwrap();

        let contacts = service.list_contacts().await.unwrap();
        let found: Vec<&Contact> = contacts.iter().filter(|c| c.id == created.id).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0], &created);
    }

    #[tokio::test]
    async fn create_with_taken_email_persists_nothing() {
        let service = get_memory_service().await;
        service
            .create_contact(&get_baseline_payload())
            .await
            .unwrap();

        let mut payload = get_baseline_payload();
        payload.phone = Some("555-9999".to_string());
        let result = service.create_contact(&payload).await;
        assert!(matches!(
            result,
            Err(Error::Duplicate(DuplicateField::Email))
        ));
        assert_eq!(service.list_contacts().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_into_existing_email_is_allowed() {
        let service = get_memory_service().await;
        let ann = service
            .create_contact(&get_baseline_payload())
            .await
            .unwrap();
        let mut payload = get_baseline_payload();
        payload.first_name = Some("Bob".to_string());
        payload.email = Some("bob@example.com".to_string());
        payload.phone = Some("555-2222".to_string());
        let bob = service.create_contact(&payload).await.unwrap();

        payload.email = Some(ann.email.clone());
        let updated = service.update_contact(&bob.id, &payload).await.unwrap();
        assert_eq!(updated.email, ann.email);
        assert_eq!(updated.created_at, bob.created_at);
    }

    #[tokio::test]
    async fn update_missing_leaves_store_unchanged() {
        let service = get_memory_service().await;
        let ann = service
            .create_contact(&get_baseline_payload())
            .await
            .unwrap();

        let mut payload = get_baseline_payload();
        payload.first_name = Some("Changed".to_string());
        let result = service.update_contact("does-not-exist", &payload).await;
        assert!(matches!(result, Err(Error::NotFound)));
        assert_eq!(service.list_contacts().await.unwrap(), vec![ann]);
    }

    #[tokio::test]
    async fn delete_twice() {
        let service = get_memory_service().await;
        let ann = service
            .create_contact(&get_baseline_payload())
            .await
            .unwrap();

        assert!(service.delete_contact(&ann.id).await.is_ok());
        assert!(matches!(
            service.delete_contact(&ann.id).await,
            Err(Error::NotFound)
        ));
        assert!(service.list_contacts().await.unwrap().is_empty());
    }
}
