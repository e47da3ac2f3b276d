#[cfg(test)]
#[allow(clippy::module_inception)]
pub mod tests {
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use contacts_core::{Contact, ContactPayload};
    use contacts_persistence::{ContactStoreApi, Result};

    // Need to wrap mocks, because traits are in a different crate
    mockall::mock! {
        pub ContactStoreApiMock {}

        #[async_trait]
        impl ContactStoreApi for ContactStoreApiMock {
            async fn get_all(&self) -> Result<Vec<Contact>>;
            async fn get(&self, id: &str) -> Result<Option<Contact>>;
            async fn exists_with_phone(&self, phone: &str) -> Result<bool>;
            async fn exists_with_email(&self, email: &str) -> Result<bool>;
            async fn insert(&self, data: &Contact) -> Result<()>;
            async fn update(&self, id: &str, data: &Contact) -> Result<()>;
            async fn delete(&self, id: &str) -> Result<()>;
        }
    }

    pub fn get_baseline_payload() -> ContactPayload {
        ContactPayload {
            first_name: Some("Ann".to_string()),
            last_name: Some("Lee".to_string()),
            email: Some("ann@example.com".to_string()),
            phone: Some("555-1111".to_string()),
            company: Some("Acme".to_string()),
            job_title: Some("Engineer".to_string()),
        }
    }

    pub fn get_baseline_contact(id: &str) -> Contact {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        Contact {
            id: id.to_owned(),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "ann@example.com".to_string(),
            phone: "555-1111".to_string(),
            company: Some("Acme".to_string()),
            job_title: Some("Engineer".to_string()),
            created_at: created,
            updated_at: created,
        }
    }
}
