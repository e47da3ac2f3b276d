#[cfg(test)]
#[allow(clippy::module_inception)]
pub mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use contacts_core::{Contact, ContactPayload};

    fn timestamp(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap()
    }

    pub fn valid_payload() -> ContactPayload {
        ContactPayload {
            first_name: Some("Ann".to_string()),
            last_name: Some("Lee".to_string()),
            email: Some("ann@example.com".to_string()),
            phone: Some("555-1111".to_string()),
            company: Some("Acme".to_string()),
            job_title: None,
        }
    }

    pub fn contact(id: &str, first_name: &str, last_name: &str, phone: &str) -> Contact {
        Contact {
            id: id.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: format!("{id}@example.com"),
            phone: phone.to_string(),
            company: None,
            job_title: None,
            created_at: timestamp(1),
            updated_at: timestamp(1),
        }
    }

    pub fn ann_lee() -> Contact {
        contact("ann", "Ann", "Lee", "555-1111")
    }

    pub fn bob_ng() -> Contact {
        contact("bob", "Bob", "Ng", "555-2222")
    }

    /// `count` contacts with distinct ids and phone numbers
    pub fn many_contacts(count: usize) -> Vec<Contact> {
        (0..count)
            .map(|i| contact(&format!("c{i}"), "Person", &format!("No{i}"), &format!("100-{i:04}")))
            .collect()
    }
}
