#[cfg(test)]
#[allow(clippy::module_inception)]
pub mod tests {
    use crate::{Contact, ContactPayload};
    use chrono::{TimeZone, Utc};

    pub fn valid_payload() -> ContactPayload {
        ContactPayload {
            first_name: Some("Ann".to_string()),
            last_name: Some("Lee".to_string()),
            email: Some("ann@example.com".to_string()),
            phone: Some("555-1111".to_string()),
            company: Some("Acme".to_string()),
            job_title: Some("Engineer".to_string()),
        }
    }

    pub fn ann_lee() -> Contact {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        Contact {
            id: "ann".to_string(),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "ann@example.com".to_string(),
            phone: "555-1111".to_string(),
            company: Some("Acme".to_string()),
            job_title: None,
            created_at: created,
            updated_at: created,
        }
    }

    pub fn bob_ng() -> Contact {
        let created = Utc.with_ymd_and_hms(2024, 1, 2, 12, 0, 0).unwrap();
        Contact {
            id: "bob".to_string(),
            first_name: "Bob".to_string(),
            last_name: "Ng".to_string(),
            email: "bob@example.com".to_string(),
            phone: "555-2222".to_string(),
            company: None,
            job_title: None,
            created_at: created,
            updated_at: created,
        }
    }
}
