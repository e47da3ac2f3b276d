use crate::contact::Contact;

/// Normalizes a search query by trimming surrounding whitespace and lowercasing it
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Filters the given contacts by a case-insensitive substring match on the full name
/// (`first_name last_name`) or the phone number. An empty query returns all contacts in their
/// original order.
pub fn filter_contacts(contacts: &[Contact], query: &str) -> Vec<Contact> {
    let query = normalize_query(query);
    if query.is_empty() {
        return contacts.to_vec();
    }
    contacts
        .iter()
        .filter(|c| c.matches_search(&query))
        .cloned()
        .collect()
}
