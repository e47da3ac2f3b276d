// General
pub const CONTACTS_BASE_PATH: &str = "/api/contact";

// Validation
pub const MAX_JSON_SIZE_BYTES: u64 = 64 * 1024;
