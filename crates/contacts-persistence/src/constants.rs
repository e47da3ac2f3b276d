// DB constants
pub const DB_TABLE: &str = "table";

pub const DB_EMAIL: &str = "email";
pub const DB_PHONE: &str = "phone";
