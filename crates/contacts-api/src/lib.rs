pub mod data;
mod persistence;
pub mod service;
#[cfg(test)]
mod tests;

pub use persistence::DbContext;
pub use persistence::get_db_context;

/// Where the contacts are stored
#[derive(Debug, Clone)]
pub struct Config {
    pub surreal_db_connection: String,
    pub surreal_db_namespace: String,
    pub surreal_db_database: String,
}
