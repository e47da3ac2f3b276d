use super::Result;
use log::info;
use surrealdb::{
    Surreal,
    engine::any::{Any, connect},
};

pub mod contact;

/// Connection settings for SurrealDB
#[derive(Debug, Clone)]
pub struct SurrealDbConfig {
    pub connection_string: String,
    pub namespace: String,
    pub database: String,
}

impl SurrealDbConfig {
    pub fn new(connection_string: &str) -> Self {
        Self {
            connection_string: connection_string.to_owned(),
            ..Default::default()
        }
    }
}

impl Default for SurrealDbConfig {
    fn default() -> Self {
        Self {
            connection_string: "ws://localhost:8800".to_owned(),
            namespace: "default".to_owned(),
            database: "contacts".to_owned(),
        }
    }
}

/// Connects to SurrealDB and selects the configured namespace and database
pub async fn get_surreal_db(config: &SurrealDbConfig) -> Result<Surreal<Any>> {
    info!(
        "Connecting to SurrealDB at {} (ns: {}, db: {})",
        config.connection_string, config.namespace, config.database
    );
    let db = connect(&config.connection_string).await?;
    db.use_ns(&config.namespace)
        .use_db(&config.database)
        .await?;
    Ok(db)
}

/// Creates a fresh in-memory database, only available with the `kv-mem` feature of surrealdb
pub async fn get_memory_db(namespace: &str, database: &str) -> Result<Surreal<Any>> {
    let db = connect("mem://").await?;
    db.use_ns(namespace).use_db(database).await?;
    Ok(db)
}
