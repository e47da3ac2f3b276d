use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[arg(long, env = "HTTP_ADDRESS", default_value = "127.0.0.1")]
    pub http_address: String,
    #[arg(long, env = "HTTP_PORT", default_value_t = 3001)]
    pub http_port: u16,
    /// e.g. ws://localhost:8800, or rocksdb://data/surrealdb with the embedded-db feature
    #[arg(long, env = "SURREAL_DB_CONNECTION", default_value = "ws://localhost:8800")]
    pub surreal_db_connection: String,
    #[arg(long, env = "SURREAL_DB_NAMESPACE", default_value = "default")]
    pub surreal_db_namespace: String,
    #[arg(long, env = "SURREAL_DB_DATABASE", default_value = "contacts")]
    pub surreal_db_database: String,
}

impl Config {
    pub fn http_listen_url(&self) -> String {
        format!("http://{}:{}", self.http_address, self.http_port)
    }
}
