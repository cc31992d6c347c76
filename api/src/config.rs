use clap::Parser;
use sqlx::sqlite::SqliteConnectOptions;
use std::path::PathBuf;

#[derive(Clone, Parser, Debug, Default)]
#[command(name = "socialmedia-api")]
#[command(about = "Social Media API Server", long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub database: DatabaseConfig,

    #[command(flatten)]
    pub server: ServerConfig,
}

#[derive(Clone, Parser, Debug, Default)]
pub struct DatabaseConfig {
    #[arg(
        long = "database-path",
        env = "DATABASE_PATH",
        default_value = "social_media.db"
    )]
    pub path: PathBuf,
}

impl From<DatabaseConfig> for SqliteConnectOptions {
    fn from(config: DatabaseConfig) -> Self {
        SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(true)
    }
}

#[derive(Clone, Parser, Debug, Default)]
pub struct ServerConfig {
    #[arg(
        long = "server-api-port",
        env = "API_PORT",
        default_value = "8080",
        name = "api_port"
    )]
    pub api_port: u16,
}
