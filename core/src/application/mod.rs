use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::{
    domain::common::{CoreError, services::Service},
    infrastructure::{
        account::repositories::sqlite::SqliteAccountRepository,
        message::repositories::sqlite::SqliteMessageRepository,
    },
};

/// Embedded schema migrations, applied by [`create_repositories`]. Exposed so
/// tests can run them against a pool of their own.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Concrete service type with SQLite repositories.
pub type SocialMediaService = Service<SqliteAccountRepository, SqliteMessageRepository>;

#[derive(Clone)]
pub struct SocialMediaRepositories {
    pool: SqlitePool,
    pub account_repository: SqliteAccountRepository,
    pub message_repository: SqliteMessageRepository,
}

pub async fn create_repositories(
    connect_options: SqliteConnectOptions,
) -> Result<SocialMediaRepositories, CoreError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(connect_options)
        .await
        .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

    MIGRATOR
        .run(&pool)
        .await
        .map_err(|e| CoreError::DatabaseError { msg: e.to_string() })?;

    let account_repository = SqliteAccountRepository::new(pool.clone());
    let message_repository = SqliteMessageRepository::new(pool.clone());

    Ok(SocialMediaRepositories {
        pool,
        account_repository,
        message_repository,
    })
}

impl From<SocialMediaRepositories> for SocialMediaService {
    fn from(repositories: SocialMediaRepositories) -> Self {
        Service::new(
            repositories.account_repository,
            repositories.message_repository,
        )
    }
}

impl SocialMediaRepositories {
    pub async fn shutdown_pool(&self) {
        self.pool.close().await;
    }
}

impl SocialMediaService {
    pub async fn shutdown_pool(&self) {
        self.account_repository.pool.close().await;
    }
}
