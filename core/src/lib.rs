pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use application::{MIGRATOR, SocialMediaService, create_repositories};
pub use domain::common::services::Service;
pub use infrastructure::account::repositories::sqlite::SqliteAccountRepository;
pub use infrastructure::message::repositories::sqlite::SqliteMessageRepository;
