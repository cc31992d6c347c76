use socialmedia_core::{SocialMediaService, application::SocialMediaRepositories};

/// Application state shared across request handlers
#[derive(Clone)]
pub struct AppState {
    pub service: SocialMediaService,
}

impl AppState {
    pub fn new(service: SocialMediaService) -> Self {
        Self { service }
    }

    /// Shutdown the underlying database pool
    pub async fn shutdown(&self) {
        self.service.shutdown_pool().await
    }
}

impl From<SocialMediaRepositories> for AppState {
    fn from(repositories: SocialMediaRepositories) -> Self {
        AppState {
            service: repositories.into(),
        }
    }
}
