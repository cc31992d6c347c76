use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

use socialmedia_core::create_repositories;

use crate::{
    config::Config,
    http::{
        accounts::routes::account_routes,
        health::routes::health_routes,
        messages::routes::message_routes,
        server::{ApiError, AppState},
    },
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Social Media API",
    description = "Account registration/login and message CRUD"
))]
struct ApiDoc;

pub struct App {
    state: AppState,
    config: Config,
}

impl App {
    pub async fn new(config: Config) -> Result<Self, ApiError> {
        let repositories = create_repositories(config.database.clone().into()).await?;
        let state = AppState::from(repositories);
        Ok(Self { state, config })
    }

    pub async fn start(self) -> Result<(), ApiError> {
        let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(account_routes())
            .merge(message_routes())
            .split_for_parts();

        let router = router
            .merge(health_routes())
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(self.state)
            .merge(Scalar::with_url("/docs", api));

        let listener = TcpListener::bind(("0.0.0.0", self.config.server.api_port)).await?;
        info!("listening on {}", listener.local_addr()?);
        axum::serve(listener, router).await?;
        Ok(())
    }
}
