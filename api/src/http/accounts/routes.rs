use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    http::accounts::handlers::{
        __path_get_messages_by_account_id, __path_login_account, __path_register_account,
        get_messages_by_account_id, login_account, register_account,
    },
    http::server::AppState,
};

pub fn account_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(register_account))
        .routes(routes!(login_account))
        .routes(routes!(get_messages_by_account_id))
}
