use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    http::messages::handlers::{
        __path_create_message, __path_delete_message_by_id, __path_get_all_messages,
        __path_get_message_by_id, __path_update_message_by_id, create_message,
        delete_message_by_id, get_all_messages, get_message_by_id, update_message_by_id,
    },
    http::server::AppState,
};

pub fn message_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_message))
        .routes(routes!(get_all_messages))
        .routes(routes!(get_message_by_id))
        .routes(routes!(update_message_by_id))
        .routes(routes!(delete_message_by_id))
}
