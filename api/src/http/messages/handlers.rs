use axum::{
    Json,
    extract::{Path, State},
};
use socialmedia_core::domain::{
    account::ports::AccountService,
    common::CoreError,
    message::{
        entities::{InsertMessageInput, Message, MessageId, UpdateMessageRequest},
        ports::MessageService,
    },
};

use crate::http::server::{ApiError, AppState, Response};

#[utoipa::path(
    post,
    path = "/messages",
    tag = "messages",
    request_body = InsertMessageInput,
    responses(
        (status = 200, description = "Message created successfully", body = Message),
        (status = 400, description = "Bad request - Invalid text or author mismatch")
    )
)]
#[tracing::instrument(skip(state, request))]
pub async fn create_message(
    State(state): State<AppState>,
    Json(request): Json<InsertMessageInput>,
) -> Result<Response<Message>, ApiError> {
    // Resolve the claimed author here; the service checks it matches.
    let account = state.service.get_account_by_id(request.posted_by).await?;
    let message = state.service.create_message(request, account).await?;
    Ok(Response::ok(message))
}

#[utoipa::path(
    get,
    path = "/messages",
    tag = "messages",
    responses(
        (status = 200, description = "All messages, possibly empty", body = Vec<Message>)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_all_messages(
    State(state): State<AppState>,
) -> Result<Response<Vec<Message>>, ApiError> {
    let messages = state.service.get_all_messages().await?;
    Ok(Response::ok(messages))
}

#[utoipa::path(
    get,
    path = "/messages/{message_id}",
    tag = "messages",
    params(
        ("message_id" = i64, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Message retrieved successfully, or an empty body when no such message exists", body = Message)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_message_by_id(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response<Message>, ApiError> {
    match state.service.get_message_by_id(MessageId(id)).await {
        Ok(message) => Ok(Response::ok(message)),
        Err(CoreError::MessageNotFound { .. }) => Ok(Response::empty()),
        Err(e) => Err(e.into()),
    }
}

#[utoipa::path(
    patch,
    path = "/messages/{message_id}",
    tag = "messages",
    params(
        ("message_id" = i64, Path, description = "Message ID")
    ),
    request_body = UpdateMessageRequest,
    responses(
        (status = 200, description = "Message updated successfully", body = Message),
        (status = 400, description = "Bad request - No such message or invalid text")
    )
)]
#[tracing::instrument(skip(state, request))]
pub async fn update_message_by_id(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(request): Json<UpdateMessageRequest>,
) -> Result<Response<Message>, ApiError> {
    let input = request.into_input(MessageId(id));
    let message = state.service.update_message(input).await?;
    Ok(Response::ok(message))
}

#[utoipa::path(
    delete,
    path = "/messages/{message_id}",
    tag = "messages",
    params(
        ("message_id" = i64, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Deleted message echoed back, or an empty body when no such message exists", body = Message)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn delete_message_by_id(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response<Message>, ApiError> {
    // Fetch first so the deleted row can be echoed back; a miss is an empty 200.
    match state.service.get_message_by_id(MessageId(id)).await {
        Ok(message) => {
            state.service.delete_message(&message).await?;
            Ok(Response::ok(message))
        }
        Err(CoreError::MessageNotFound { .. }) => Ok(Response::empty()),
        Err(e) => Err(e.into()),
    }
}
