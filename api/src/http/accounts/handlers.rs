use axum::{
    Json,
    extract::{Path, State},
};
use socialmedia_core::domain::{
    account::{
        entities::{Account, AccountId, Credentials, InsertAccountInput},
        ports::AccountService,
    },
    message::{entities::Message, ports::MessageService},
};

use crate::http::server::{ApiError, AppState, Response};

#[utoipa::path(
    post,
    path = "/register",
    tag = "accounts",
    request_body = InsertAccountInput,
    responses(
        (status = 200, description = "Account registered successfully", body = Account),
        (status = 400, description = "Bad request - Invalid username, password, or duplicate username")
    )
)]
#[tracing::instrument(skip(state, request))]
pub async fn register_account(
    State(state): State<AppState>,
    Json(request): Json<InsertAccountInput>,
) -> Result<Response<Account>, ApiError> {
    let account = state.service.create_account(request).await?;
    Ok(Response::ok(account))
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "accounts",
    request_body = Credentials,
    responses(
        (status = 200, description = "Login successful", body = Account),
        (status = 401, description = "Unauthorized - No matching username/password pair")
    )
)]
#[tracing::instrument(skip(state, credentials))]
pub async fn login_account(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Response<Account>, ApiError> {
    match state.service.validate_login(&credentials).await {
        Ok(Some(account)) => Ok(Response::ok(account)),
        // A mismatch and a store failure are indistinguishable to the client.
        Ok(None) | Err(_) => Err(ApiError::Unauthorized),
    }
}

#[utoipa::path(
    get,
    path = "/accounts/{account_id}/messages",
    tag = "accounts",
    params(
        ("account_id" = i64, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Messages posted by the account, possibly empty", body = Vec<Message>),
        (status = 400, description = "Bad request")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_messages_by_account_id(
    Path(account_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response<Vec<Message>>, ApiError> {
    let messages = state
        .service
        .get_messages_by_account_id(AccountId(account_id))
        .await?;
    Ok(Response::ok(messages))
}
