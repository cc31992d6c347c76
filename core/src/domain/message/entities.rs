use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::account::entities::AccountId;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, sqlx::Type,
)]
#[sqlx(transparent)]
pub struct MessageId(pub i64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MessageId {
    fn from(id: i64) -> Self {
        MessageId(id)
    }
}

impl From<MessageId> for i64 {
    fn from(message_id: MessageId) -> Self {
        message_id.0
    }
}

/// A text post authored by an account. `time_posted_epoch` is supplied by the
/// caller, not generated here.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema, sqlx::FromRow)]
pub struct Message {
    #[serde(rename = "message_id")]
    #[sqlx(rename = "message_id")]
    pub id: MessageId,
    pub posted_by: AccountId,
    pub message_text: String,
    pub time_posted_epoch: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct InsertMessageInput {
    pub posted_by: AccountId,
    pub message_text: String,
    pub time_posted_epoch: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdateMessageInput {
    pub id: MessageId,
    pub message_text: String,
}

/// Patch body for a message update: only the text can change.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdateMessageRequest {
    pub message_text: String,
}

impl UpdateMessageRequest {
    pub fn into_input(self, id: MessageId) -> UpdateMessageInput {
        UpdateMessageInput {
            id,
            message_text: self.message_text,
        }
    }
}
