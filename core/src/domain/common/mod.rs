use thiserror::Error;

use crate::domain::account::entities::AccountId;
use crate::domain::message::entities::MessageId;

pub mod services;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Username cannot be blank")]
    BlankUsername,

    #[error("Password cannot be empty")]
    EmptyPassword,

    #[error("Password must be at least 4 characters long")]
    PasswordTooShort,

    #[error("The username must be unique")]
    DuplicateUsername,

    #[error("Account already exists")]
    AccountAlreadyExists,

    #[error("Account with id {id} not found")]
    AccountNotFound { id: AccountId },

    #[error("Account must exist when posting a new message")]
    MissingAccount,

    #[error("Account not authorized to modify this message")]
    NotMessageAuthor,

    #[error("Message text cannot be empty")]
    EmptyMessageText,

    #[error("Message text cannot exceed 254 characters")]
    MessageTextTooLong,

    #[error("Message with id {id} not found")]
    MessageNotFound { id: MessageId },

    /// Local precondition failure, never raised by a store round-trip.
    #[error("Account id must be set before deletion")]
    UnsavedAccount,

    #[error("Database error: {msg}")]
    DatabaseError { msg: String },
}

impl CoreError {
    /// True for the invalid-argument kind; everything else is a rule violation
    /// (validation, authorization, lookup miss, translated store failure).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CoreError::UnsavedAccount)
    }
}
