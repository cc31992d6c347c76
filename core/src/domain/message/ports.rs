use std::sync::{Arc, Mutex};

use crate::domain::{
    account::entities::{Account, AccountId},
    common::CoreError,
    message::entities::{InsertMessageInput, Message, MessageId, UpdateMessageInput},
};

pub trait MessageRepository: Send + Sync {
    fn insert(
        &self,
        input: InsertMessageInput,
    ) -> impl Future<Output = Result<Message, CoreError>> + Send;
    fn find_by_id(
        &self,
        id: MessageId,
    ) -> impl Future<Output = Result<Option<Message>, CoreError>> + Send;
    fn list(&self) -> impl Future<Output = Result<Vec<Message>, CoreError>> + Send;
    fn list_by_account(
        &self,
        account_id: AccountId,
    ) -> impl Future<Output = Result<Vec<Message>, CoreError>> + Send;
    fn update(&self, message: &Message) -> impl Future<Output = Result<bool, CoreError>> + Send;
    fn delete(&self, id: MessageId) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

/// A service for managing message lifecycle operations.
///
/// The message side of the core. Unlike [`AccountService`], a lookup miss on
/// `get_message_by_id` is an error, not an empty result; callers depend on the
/// difference.
///
/// [`AccountService`]: crate::domain::account::ports::AccountService
pub trait MessageService: Send + Sync {
    /// Creates a new message.
    ///
    /// Fails when no resolved account is supplied, when the text is empty
    /// after trimming or longer than 254 characters, or when the supplied
    /// account is not the message's `posted_by` author.
    fn create_message(
        &self,
        input: InsertMessageInput,
        account: Option<Account>,
    ) -> impl Future<Output = Result<Message, CoreError>> + Send;

    /// Retrieves a message by id, failing with
    /// [`CoreError::MessageNotFound`] when no such message exists.
    fn get_message_by_id(
        &self,
        id: MessageId,
    ) -> impl Future<Output = Result<Message, CoreError>> + Send;

    /// Returns every persisted message, empty if none exist.
    fn get_all_messages(&self) -> impl Future<Output = Result<Vec<Message>, CoreError>> + Send;

    /// Returns all messages posted by the given account. Zero messages is a
    /// normal outcome, never an error.
    fn get_messages_by_account_id(
        &self,
        account_id: AccountId,
    ) -> impl Future<Output = Result<Vec<Message>, CoreError>> + Send;

    /// Replaces the text of an existing message, leaving author and timestamp
    /// untouched, and returns the merged record.
    fn update_message(
        &self,
        input: UpdateMessageInput,
    ) -> impl Future<Output = Result<Message, CoreError>> + Send;

    /// Deletes the given message, failing with
    /// [`CoreError::MessageNotFound`] when no row was removed.
    fn delete_message(
        &self,
        message: &Message,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[derive(Clone)]
pub struct MockMessageRepository {
    messages: Arc<Mutex<Vec<Message>>>,
}

impl MockMessageRepository {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Default for MockMessageRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageRepository for MockMessageRepository {
    async fn insert(&self, input: InsertMessageInput) -> Result<Message, CoreError> {
        let mut messages = self.messages.lock().unwrap();

        let next_id = messages.iter().map(|m| m.id.0).max().unwrap_or(0) + 1;
        let new_message = Message {
            id: MessageId(next_id),
            posted_by: input.posted_by,
            message_text: input.message_text,
            time_posted_epoch: input.time_posted_epoch,
        };

        messages.push(new_message.clone());

        Ok(new_message)
    }

    async fn find_by_id(&self, id: MessageId) -> Result<Option<Message>, CoreError> {
        let messages = self.messages.lock().unwrap();

        Ok(messages.iter().find(|m| m.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Message>, CoreError> {
        let messages = self.messages.lock().unwrap();

        Ok(messages.clone())
    }

    async fn list_by_account(&self, account_id: AccountId) -> Result<Vec<Message>, CoreError> {
        let messages = self.messages.lock().unwrap();

        Ok(messages
            .iter()
            .filter(|m| m.posted_by == account_id)
            .cloned()
            .collect())
    }

    async fn update(&self, message: &Message) -> Result<bool, CoreError> {
        let mut messages = self.messages.lock().unwrap();

        match messages.iter_mut().find(|m| m.id == message.id) {
            Some(stored) => {
                *stored = message.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: MessageId) -> Result<bool, CoreError> {
        let mut messages = self.messages.lock().unwrap();

        match messages.iter().position(|m| m.id == id) {
            Some(index) => {
                messages.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
