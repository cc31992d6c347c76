use crate::domain::{
    account::{
        entities::{Account, AccountId},
        ports::AccountRepository,
    },
    common::{CoreError, services::Service},
    message::{
        entities::{InsertMessageInput, Message, MessageId, UpdateMessageInput},
        ports::{MessageRepository, MessageService},
    },
};

const MAX_MESSAGE_LEN: usize = 254;

fn validate_message_text(text: &str) -> Result<(), CoreError> {
    if text.trim().is_empty() {
        return Err(CoreError::EmptyMessageText);
    }
    if text.chars().count() > MAX_MESSAGE_LEN {
        return Err(CoreError::MessageTextTooLong);
    }
    Ok(())
}

impl<A, M> MessageService for Service<A, M>
where
    A: AccountRepository,
    M: MessageRepository,
{
    async fn create_message(
        &self,
        input: InsertMessageInput,
        account: Option<Account>,
    ) -> Result<Message, CoreError> {
        let Some(account) = account else {
            return Err(CoreError::MissingAccount);
        };

        validate_message_text(&input.message_text)?;

        // The resolved account must be the author the message claims.
        if account.id != input.posted_by {
            return Err(CoreError::NotMessageAuthor);
        }

        let message = self.message_repository.insert(input).await?;

        Ok(message)
    }

    async fn get_message_by_id(&self, id: MessageId) -> Result<Message, CoreError> {
        let message = self.message_repository.find_by_id(id).await?;

        match message {
            Some(message) => Ok(message),
            None => Err(CoreError::MessageNotFound { id }),
        }
    }

    async fn get_all_messages(&self) -> Result<Vec<Message>, CoreError> {
        let messages = self.message_repository.list().await?;

        Ok(messages)
    }

    async fn get_messages_by_account_id(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<Message>, CoreError> {
        let messages = self.message_repository.list_by_account(account_id).await?;

        Ok(messages)
    }

    async fn update_message(&self, input: UpdateMessageInput) -> Result<Message, CoreError> {
        let mut message = self
            .message_repository
            .find_by_id(input.id)
            .await?
            .ok_or(CoreError::MessageNotFound { id: input.id })?;

        // Only the text changes; author and timestamp stay as loaded.
        // No ownership check here: any caller holding the id may edit.
        message.message_text = input.message_text;
        validate_message_text(&message.message_text)?;

        let updated = self.message_repository.update(&message).await?;
        if !updated {
            return Err(CoreError::MessageNotFound { id: message.id });
        }

        Ok(message)
    }

    async fn delete_message(&self, message: &Message) -> Result<(), CoreError> {
        let deleted = self.message_repository.delete(message.id).await?;

        if !deleted {
            return Err(CoreError::MessageNotFound { id: message.id });
        }

        Ok(())
    }
}
