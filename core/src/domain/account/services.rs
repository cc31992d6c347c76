use crate::domain::{
    account::{
        entities::{Account, AccountId, Credentials, InsertAccountInput},
        ports::{AccountRepository, AccountService},
    },
    common::{CoreError, services::Service},
    message::ports::MessageRepository,
};

impl<A, M> AccountService for Service<A, M>
where
    A: AccountRepository,
    M: MessageRepository,
{
    async fn create_account(&self, input: InsertAccountInput) -> Result<Account, CoreError> {
        if input.username.trim().is_empty() {
            return Err(CoreError::BlankUsername);
        }

        let password = input.password.trim();
        if password.is_empty() {
            return Err(CoreError::EmptyPassword);
        }
        if password.chars().count() < 4 {
            return Err(CoreError::PasswordTooShort);
        }

        if self
            .account_repository
            .username_exists(&input.username)
            .await?
        {
            return Err(CoreError::DuplicateUsername);
        }

        // Second probe via full lookup; both checks must block creation.
        if self
            .account_repository
            .find_by_username(&input.username)
            .await?
            .is_some()
        {
            return Err(CoreError::AccountAlreadyExists);
        }

        let account = self.account_repository.insert(input).await?;

        Ok(account)
    }

    async fn validate_login(&self, credentials: &Credentials) -> Result<Option<Account>, CoreError> {
        let account = self
            .account_repository
            .find_by_username(&credentials.username)
            .await?;

        // Exact string equality, no hashing: the stored password is clear text.
        Ok(account.filter(|account| account.password == credentials.password))
    }

    async fn get_account_by_id(&self, id: AccountId) -> Result<Option<Account>, CoreError> {
        let account = self.account_repository.find_by_id(id).await?;

        Ok(account)
    }

    async fn get_all_accounts(&self) -> Result<Vec<Account>, CoreError> {
        let accounts = self.account_repository.list().await?;

        Ok(accounts)
    }

    async fn find_account_by_username(&self, username: &str) -> Result<Option<Account>, CoreError> {
        let account = self.account_repository.find_by_username(username).await?;

        Ok(account)
    }

    async fn update_account(&self, account: &Account) -> Result<bool, CoreError> {
        let updated = self.account_repository.update(account).await?;

        if !updated {
            return Err(CoreError::AccountNotFound { id: account.id });
        }

        Ok(updated)
    }

    async fn delete_account(&self, account: &Account) -> Result<bool, CoreError> {
        if account.id.is_unsaved() {
            return Err(CoreError::UnsavedAccount);
        }

        let deleted = self.account_repository.delete(account.id).await?;

        Ok(deleted)
    }

    async fn account_exists(&self, id: AccountId) -> Result<bool, CoreError> {
        let account = self.account_repository.find_by_id(id).await?;

        Ok(account.is_some())
    }
}
