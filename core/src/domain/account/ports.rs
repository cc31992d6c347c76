use std::sync::{Arc, Mutex};

use crate::domain::{
    account::entities::{Account, AccountId, Credentials, InsertAccountInput},
    common::CoreError,
};

pub trait AccountRepository: Send + Sync {
    fn insert(
        &self,
        input: InsertAccountInput,
    ) -> impl Future<Output = Result<Account, CoreError>> + Send;
    fn find_by_id(
        &self,
        id: AccountId,
    ) -> impl Future<Output = Result<Option<Account>, CoreError>> + Send;
    fn list(&self) -> impl Future<Output = Result<Vec<Account>, CoreError>> + Send;
    fn find_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<Account>, CoreError>> + Send;
    fn username_exists(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
    fn update(&self, account: &Account) -> impl Future<Output = Result<bool, CoreError>> + Send;
    fn delete(&self, id: AccountId) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

/// A service for managing account lifecycle operations.
///
/// This trait acts as a port in the ports and adapters pattern: it defines the
/// business-rule surface for accounts while leaving persistence to an
/// [`AccountRepository`] implementation injected into the service.
///
/// # Thread Safety
///
/// All implementations must be thread-safe (`Send + Sync`) to support
/// concurrent access from request handlers.
pub trait AccountService: Send + Sync {
    /// Creates a new account after validating the candidate.
    ///
    /// Checks run in order: blank username, empty password, password shorter
    /// than 4 characters, username already taken (existence probe), username
    /// already taken (full lookup). Both duplicate checks must pass before the
    /// insert is attempted.
    ///
    /// # Returns
    ///
    /// Returns a `Future` that resolves to:
    /// - `Ok(Account)` - The persisted account with its store-assigned id
    /// - `Err(CoreError)` - If validation fails or the store reports a failure
    fn create_account(
        &self,
        input: InsertAccountInput,
    ) -> impl Future<Output = Result<Account, CoreError>> + Send;

    /// Verifies a username/password pair against the store.
    ///
    /// A non-matching password or unknown username is a normal outcome, not an
    /// error: the future resolves to `Ok(None)`.
    fn validate_login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<Option<Account>, CoreError>> + Send;

    /// Retrieves an account by id. A miss resolves to `Ok(None)`; only store
    /// failures produce an error.
    fn get_account_by_id(
        &self,
        id: AccountId,
    ) -> impl Future<Output = Result<Option<Account>, CoreError>> + Send;

    /// Returns every persisted account, empty if none exist.
    fn get_all_accounts(&self) -> impl Future<Output = Result<Vec<Account>, CoreError>> + Send;

    /// Single lookup by exact, case-sensitive username match.
    fn find_account_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<Account>, CoreError>> + Send;

    /// Replaces the stored username/password for the account's id.
    ///
    /// # Returns
    ///
    /// Returns a `Future` that resolves to:
    /// - `Ok(true)` - A row was replaced
    /// - `Err(CoreError::AccountNotFound)` - The store had no matching row
    fn update_account(
        &self,
        account: &Account,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Deletes the account. Fails with the invalid-argument kind when the
    /// account was never persisted (id zero); otherwise reports whether a row
    /// was removed.
    fn delete_account(
        &self,
        account: &Account,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// True iff an account with the given id is persisted.
    fn account_exists(&self, id: AccountId)
    -> impl Future<Output = Result<bool, CoreError>> + Send;
}

#[derive(Clone)]
pub struct MockAccountRepository {
    accounts: Arc<Mutex<Vec<Account>>>,
}

impl MockAccountRepository {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountRepository for MockAccountRepository {
    async fn insert(&self, input: InsertAccountInput) -> Result<Account, CoreError> {
        let mut accounts = self.accounts.lock().unwrap();

        let next_id = accounts.iter().map(|a| a.id.0).max().unwrap_or(0) + 1;
        let new_account = Account {
            id: AccountId(next_id),
            username: input.username,
            password: input.password,
        };

        accounts.push(new_account.clone());

        Ok(new_account)
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, CoreError> {
        let accounts = self.accounts.lock().unwrap();

        Ok(accounts.iter().find(|a| a.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Account>, CoreError> {
        let accounts = self.accounts.lock().unwrap();

        Ok(accounts.clone())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, CoreError> {
        let accounts = self.accounts.lock().unwrap();

        Ok(accounts.iter().find(|a| a.username == username).cloned())
    }

    async fn username_exists(&self, username: &str) -> Result<bool, CoreError> {
        let accounts = self.accounts.lock().unwrap();

        Ok(accounts.iter().any(|a| a.username == username))
    }

    async fn update(&self, account: &Account) -> Result<bool, CoreError> {
        let mut accounts = self.accounts.lock().unwrap();

        match accounts.iter_mut().find(|a| a.id == account.id) {
            Some(stored) => {
                stored.username = account.username.clone();
                stored.password = account.password.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: AccountId) -> Result<bool, CoreError> {
        let mut accounts = self.accounts.lock().unwrap();

        match accounts.iter().position(|a| a.id == id) {
            Some(index) => {
                accounts.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
