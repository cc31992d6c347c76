use sqlx::SqlitePool;

use crate::{
    domain::{
        account::{
            entities::{Account, AccountId, InsertAccountInput},
            ports::AccountRepository,
        },
        common::CoreError,
    },
    infrastructure::translate_db_error,
};

#[derive(Clone)]
pub struct SqliteAccountRepository {
    pub(crate) pool: SqlitePool,
}

impl SqliteAccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AccountRepository for SqliteAccountRepository {
    async fn insert(&self, input: InsertAccountInput) -> Result<Account, CoreError> {
        const SQL: &str = "INSERT INTO account (username, password) VALUES (?, ?) \
                           RETURNING account_id, username, password";

        let account = sqlx::query_as::<_, Account>(SQL)
            .bind(&input.username)
            .bind(&input.password)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| translate_db_error(e, SQL))?;

        Ok(account)
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, CoreError> {
        const SQL: &str = "SELECT account_id, username, password FROM account \
                           WHERE account_id = ?";

        let account = sqlx::query_as::<_, Account>(SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| translate_db_error(e, SQL))?;

        Ok(account)
    }

    async fn list(&self) -> Result<Vec<Account>, CoreError> {
        const SQL: &str = "SELECT account_id, username, password FROM account";

        let accounts = sqlx::query_as::<_, Account>(SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| translate_db_error(e, SQL))?;

        Ok(accounts)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, CoreError> {
        const SQL: &str = "SELECT account_id, username, password FROM account \
                           WHERE username = ?";

        let account = sqlx::query_as::<_, Account>(SQL)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| translate_db_error(e, SQL))?;

        Ok(account)
    }

    async fn username_exists(&self, username: &str) -> Result<bool, CoreError> {
        const SQL: &str = "SELECT EXISTS(SELECT 1 FROM account WHERE username = ?)";

        let exists = sqlx::query_scalar::<_, bool>(SQL)
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| translate_db_error(e, SQL))?;

        Ok(exists)
    }

    async fn update(&self, account: &Account) -> Result<bool, CoreError> {
        const SQL: &str = "UPDATE account SET username = ?, password = ? WHERE account_id = ?";

        let result = sqlx::query(SQL)
            .bind(&account.username)
            .bind(&account.password)
            .bind(account.id)
            .execute(&self.pool)
            .await
            .map_err(|e| translate_db_error(e, SQL))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: AccountId) -> Result<bool, CoreError> {
        const SQL: &str = "DELETE FROM account WHERE account_id = ?";

        let result = sqlx::query(SQL)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| translate_db_error(e, SQL))?;

        Ok(result.rows_affected() > 0)
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_insert_account_assigns_id(pool: SqlitePool) -> Result<(), CoreError> {
    let repository = SqliteAccountRepository::new(pool);

    let input = InsertAccountInput {
        username: "bob".to_string(),
        password: "pass1".to_string(),
    };

    let created = repository.insert(input.clone()).await?;

    assert!(created.id.0 > 0, "store should assign a non-zero id");
    assert_eq!(created.username, input.username);
    assert_eq!(created.password, input.password);

    // Round-trip: the fetched row equals what was inserted, id included.
    let fetched = repository.find_by_id(created.id).await?;
    assert_eq!(fetched, Some(created));

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_by_id_returns_none_for_nonexistent(pool: SqlitePool) -> Result<(), CoreError> {
    let repository = SqliteAccountRepository::new(pool);

    let result = repository.find_by_id(AccountId(9999)).await?;
    assert!(result.is_none());

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn test_username_lookups(pool: SqlitePool) -> Result<(), CoreError> {
    let repository = SqliteAccountRepository::new(pool);

    repository
        .insert(InsertAccountInput {
            username: "alice".to_string(),
            password: "secret".to_string(),
        })
        .await?;

    assert!(repository.username_exists("alice").await?);
    assert!(!repository.username_exists("Alice").await?, "case-sensitive");
    assert!(!repository.username_exists("carol").await?);

    let found = repository.find_by_username("alice").await?;
    assert_eq!(found.map(|a| a.username), Some("alice".to_string()));
    assert!(repository.find_by_username("carol").await?.is_none());

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_replaces_row(pool: SqlitePool) -> Result<(), CoreError> {
    let repository = SqliteAccountRepository::new(pool);

    let created = repository
        .insert(InsertAccountInput {
            username: "old_name".to_string(),
            password: "old_pass".to_string(),
        })
        .await?;

    let changed = Account {
        id: created.id,
        username: "new_name".to_string(),
        password: "new_pass".to_string(),
    };
    let updated = repository.update(&changed).await?;
    assert!(updated);

    let fetched = repository.find_by_id(created.id).await?;
    assert_eq!(fetched, Some(changed));

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_row_reports_false(pool: SqlitePool) -> Result<(), CoreError> {
    let repository = SqliteAccountRepository::new(pool);

    let ghost = Account {
        id: AccountId(4242),
        username: "ghost".to_string(),
        password: "ghost".to_string(),
    };
    assert!(!repository.update(&ghost).await?);

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_reports_row_count(pool: SqlitePool) -> Result<(), CoreError> {
    let repository = SqliteAccountRepository::new(pool);

    let created = repository
        .insert(InsertAccountInput {
            username: "doomed".to_string(),
            password: "pass1".to_string(),
        })
        .await?;

    assert!(repository.delete(created.id).await?);
    assert!(repository.find_by_id(created.id).await?.is_none());
    assert!(!repository.delete(created.id).await?, "second delete is a miss");

    Ok(())
}
