use sqlx::SqlitePool;

use crate::{
    domain::{
        account::entities::AccountId,
        common::CoreError,
        message::{
            entities::{InsertMessageInput, Message, MessageId},
            ports::MessageRepository,
        },
    },
    infrastructure::translate_db_error,
};

#[derive(Clone)]
pub struct SqliteMessageRepository {
    pub(crate) pool: SqlitePool,
}

impl SqliteMessageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl MessageRepository for SqliteMessageRepository {
    async fn insert(&self, input: InsertMessageInput) -> Result<Message, CoreError> {
        const SQL: &str =
            "INSERT INTO message (posted_by, message_text, time_posted_epoch) VALUES (?, ?, ?) \
             RETURNING message_id, posted_by, message_text, time_posted_epoch";

        let message = sqlx::query_as::<_, Message>(SQL)
            .bind(input.posted_by)
            .bind(&input.message_text)
            .bind(input.time_posted_epoch)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| translate_db_error(e, SQL))?;

        Ok(message)
    }

    async fn find_by_id(&self, id: MessageId) -> Result<Option<Message>, CoreError> {
        const SQL: &str = "SELECT message_id, posted_by, message_text, time_posted_epoch \
                           FROM message WHERE message_id = ?";

        let message = sqlx::query_as::<_, Message>(SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| translate_db_error(e, SQL))?;

        Ok(message)
    }

    async fn list(&self) -> Result<Vec<Message>, CoreError> {
        const SQL: &str =
            "SELECT message_id, posted_by, message_text, time_posted_epoch FROM message";

        let messages = sqlx::query_as::<_, Message>(SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| translate_db_error(e, SQL))?;

        Ok(messages)
    }

    async fn list_by_account(&self, account_id: AccountId) -> Result<Vec<Message>, CoreError> {
        const SQL: &str = "SELECT message_id, posted_by, message_text, time_posted_epoch \
                           FROM message WHERE posted_by = ?";

        let messages = sqlx::query_as::<_, Message>(SQL)
            .bind(account_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| translate_db_error(e, SQL))?;

        Ok(messages)
    }

    async fn update(&self, message: &Message) -> Result<bool, CoreError> {
        const SQL: &str = "UPDATE message SET posted_by = ?, message_text = ?, \
                           time_posted_epoch = ? WHERE message_id = ?";

        let result = sqlx::query(SQL)
            .bind(message.posted_by)
            .bind(&message.message_text)
            .bind(message.time_posted_epoch)
            .bind(message.id)
            .execute(&self.pool)
            .await
            .map_err(|e| translate_db_error(e, SQL))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: MessageId) -> Result<bool, CoreError> {
        const SQL: &str = "DELETE FROM message WHERE message_id = ?";

        let result = sqlx::query(SQL)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| translate_db_error(e, SQL))?;

        Ok(result.rows_affected() > 0)
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_insert_message_round_trip(pool: SqlitePool) -> Result<(), CoreError> {
    let repository = SqliteMessageRepository::new(pool);

    let input = InsertMessageInput {
        posted_by: AccountId(1),
        message_text: "first post".to_string(),
        time_posted_epoch: 1_669_947_792,
    };

    let created = repository.insert(input.clone()).await?;

    assert!(created.id.0 > 0, "store should assign a non-zero id");
    assert_eq!(created.posted_by, input.posted_by);
    assert_eq!(created.message_text, input.message_text);
    assert_eq!(created.time_posted_epoch, input.time_posted_epoch);

    let fetched = repository.find_by_id(created.id).await?;
    assert_eq!(fetched, Some(created));

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_by_id_returns_none_for_nonexistent(pool: SqlitePool) -> Result<(), CoreError> {
    let repository = SqliteMessageRepository::new(pool);

    let result = repository.find_by_id(MessageId(9999)).await?;
    assert!(result.is_none());

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_by_account_filters_author(pool: SqlitePool) -> Result<(), CoreError> {
    let repository = SqliteMessageRepository::new(pool);

    for (author, text) in [(1, "from one"), (2, "from two"), (1, "one again")] {
        repository
            .insert(InsertMessageInput {
                posted_by: AccountId(author),
                message_text: text.to_string(),
                time_posted_epoch: 1_669_947_792,
            })
            .await?;
    }

    let messages = repository.list_by_account(AccountId(1)).await?;
    assert_eq!(messages.len(), 2);
    assert!(messages.iter().all(|m| m.posted_by == AccountId(1)));

    let none = repository.list_by_account(AccountId(3)).await?;
    assert!(none.is_empty(), "unknown author yields an empty list");

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_replaces_row(pool: SqlitePool) -> Result<(), CoreError> {
    let repository = SqliteMessageRepository::new(pool);

    let created = repository
        .insert(InsertMessageInput {
            posted_by: AccountId(1),
            message_text: "before".to_string(),
            time_posted_epoch: 1_669_947_792,
        })
        .await?;

    let mut changed = created.clone();
    changed.message_text = "after".to_string();
    assert!(repository.update(&changed).await?);

    let fetched = repository.find_by_id(created.id).await?;
    assert_eq!(fetched, Some(changed));

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_reports_row_count(pool: SqlitePool) -> Result<(), CoreError> {
    let repository = SqliteMessageRepository::new(pool);

    let created = repository
        .insert(InsertMessageInput {
            posted_by: AccountId(1),
            message_text: "to delete".to_string(),
            time_posted_epoch: 1_669_947_792,
        })
        .await?;

    assert!(repository.delete(created.id).await?);
    assert!(!repository.delete(created.id).await?, "second delete is a miss");

    Ok(())
}
