use crate::{
    Service,
    domain::{
        account::{
            entities::{Account, AccountId},
            ports::MockAccountRepository,
        },
        common::CoreError,
        message::{
            entities::{InsertMessageInput, Message, MessageId, UpdateMessageRequest},
            ports::{MessageRepository, MessageService, MockMessageRepository},
        },
    },
};

fn author(id: i64) -> Account {
    Account {
        id: AccountId(id),
        username: format!("user{id}"),
        password: "pass1".to_string(),
    }
}

fn post(posted_by: i64, text: &str) -> InsertMessageInput {
    InsertMessageInput {
        posted_by: AccountId(posted_by),
        message_text: text.to_string(),
        time_posted_epoch: 1_669_947_792,
    }
}

// == Create Message Tests ==

#[tokio::test]
#[cfg(test)]
async fn test_create_message_success() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(MockAccountRepository::new(), MockMessageRepository::new());

    let message = service
        .create_message(post(1, "hello world"), Some(author(1)))
        .await
        .expect("create_message returned an error");

    assert!(message.id.0 > 0, "Expected store-assigned id");
    assert_eq!(message.posted_by, AccountId(1));
    assert_eq!(message.message_text, "hello world");
    assert_eq!(message.time_posted_epoch, 1_669_947_792);

    Ok(())
}

#[tokio::test]
#[cfg(test)]
async fn test_create_message_accepts_max_length_text() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(MockAccountRepository::new(), MockMessageRepository::new());

    let text = "a".repeat(254);
    let message = service
        .create_message(post(1, &text), Some(author(1)))
        .await
        .expect("254 characters should be accepted");

    assert_eq!(message.message_text.len(), 254);

    Ok(())
}

#[tokio::test]
#[cfg(test)]
async fn test_create_message_fail_missing_account() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(MockAccountRepository::new(), MockMessageRepository::new());

    let error = service
        .create_message(post(1, "hello"), None)
        .await
        .expect_err("create_message should have returned an error");

    assert_eq!(error, CoreError::MissingAccount);

    Ok(())
}

#[tokio::test]
#[cfg(test)]
async fn test_create_message_fail_empty_text() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(MockAccountRepository::new(), MockMessageRepository::new());

    let error = service
        .create_message(post(1, ""), Some(author(1)))
        .await
        .expect_err("create_message should have returned an error");

    assert_eq!(error, CoreError::EmptyMessageText);

    Ok(())
}

#[tokio::test]
#[cfg(test)]
async fn test_create_message_fail_whitespace_text() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(MockAccountRepository::new(), MockMessageRepository::new());

    let error = service
        .create_message(post(1, "   "), Some(author(1)))
        .await
        .expect_err("create_message should have returned an error");

    assert_eq!(error, CoreError::EmptyMessageText);

    Ok(())
}

#[tokio::test]
#[cfg(test)]
async fn test_create_message_fail_text_too_long() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(MockAccountRepository::new(), MockMessageRepository::new());

    let text = "a".repeat(255);
    let error = service
        .create_message(post(1, &text), Some(author(1)))
        .await
        .expect_err("create_message should have returned an error");

    assert_eq!(error, CoreError::MessageTextTooLong);

    Ok(())
}

#[tokio::test]
#[cfg(test)]
async fn test_create_message_fail_author_mismatch() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(MockAccountRepository::new(), MockMessageRepository::new());

    // Account 1 posting as posted_by=2: both values are individually valid.
    let error = service
        .create_message(post(2, "hello"), Some(author(1)))
        .await
        .expect_err("create_message should have returned an error");

    assert_eq!(error, CoreError::NotMessageAuthor);

    Ok(())
}

// == Get Message Tests ==

#[tokio::test]
#[cfg(test)]
async fn test_get_message_by_id_success() -> Result<(), Box<dyn std::error::Error>> {
    let message_mock_repo = MockMessageRepository::new();
    let service = Service::new(MockAccountRepository::new(), message_mock_repo.clone());

    let created = message_mock_repo.insert(post(1, "hello")).await?;

    let message = service
        .get_message_by_id(created.id)
        .await
        .expect("get_message_by_id returned an error");

    assert_eq!(message, created);

    Ok(())
}

#[tokio::test]
#[cfg(test)]
async fn test_get_message_by_id_miss_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(MockAccountRepository::new(), MockMessageRepository::new());

    let error = service
        .get_message_by_id(MessageId(404))
        .await
        .expect_err("get_message_by_id should have returned an error");

    assert_eq!(error, CoreError::MessageNotFound { id: MessageId(404) });

    Ok(())
}

#[tokio::test]
#[cfg(test)]
async fn test_get_all_messages() -> Result<(), Box<dyn std::error::Error>> {
    let message_mock_repo = MockMessageRepository::new();
    let service = Service::new(MockAccountRepository::new(), message_mock_repo.clone());

    assert!(service.get_all_messages().await?.is_empty());

    message_mock_repo.insert(post(1, "one")).await?;
    message_mock_repo.insert(post(2, "two")).await?;

    let messages = service.get_all_messages().await?;
    assert_eq!(messages.len(), 2);

    Ok(())
}

#[tokio::test]
#[cfg(test)]
async fn test_get_messages_by_account_id_empty_is_not_an_error()
-> Result<(), Box<dyn std::error::Error>> {
    let message_mock_repo = MockMessageRepository::new();
    let service = Service::new(MockAccountRepository::new(), message_mock_repo.clone());

    message_mock_repo.insert(post(1, "from one")).await?;

    let messages = service
        .get_messages_by_account_id(AccountId(2))
        .await
        .expect("zero messages should not raise");

    assert!(messages.is_empty(), "Expected an empty sequence");

    Ok(())
}

// == Update Message Tests ==

#[tokio::test]
#[cfg(test)]
async fn test_update_message_changes_only_text() -> Result<(), Box<dyn std::error::Error>> {
    let message_mock_repo = MockMessageRepository::new();
    let service = Service::new(MockAccountRepository::new(), message_mock_repo.clone());

    let created = message_mock_repo.insert(post(7, "before")).await?;

    let patch = UpdateMessageRequest {
        message_text: "after".to_string(),
    };
    let updated = service
        .update_message(patch.into_input(created.id))
        .await
        .expect("update_message returned an error");

    assert_eq!(updated.id, created.id, "Expected identity preserved");
    assert_eq!(updated.message_text, "after");
    assert_eq!(updated.posted_by, created.posted_by, "Expected author untouched");
    assert_eq!(
        updated.time_posted_epoch, created.time_posted_epoch,
        "Expected timestamp untouched"
    );

    let stored = message_mock_repo.find_by_id(created.id).await?;
    assert_eq!(stored, Some(updated), "Expected the merged record persisted");

    Ok(())
}

#[tokio::test]
#[cfg(test)]
async fn test_update_message_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(MockAccountRepository::new(), MockMessageRepository::new());

    let patch = UpdateMessageRequest {
        message_text: "after".to_string(),
    };
    let error = service
        .update_message(patch.into_input(MessageId(404)))
        .await
        .expect_err("update_message should have returned an error");

    assert_eq!(error, CoreError::MessageNotFound { id: MessageId(404) });

    Ok(())
}

#[tokio::test]
#[cfg(test)]
async fn test_update_message_revalidates_text() -> Result<(), Box<dyn std::error::Error>> {
    let message_mock_repo = MockMessageRepository::new();
    let service = Service::new(MockAccountRepository::new(), message_mock_repo.clone());

    let created = message_mock_repo.insert(post(1, "before")).await?;

    let patch = UpdateMessageRequest {
        message_text: " ".to_string(),
    };
    let error = service
        .update_message(patch.into_input(created.id))
        .await
        .expect_err("update_message should have returned an error");

    assert_eq!(error, CoreError::EmptyMessageText);

    let stored = message_mock_repo.find_by_id(created.id).await?;
    assert_eq!(
        stored.map(|m| m.message_text),
        Some("before".to_string()),
        "Expected the stored text unchanged after a failed update"
    );

    Ok(())
}

// == Delete Message Tests ==

#[tokio::test]
#[cfg(test)]
async fn test_delete_message_success() -> Result<(), Box<dyn std::error::Error>> {
    let message_mock_repo = MockMessageRepository::new();
    let service = Service::new(MockAccountRepository::new(), message_mock_repo.clone());

    let created = message_mock_repo.insert(post(1, "to delete")).await?;

    service
        .delete_message(&created)
        .await
        .expect("delete_message returned an error");

    let stored = message_mock_repo.find_by_id(created.id).await?;
    assert!(stored.is_none(), "Expected the message removed");

    Ok(())
}

#[tokio::test]
#[cfg(test)]
async fn test_delete_message_miss_reports_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(MockAccountRepository::new(), MockMessageRepository::new());

    let ghost = Message {
        id: MessageId(404),
        posted_by: AccountId(1),
        message_text: "ghost".to_string(),
        time_posted_epoch: 1_669_947_792,
    };
    let error = service
        .delete_message(&ghost)
        .await
        .expect_err("delete_message should have returned an error");

    assert_eq!(error, CoreError::MessageNotFound { id: MessageId(404) });

    Ok(())
}
