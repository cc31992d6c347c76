use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, sqlx::Type,
)]
#[sqlx(transparent)]
pub struct AccountId(pub i64);

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for AccountId {
    fn from(id: i64) -> Self {
        AccountId(id)
    }
}

impl From<AccountId> for i64 {
    fn from(account_id: AccountId) -> Self {
        account_id.0
    }
}

impl AccountId {
    /// Zero means the store has not assigned an identity yet.
    pub fn is_unsaved(&self) -> bool {
        self.0 == 0
    }
}

/// A registered user identity. The password is stored and compared as clear
/// text to stay compatible with the existing schema and wire format.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema, sqlx::FromRow)]
pub struct Account {
    #[serde(rename = "account_id")]
    #[sqlx(rename = "account_id")]
    pub id: AccountId,
    pub username: String,
    pub password: String,
}

/// Registration payload: username and password as supplied by the client.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct InsertAccountInput {
    pub username: String,
    pub password: String,
}

/// Login payload. Same shape as [`InsertAccountInput`] but kept separate so a
/// login attempt cannot be fed to the insert path by accident.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
