use async_trait::async_trait;

use crate::domain::accounts::account::{Account, NewAccount};

/// Outcome of an insert attempt. One account per user is a storage
/// rule, so the adapter reports the collision instead of surfacing a
/// raw constraint error.
#[derive(Debug, Clone)]
pub enum AccountInsert {
    Created(Account),
    DuplicateUser,
}

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn insert(&self, new_account: &NewAccount) -> anyhow::Result<AccountInsert>;
    async fn find_by_user_id(&self, user_id: i64) -> anyhow::Result<Option<Account>>;
}
