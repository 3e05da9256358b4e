use async_trait::async_trait;

use crate::domain::users::user::{NewUser, User, UserChanges};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: &NewUser) -> anyhow::Result<User>;
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<User>>;
    /// Applies the supplied changes; returns the updated row, or `None`
    /// when the row no longer exists.
    async fn update(&self, id: i64, changes: &UserChanges) -> anyhow::Result<Option<User>>;
    /// Removes the row; returns it, or `None` when there was nothing to
    /// remove.
    async fn delete(&self, id: i64) -> anyhow::Result<Option<User>>;
}
