use crate::application::ports::user_repository::UserRepository;
use crate::application::use_cases::users::UserOpError;
use crate::domain::users::id::resolve_user_id;
use crate::domain::users::user::User;

pub struct GetUser<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> GetUser<'a, R> {
    /// Ids arrive as raw path text. Anything that does not name a
    /// positive integer row id is treated as a row that does not exist.
    pub async fn execute(&self, raw_id: &str) -> Result<User, UserOpError> {
        let id = resolve_user_id(raw_id).ok_or(UserOpError::NotFound)?;
        let user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(UserOpError::NotFound)?;
        Ok(user)
    }
}
