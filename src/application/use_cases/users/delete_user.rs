use crate::application::ports::user_repository::UserRepository;
use crate::application::use_cases::users::UserOpError;
use crate::domain::users::id::resolve_user_id;
use crate::domain::users::user::User;

pub struct DeleteUser<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> DeleteUser<'a, R> {
    pub async fn execute(&self, raw_id: &str) -> Result<User, UserOpError> {
        let id = resolve_user_id(raw_id).ok_or(UserOpError::NotFound)?;
        let user = self.repo.delete(id).await?.ok_or(UserOpError::NotFound)?;
        Ok(user)
    }
}
