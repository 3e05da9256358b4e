use crate::application::ports::user_repository::UserRepository;
use crate::application::use_cases::users::UserOpError;
use crate::domain::users::id::resolve_user_id;
use crate::domain::users::user::User;
use crate::domain::users::validation::{UpdateUserFields, validate_update};

pub struct UpdateUser<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> UpdateUser<'a, R> {
    /// Existence is settled before the field-set is validated, so an
    /// unknown id reports not-found even when the payload is invalid.
    pub async fn execute(
        &self,
        raw_id: &str,
        fields: &UpdateUserFields,
    ) -> Result<User, UserOpError> {
        let id = resolve_user_id(raw_id).ok_or(UserOpError::NotFound)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(UserOpError::NotFound)?;
        let changes = validate_update(fields).map_err(UserOpError::Invalid)?;
        // The row can vanish between the lookup and the write.
        let user = self
            .repo
            .update(id, &changes)
            .await?
            .ok_or(UserOpError::NotFound)?;
        Ok(user)
    }
}
