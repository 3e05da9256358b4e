use crate::application::ports::account_repository::AccountRepository;
use crate::application::use_cases::accounts::AccountOpError;
use crate::domain::accounts::account::Account;

pub struct GetAccountForUser<'a, R: AccountRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: AccountRepository + ?Sized> GetAccountForUser<'a, R> {
    pub async fn execute(&self, user_id: i64) -> Result<Account, AccountOpError> {
        let account = self
            .repo
            .find_by_user_id(user_id)
            .await?
            .ok_or(AccountOpError::NotFound)?;
        Ok(account)
    }
}
