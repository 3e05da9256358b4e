use crate::application::ports::account_repository::{AccountInsert, AccountRepository};
use crate::application::use_cases::accounts::AccountOpError;
use crate::domain::accounts::account::{Account, NewAccount, validate_open};

pub struct OpenAccount<'a, R: AccountRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: AccountRepository + ?Sized> OpenAccount<'a, R> {
    pub async fn execute(&self, new_account: &NewAccount) -> Result<Account, AccountOpError> {
        validate_open(new_account).map_err(AccountOpError::Invalid)?;
        match self.repo.insert(new_account).await? {
            AccountInsert::Created(account) => Ok(account),
            AccountInsert::DuplicateUser => Err(AccountOpError::AlreadyExists),
        }
    }
}
