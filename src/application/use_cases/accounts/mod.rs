pub mod get_account;
pub mod open_account;

use crate::domain::users::validation::FieldErrors;

#[derive(thiserror::Error, Debug)]
pub enum AccountOpError {
    #[error("account validation failed")]
    Invalid(FieldErrors),
    #[error("user already has an account")]
    AlreadyExists,
    #[error("account not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
