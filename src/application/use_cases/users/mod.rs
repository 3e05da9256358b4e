pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod update_user;

use crate::domain::users::validation::FieldErrors;

/// How a user operation can fail. `Invalid` carries the full set of
/// violated rules; `NotFound` covers missing rows and ids that cannot
/// name a row; anything else is an infrastructure failure.
#[derive(thiserror::Error, Debug)]
pub enum UserOpError {
    #[error("user validation failed")]
    Invalid(FieldErrors),
    #[error("user not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
