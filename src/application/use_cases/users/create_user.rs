use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString},
};
use password_hash::rand_core::OsRng;

use crate::application::ports::user_repository::UserRepository;
use crate::application::use_cases::users::UserOpError;
use crate::domain::users::user::{NewUser, User};
use crate::domain::users::validation::{CreateUserFields, validate_create};

pub struct CreateUser<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> CreateUser<'a, R> {
    pub async fn execute(&self, fields: &CreateUserFields) -> Result<User, UserOpError> {
        let accepted = validate_create(fields).map_err(UserOpError::Invalid)?;
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(accepted.password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!(e.to_string()))?
            .to_string();
        let user = self
            .repo
            .insert(&NewUser {
                name: accepted.name,
                email: accepted.email,
                password_hash: hash,
                address: accepted.address,
                balance: accepted.balance,
            })
            .await?;
        Ok(user)
    }
}
