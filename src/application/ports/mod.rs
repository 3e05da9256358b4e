pub mod account_repository;
pub mod user_repository;
