pub mod balance;
pub mod id;
pub mod user;
pub mod validation;
