use rust_decimal::Decimal;

use crate::domain::users::validation::FieldErrors;

/// A user's single account. Unlike the user-level balance text, the
/// account balance is numeric and non-negative by rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: i64,
    pub user_id: i64,
    pub balance: Decimal,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub user_id: i64,
    pub balance: Decimal,
}

pub fn validate_open(account: &NewAccount) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    if account.balance < Decimal::ZERO {
        errors.add("balance", "must be greater than or equal to 0");
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
