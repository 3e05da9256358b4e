use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::account_repository::{AccountInsert, AccountRepository};
use crate::domain::accounts::account::{Account, NewAccount};
use crate::infrastructure::db::PgPool;

pub struct SqlxAccountRepository {
    pub pool: PgPool,
}

impl SqlxAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_account(row: &PgRow) -> Account {
    Account {
        id: row.get("id"),
        user_id: row.get("user_id"),
        balance: row.get("balance"),
        created_at: row.get("inserted_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl AccountRepository for SqlxAccountRepository {
    async fn insert(&self, new_account: &NewAccount) -> anyhow::Result<AccountInsert> {
        let result = sqlx::query(
            r#"INSERT INTO accounts (user_id, balance) VALUES ($1, $2)
               RETURNING id, user_id, balance, inserted_at, updated_at"#,
        )
        .bind(new_account.user_id)
        .bind(new_account.balance)
        .fetch_one(&self.pool)
        .await;
        match result {
            Ok(row) => Ok(AccountInsert::Created(map_account(&row))),
            // The unique index on user_id enforces one account per user.
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Ok(AccountInsert::DuplicateUser)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_user_id(&self, user_id: i64) -> anyhow::Result<Option<Account>> {
        let row = sqlx::query(
            r#"SELECT id, user_id, balance, inserted_at, updated_at
               FROM accounts WHERE user_id = $1"#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_account))
    }
}
