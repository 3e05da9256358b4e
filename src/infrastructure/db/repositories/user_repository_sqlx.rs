use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::user_repository::UserRepository;
use crate::domain::users::user::{NewUser, User, UserChanges};
use crate::infrastructure::db::PgPool;

pub struct SqlxUserRepository {
    pub pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_user(row: &PgRow) -> User {
    User {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        address: row.get("address"),
        balance: row.get("balance"),
        created_at: row.get("inserted_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn insert(&self, new_user: &NewUser) -> anyhow::Result<User> {
        let row = sqlx::query(
            r#"INSERT INTO users (name, email, password_hash, address, balance)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING id, name, email, password_hash, address, balance, inserted_at, updated_at"#,
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(&new_user.address)
        .bind(&new_user.balance)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_user(&row))
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<User>> {
        let row = sqlx::query(
            r#"SELECT id, name, email, password_hash, address, balance, inserted_at, updated_at
               FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_user))
    }

    async fn update(&self, id: i64, changes: &UserChanges) -> anyhow::Result<Option<User>> {
        // Absent keys bind as NULL and COALESCE away to the stored value.
        let row = sqlx::query(
            r#"UPDATE users
               SET name = COALESCE($2, name),
                   email = COALESCE($3, email),
                   address = COALESCE($4, address),
                   balance = COALESCE($5, balance),
                   updated_at = now()
               WHERE id = $1
               RETURNING id, name, email, password_hash, address, balance, inserted_at, updated_at"#,
        )
        .bind(id)
        .bind(changes.name.as_deref())
        .bind(changes.email.as_deref())
        .bind(changes.address.as_deref())
        .bind(changes.balance.as_deref())
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_user))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<Option<User>> {
        let row = sqlx::query(
            r#"DELETE FROM users WHERE id = $1
               RETURNING id, name, email, password_hash, address, balance, inserted_at, updated_at"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(map_user))
    }
}
