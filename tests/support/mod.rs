#![allow(dead_code)]

//! Shared fixtures: an in-memory user repository and a router wired to
//! it, so HTTP and use-case tests run without a database.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use anyhow::anyhow;
use async_trait::async_trait;
use axum::Router;

use banking_api::application::ports::user_repository::UserRepository;
use banking_api::bootstrap::app_context::{AppContext, AppServices};
use banking_api::bootstrap::config::Config;
use banking_api::domain::users::user::{NewUser, User, UserChanges};
use banking_api::presentation::http::users;

#[derive(Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, new_user: &NewUser) -> anyhow::Result<User> {
        let mut users = self
            .users
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = chrono::Utc::now();
        let user = User {
            id,
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            password_hash: new_user.password_hash.clone(),
            address: new_user.address.clone(),
            balance: new_user.balance.clone(),
            created_at: now,
            updated_at: now,
        };
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<User>> {
        let users = self
            .users
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;
        Ok(users.get(&id).cloned())
    }

    async fn update(&self, id: i64, changes: &UserChanges) -> anyhow::Result<Option<User>> {
        let mut users = self
            .users
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;
        let Some(user) = users.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = &changes.name {
            user.name = name.clone();
        }
        if let Some(email) = &changes.email {
            user.email = email.clone();
        }
        if let Some(address) = &changes.address {
            user.address = address.clone();
        }
        if let Some(balance) = &changes.balance {
            user.balance = balance.clone();
        }
        user.updated_at = chrono::Utc::now();
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<Option<User>> {
        let mut users = self
            .users
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;
        Ok(users.remove(&id))
    }
}

pub fn test_config() -> Config {
    Config {
        api_port: 0,
        frontend_url: None,
        database_url: "postgres://unused".into(),
        is_production: false,
    }
}

pub fn test_router(repo: InMemoryUserRepository) -> Router {
    let ctx = AppContext::new(test_config(), AppServices::new(Arc::new(repo)));
    Router::new().nest("/api", users::routes(ctx))
}
