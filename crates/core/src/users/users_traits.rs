use async_trait::async_trait;

use super::users_model::{UpsertUser, User};
use crate::errors::Result;

/// Trait for user repository operations
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn get_by_id(&self, user_id: &str) -> Result<Option<User>>;
    async fn upsert(&self, user: UpsertUser) -> Result<User>;
}

/// Trait for user service operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    fn get_user(&self, user_id: &str) -> Result<Option<User>>;
    async fn upsert_user(&self, user: UpsertUser) -> Result<User>;
}
