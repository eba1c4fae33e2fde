use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::users_model::{UpsertUser, User};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::Result;

pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        self.repository.get_by_id(user_id)
    }

    /// Inserts the user on first sight and refreshes profile fields afterwards.
    async fn upsert_user(&self, user: UpsertUser) -> Result<User> {
        user.validate()?;
        debug!("Upserting user {}", user.id);
        self.repository.upsert(user).await
    }
}
