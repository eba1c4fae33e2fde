use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;

use super::model::{UserDB, UserProfileChangeset};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::users;
use streakwise_core::errors::Result;
use streakwise_core::users::{UpsertUser, User, UserRepositoryTrait};

pub struct UserRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        UserRepository { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn get_by_id(&self, user_id: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let user = users::table
            .find(user_id)
            .select(UserDB::as_select())
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(user.map(User::from))
    }

    async fn upsert(&self, user: UpsertUser) -> Result<User> {
        self.writer
            .exec(move |conn| -> Result<User> {
                let now = Utc::now().naive_utc();
                let row = UserDB {
                    id: user.id,
                    email: user.email,
                    first_name: user.first_name,
                    last_name: user.last_name,
                    profile_image_url: user.profile_image_url,
                    created_at: now,
                    updated_at: now,
                };
                let changes = UserProfileChangeset {
                    email: row.email.clone(),
                    first_name: row.first_name.clone(),
                    last_name: row.last_name.clone(),
                    profile_image_url: row.profile_image_url.clone(),
                    updated_at: now,
                };

                let stored = diesel::insert_into(users::table)
                    .values(&row)
                    .on_conflict(users::id)
                    .do_update()
                    .set(&changes)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(User::from(stored))
            })
            .await
    }
}
