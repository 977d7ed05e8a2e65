//! Session store backed by the `session_store` key-value table.

use async_trait::async_trait;
use diesel::prelude::*;
use log::debug;
use std::sync::Arc;

use super::model::SessionRecordDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::session_store::dsl::*;
use superbroker_core::constants::SESSION_USER_KEY;
use superbroker_core::errors::Result;
use superbroker_core::session::SessionStoreTrait;
use superbroker_core::users::User;

/// SQLite-backed store for the persisted session user record.
///
/// The user is serialized to JSON under the `superbroker_user` key.
pub struct SqliteSessionStore {
    pool: Arc<DbPool>,
}

impl SqliteSessionStore {
    pub fn new(pool: Arc<DbPool>) -> Self {
        SqliteSessionStore { pool }
    }
}

// Implement the trait for SqliteSessionStore
#[async_trait]
impl SessionStoreTrait for SqliteSessionStore {
    fn get_user(&self) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let result = session_store
            .filter(session_key.eq(SESSION_USER_KEY))
            .select(session_value)
            .first::<String>(&mut conn);

        match result {
            Ok(raw) => {
                let user: User = serde_json::from_str(&raw)
                    .map_err(|e| StorageError::SerializationError(e.to_string()))?;
                Ok(Some(user))
            }
            // Absence is a valid case, not an error
            Err(diesel::result::Error::NotFound) => Ok(None),
            Err(e) => Err(StorageError::from(e).into()),
        }
    }

    async fn save_user(&self, user: &User) -> Result<()> {
        let raw = serde_json::to_string(user)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        let mut conn = get_connection(&self.pool)?;
        diesel::replace_into(session_store)
            .values(&SessionRecordDB {
                session_key: SESSION_USER_KEY.to_string(),
                session_value: raw,
            })
            .execute(&mut conn)
            .map_err(StorageError::from)?;

        debug!("Persisted session user {}", user.id);
        Ok(())
    }

    async fn delete_user(&self) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::delete(session_store.filter(session_key.eq(SESSION_USER_KEY)))
            .execute(&mut conn)
            .map_err(StorageError::from)?;

        debug!("Deleted persisted session user record");
        Ok(())
    }
}
