//! Database model for the session key-value store.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for session store key-value pairs
#[derive(Queryable, Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::session_store)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecordDB {
    pub session_key: String,
    pub session_value: String,
}
