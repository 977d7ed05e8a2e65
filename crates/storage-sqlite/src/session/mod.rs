//! SQLite storage implementation for the session store.

mod model;
mod repository;

pub use model::SessionRecordDB;
pub use repository::SqliteSessionStore;

// Re-export trait from core for convenience
pub use superbroker_core::session::SessionStoreTrait;
