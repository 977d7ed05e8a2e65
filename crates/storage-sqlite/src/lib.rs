//! SQLite storage implementation for SuperBroker.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the session store trait defined in
//! `superbroker-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The key-value session store backing the persisted user record
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist; `superbroker-core` is database-agnostic and works with traits.

pub mod db;
pub mod errors;
pub mod schema;
pub mod session;

// Re-export database utilities
pub use db::{create_pool, get_connection, get_db_path, init, run_migrations, DbConnection, DbPool};

// Re-export storage errors and the store implementation
pub use errors::StorageError;
pub use session::SqliteSessionStore;

// Re-export from superbroker-core for convenience
pub use superbroker_core::errors::{DatabaseError, Error, Result};
