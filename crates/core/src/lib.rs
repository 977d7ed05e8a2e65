//! SuperBroker Core - Session state machine, domain models, and traits.
//!
//! This crate contains the session and navigation logic for SuperBroker.
//! It is database-agnostic and defines the store trait that is implemented
//! by the `storage-sqlite` crate. The view layer consumes read-only session
//! snapshots and drives mutations through [`session::SessionServiceTrait`].

pub mod campaigns;
pub mod constants;
pub mod errors;
pub mod market_spy;
pub mod properties;
pub mod session;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
