//! Session module - the application session and navigation state machine.
//!
//! Owns the current user, credit balance, campaign list, active view, and
//! the transient hand-off context between views.

mod session_model;
mod session_service;
mod session_traits;

#[cfg(test)]
mod session_service_tests;

// Re-export the public interface
pub use session_model::{AdCreationContext, Session, ViewId};
pub use session_service::SessionService;
pub use session_traits::{SessionServiceTrait, SessionStoreTrait};
