//! Users module - identity, trust, and performance models.

mod users_model;

// Re-export the public interface
pub use users_model::{PartnerTier, PerformanceStats, TrustLevel, User, UserRole};
