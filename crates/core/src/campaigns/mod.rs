//! Campaigns module - advertising campaign models.

mod campaigns_model;

// Re-export the public interface
pub use campaigns_model::{Campaign, CampaignChannel, CampaignStatus, PaymentSource};
