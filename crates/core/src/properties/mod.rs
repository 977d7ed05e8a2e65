//! Properties module - listing models and the demo catalog.

mod properties_model;

// Re-export the public interface
pub use properties_model::{demo_properties, ListingType, PortalIntegration, Property, RentalPeriod};
