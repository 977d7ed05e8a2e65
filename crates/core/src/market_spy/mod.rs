//! Market spy module - competitor intelligence models.

mod market_spy_model;

// Re-export the public interface
pub use market_spy_model::CompetitorAnalysis;
