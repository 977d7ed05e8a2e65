//! Competitor analysis models.

use serde::{Deserialize, Serialize};

/// A competitor breakdown produced by the market spy view.
///
/// Handed off to the ad creator through the session's pending context when
/// the broker requests a counter-campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorAnalysis {
    pub competitor_name: String,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub suggested_action: String,
}
