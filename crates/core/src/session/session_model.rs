//! Session state models.

use serde::{Deserialize, Serialize};

use crate::campaigns::Campaign;
use crate::market_spy::CompetitorAnalysis;
use crate::properties::Property;
use crate::users::User;

/// Identifier of the active page-level view.
///
/// A closed set: navigation only ever targets one of these tags, so an
/// unknown view state cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    #[default]
    Home,
    Accelerator,
    Dashboard,
    Financial,
    Integrations,
    Contracts,
    #[serde(rename = "superads")]
    AdCreator,
    #[serde(rename = "spy")]
    MarketSpy,
    #[serde(rename = "referral")]
    ReferralProgram,
    Training,
    News,
    Chat,
}

impl ViewId {
    /// The tab tag used by the view layer for this view.
    pub fn as_tag(&self) -> &'static str {
        match self {
            ViewId::Home => "home",
            ViewId::Accelerator => "accelerator",
            ViewId::Dashboard => "dashboard",
            ViewId::Financial => "financial",
            ViewId::Integrations => "integrations",
            ViewId::Contracts => "contracts",
            ViewId::AdCreator => "superads",
            ViewId::MarketSpy => "spy",
            ViewId::ReferralProgram => "referral",
            ViewId::Training => "training",
            ViewId::News => "news",
            ViewId::Chat => "chat",
        }
    }
}

/// Transient hand-off payload for the ad creator view.
///
/// Set by one view's action (boost or counter-campaign), consumed by the ad
/// creator's initial render, and cleared once a campaign is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdCreationContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_selected_property: Option<Property>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competitor_analysis: Option<CompetitorAnalysis>,
}

/// The full session state for one running instance.
///
/// Mutated only through the session service; the view layer receives cloned
/// snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub current_user: Option<User>,
    pub active_view: ViewId,
    /// Newest campaign first.
    pub campaigns: Vec<Campaign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_context: Option<AdCreationContext>,
}
