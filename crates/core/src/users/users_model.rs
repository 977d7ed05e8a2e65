//! User domain models.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DEMO_CREDITS;

/// Role of a platform user. Serialized with the display tags used by the
/// persisted user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "Corretor")]
    Broker,
    #[serde(rename = "Imobiliária")]
    Agency,
    #[serde(rename = "Comprador")]
    Buyer,
    #[serde(rename = "Influencer")]
    Influencer,
}

/// Trust tier earned through platform activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TrustLevel {
    #[default]
    Bronze,
    Prata,
    Ouro,
    Diamante,
}

/// Tier in the referral partner program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartnerTier {
    Iniciante,
    Embaixador,
    Lenda,
}

/// Aggregate sales performance numbers shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceStats {
    pub leads: u32,
    pub sales: u32,
    pub conversion_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_cycle_days: Option<u32>,
}

/// Domain model representing the signed-in user.
///
/// Owned exclusively by the session; one active user at a time. The `credits`
/// balance is the only field mutated after login, through
/// [`crate::session::SessionServiceTrait::adjust_credits`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub credits: i64,
    pub avatar_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency_id: Option<String>,
    pub trust_score: i32,
    pub trust_level: TrustLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<PerformanceStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_earnings: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_tier: Option<PartnerTier>,
}

impl User {
    /// The default demo broker identity installed when no session is persisted.
    pub fn demo_broker() -> Self {
        Self {
            id: "u1".to_string(),
            name: "Roberto Corretor".to_string(),
            email: "roberto@imob.com".to_string(),
            role: UserRole::Broker,
            credits: DEFAULT_DEMO_CREDITS,
            avatar_url:
                "https://images.unsplash.com/photo-1560250097-0b93528c311a?ixlib=rb-4.0.3&auto=format&fit=crop&w=256&q=80"
                    .to_string(),
            agency_id: None,
            trust_score: 75,
            trust_level: TrustLevel::Prata,
            performance: Some(PerformanceStats {
                leads: 120,
                sales: 4,
                conversion_rate: 3.3,
                avg_cycle_days: Some(45),
            }),
            referral_code: Some("ROBERTO10".to_string()),
            partner_earnings: None,
            partner_tier: None,
        }
    }
}
