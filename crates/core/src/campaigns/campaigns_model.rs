//! Campaign domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Advertising channel a campaign runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CampaignChannel {
    Meta,
    Google,
    TikTok,
    Email,
    WhatsApp,
    LinkedIn,
    Automation,
}

/// Delivery state of a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    #[default]
    Draft,
    Scheduled,
    Sending,
    Active,
    Completed,
    Paused,
    Reactivation,
}

/// Which wallet the campaign budget is debited from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentSource {
    BrokerWallet,
    AgencyWallet,
}

/// An advertising campaign for a property listing.
///
/// Immutable once created; the session prepends new campaigns so the newest
/// is always first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub property_id: String,
    pub platform: CampaignChannel,
    pub status: CampaignStatus,
    pub budget: i64,
    pub spent: i64,
    pub impressions: u64,
    pub clicks: u64,
    pub leads: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_copy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_context: Option<String>,
    pub payment_source: PaymentSource,
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Campaign {
    /// Creates a freshly launched campaign with zeroed delivery metrics.
    pub fn new(
        property_id: impl Into<String>,
        platform: CampaignChannel,
        budget: i64,
        payment_source: PaymentSource,
        owner_id: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            property_id: property_id.into(),
            platform,
            status: CampaignStatus::Active,
            budget,
            spent: 0,
            impressions: 0,
            clicks: 0,
            leads: 0,
            open_rate: None,
            response_rate: None,
            ad_copy: None,
            strategy_context: None,
            payment_source,
            owner_id: owner_id.into(),
            audience_size: None,
            scheduled_date: None,
            created_at: Utc::now(),
        }
    }

    /// Validates the campaign shape before it enters the session.
    ///
    /// Credit overdraft is deliberately not checked here; the wallet may go
    /// negative after a debit.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        if self.property_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "propertyId".to_string(),
            )));
        }
        if self.owner_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "ownerId".to_string(),
            )));
        }
        if self.budget < 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Campaign budget cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}
