//! Property listing domain models.

use serde::{Deserialize, Serialize};

/// How a property is offered on the market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Sale,
    Rent,
    Vacation,
}

/// Billing period for rental and vacation listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RentalPeriod {
    #[serde(rename = "mensal")]
    Mensal,
    #[serde(rename = "diária")]
    Diaria,
}

/// External listing portal a property can be syndicated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortalIntegration {
    Airbnb,
    Booking,
    Zap,
    Olx,
    QuintoAndar,
    BotConversa,
}

/// A property listing in the broker's portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<RentalPeriod>,
    pub location: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub listing_type: ListingType,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area: u32,
    pub image_url: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub is_draft: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub integrations: Vec<PortalIntegration>,
}

/// Seeded demo catalog shown before any listings are captured.
pub fn demo_properties() -> Vec<Property> {
    vec![Property {
        id: "p1".to_string(),
        title: "Apartamento de Luxo no Jardins".to_string(),
        description: "Espetacular apartamento com 3 suítes e vista panorâmica.".to_string(),
        price: 2_500_000.0,
        period: None,
        location: "Jardins, São Paulo".to_string(),
        property_type: "Apartamento".to_string(),
        listing_type: ListingType::Sale,
        bedrooms: 3,
        bathrooms: 4,
        area: 180,
        image_url:
            "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80"
                .to_string(),
        features: vec![
            "Piscina".to_string(),
            "Academia".to_string(),
            "Portaria 24h".to_string(),
            "Varanda Gourmet".to_string(),
        ],
        is_premium: true,
        is_draft: false,
        integrations: vec![PortalIntegration::Zap, PortalIntegration::QuintoAndar],
    }]
}
