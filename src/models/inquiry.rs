use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::pricing::{DestinationSelection, PricingInput};

/// Booking request body as submitted by the review-and-confirm modal:
/// contact details plus the trip configuration the price is recomputed from.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub destinations: Vec<DestinationSelection>,
    pub traveler_type: String,
    pub traveler_count: u32,
    pub package_type: String,
    pub meal_option: String,
    pub activities: Vec<String>,
}

impl BookingRequest {
    pub fn pricing_input(&self) -> PricingInput {
        PricingInput {
            destinations: self.destinations.clone(),
            traveler_type: self.traveler_type.clone(),
            traveler_count: self.traveler_count,
            package_type: self.package_type.clone(),
            meal_option: self.meal_option.clone(),
            activities: self.activities.clone(),
        }
    }
}

/// Stored/forwarded booking inquiry. Carries the recomputed total, never
/// the full breakdown.
#[derive(Debug, Deserialize, Serialize)]
pub struct BookingInquiry {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub destinations: Vec<DestinationSelection>,
    pub traveler_type: String,
    pub traveler_count: u32,
    pub package_type: String,
    pub meal_option: String,
    pub activities: Vec<String>,
    pub total_price: f64,
    pub created_at: Option<DateTime<Utc>>,
}

/// Quote request body from the "Get a Quote" form. Everything past the
/// contact block is optional metadata for staff follow-up; quote requests
/// are never priced.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub traveler_type: Option<String>,
    #[serde(default)]
    pub package_tier: Option<String>,
    #[serde(default)]
    pub destinations: Vec<String>,
    #[serde(default)]
    pub travel_dates: Option<String>,
    #[serde(default)]
    pub group_size: Option<u32>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
}

/// Stored/forwarded quote inquiry.
#[derive(Debug, Deserialize, Serialize)]
pub struct QuoteInquiry {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub language: Option<String>,
    pub traveler_type: Option<String>,
    pub package_tier: Option<String>,
    pub destinations: Option<Vec<String>>,
    pub travel_dates: Option<String>,
    pub group_size: Option<u32>,
    pub budget_range: Option<String>,
    pub special_requirements: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl QuoteInquiry {
    /// Builds the stored document, normalizing blank optional fields to
    /// null the way the original form did.
    pub fn from_request(req: QuoteRequest) -> Self {
        QuoteInquiry {
            id: None,
            name: req.name.trim().to_string(),
            email: req.email.trim().to_string(),
            phone: none_if_blank(req.phone),
            country: none_if_blank(req.country),
            language: none_if_blank(req.language),
            traveler_type: none_if_blank(req.traveler_type),
            package_tier: none_if_blank(req.package_tier),
            destinations: if req.destinations.is_empty() {
                None
            } else {
                Some(req.destinations)
            },
            travel_dates: none_if_blank(req.travel_dates),
            group_size: req.group_size,
            budget_range: none_if_blank(req.budget),
            special_requirements: none_if_blank(req.requirements),
            created_at: Some(Utc::now()),
        }
    }
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
