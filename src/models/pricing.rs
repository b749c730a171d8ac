use serde::{Deserialize, Serialize};

/// One destination picked in the package builder, with the number of days
/// the traveler wants to spend there. The UI clamps `days` to each
/// destination's minimum; the engine only sums them.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DestinationSelection {
    pub id: String,
    pub days: u32,
}

/// Normalized trip configuration fed to the pricing engine. Both the
/// package builder and the booking modal submit this same shape.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PricingInput {
    pub destinations: Vec<DestinationSelection>,
    pub traveler_type: String,
    pub traveler_count: u32,
    pub package_type: String,
    pub meal_option: String,
    pub activities: Vec<String>,
}

/// Cost breakdown for one trip configuration. Recomputed on every input
/// change and never persisted; submission payloads carry only `total`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub total_days: u32,
    pub base_cost: f64,
    pub package_cost: f64,
    pub meal_cost: f64,
    pub activities_cost: f64,
    pub discount: f64,
    pub total: f64,
}
