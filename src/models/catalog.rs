use serde::Serialize;

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: &'static str,
    pub name: &'static str,
    pub min_days: u32,
    pub suggested_days: u32,
}

/// Group category offered by the builder. `fixed_count` is set for types
/// whose traveler count is not editable (solo, couple).
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TravelerType {
    pub id: &'static str,
    pub name: &'static str,
    pub multiplier: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_count: Option<u32>,
}

/// Service level. `deluxe` is offered on quote forms as request metadata
/// only and carries no multiplier.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PackageTier {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<f64>,
    pub features: &'static [&'static str],
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub id: &'static str,
    pub name: &'static str,
    pub multiplier: f64,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ActivityOption {
    pub id: &'static str,
    pub name: &'static str,
    pub price_per_person: f64,
}
