use actix_web::{web, HttpResponse, Responder};
use serde_json::{json, Map, Value};

use crate::models::pricing::PricingInput;
use crate::services::pricing_service::{
    PricingService, ACTIVITY_PRICES, BASE_RATE, DISCOUNT_RATE, DISCOUNT_THRESHOLD,
    MEAL_MULTIPLIERS, PACKAGE_MULTIPLIERS, TRAVELER_MULTIPLIERS,
};

/// Live price preview for the package builder. Recomputed by the UI on
/// every input change; always succeeds.
pub async fn calculate(input: web::Json<PricingInput>) -> impl Responder {
    HttpResponse::Ok().json(PricingService::calculate_price(&input.into_inner()))
}

fn table_json(table: &[(&str, f64)]) -> Value {
    let mut map = Map::new();
    for (key, value) in table {
        map.insert(key.to_string(), json!(value));
    }
    Value::Object(map)
}

/// The raw constant tables, for UI display next to the builder steps.
pub async fn get_rates() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "baseRate": BASE_RATE,
        "travelerMultipliers": table_json(&TRAVELER_MULTIPLIERS),
        "packageMultipliers": table_json(&PACKAGE_MULTIPLIERS),
        "mealMultipliers": table_json(&MEAL_MULTIPLIERS),
        "activityPrices": table_json(&ACTIVITY_PRICES),
        "discount": {
            "rate": DISCOUNT_RATE,
            "threshold": DISCOUNT_THRESHOLD,
        },
    }))
}
