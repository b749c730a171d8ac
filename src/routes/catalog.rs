use actix_web::{HttpResponse, Responder};

use crate::services::catalog_service::{
    ACTIVITIES, DESTINATIONS, MEAL_PLANS, PACKAGE_TIERS, QUOTE_DESTINATIONS, TRAVELER_TYPES,
};

pub async fn get_destinations() -> impl Responder {
    HttpResponse::Ok().json(DESTINATIONS)
}

pub async fn get_quote_destinations() -> impl Responder {
    HttpResponse::Ok().json(QUOTE_DESTINATIONS)
}

pub async fn get_traveler_types() -> impl Responder {
    HttpResponse::Ok().json(TRAVELER_TYPES)
}

pub async fn get_package_tiers() -> impl Responder {
    HttpResponse::Ok().json(PACKAGE_TIERS)
}

pub async fn get_meal_plans() -> impl Responder {
    HttpResponse::Ok().json(MEAL_PLANS)
}

pub async fn get_activities() -> impl Responder {
    HttpResponse::Ok().json(ACTIVITIES)
}
