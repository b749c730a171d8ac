use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

use crate::models::inquiry::{BookingInquiry, BookingRequest};
use crate::routes::is_valid_email;
use crate::services::inquiry_service::{InquiryKind, InquirySink};
use crate::services::pricing_service::PricingService;

/// Accepts a booking request from the review-and-confirm modal. The total
/// is recomputed server side from the submitted selections; the breakdown
/// itself is never stored.
pub async fn submit_booking(
    sink: web::Data<InquirySink>,
    input: web::Json<BookingRequest>,
) -> impl Responder {
    let req = input.into_inner();

    if req.name.trim().is_empty() {
        return HttpResponse::BadRequest().body("Name is required");
    }
    if !is_valid_email(req.email.trim()) {
        return HttpResponse::BadRequest().body("Invalid email address");
    }

    let pricing = PricingService::calculate_price(&req.pricing_input());

    let inquiry = BookingInquiry {
        id: None,
        name: req.name.trim().to_string(),
        email: req.email.trim().to_string(),
        phone: req.phone,
        notes: req.notes,
        destinations: req.destinations,
        traveler_type: req.traveler_type,
        traveler_count: req.traveler_count,
        package_type: req.package_type,
        meal_option: req.meal_option,
        activities: req.activities,
        total_price: pricing.total,
        created_at: Some(Utc::now()),
    };

    match sink.submit(InquiryKind::Booking, &inquiry).await {
        Ok(()) => HttpResponse::Ok().json(json!({
            "status": "received",
            "totalPrice": pricing.total,
        })),
        Err(err) => {
            log::error!("Failed to submit booking inquiry: {}", err);
            HttpResponse::InternalServerError().body("Something went wrong. Please try again.")
        }
    }
}
