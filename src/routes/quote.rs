use actix_web::{web, HttpResponse, Responder};
use serde_json::{json, Map, Value};

use crate::models::inquiry::{QuoteInquiry, QuoteRequest};
use crate::routes::is_valid_email;
use crate::services::inquiry_service::{InquiryKind, InquirySink};

/// Field limits mirroring the quote form's client-side schema.
fn validate(req: &QuoteRequest) -> Map<String, Value> {
    let mut errors = Map::new();

    let name = req.name.trim();
    if name.len() < 2 {
        errors.insert(
            "name".to_string(),
            json!("Name must be at least 2 characters"),
        );
    } else if name.len() > 100 {
        errors.insert("name".to_string(), json!("Name is too long"));
    }

    let email = req.email.trim();
    if email.len() > 255 || !is_valid_email(email) {
        errors.insert("email".to_string(), json!("Invalid email address"));
    }

    if req.phone.as_deref().map_or(false, |v| v.trim().len() > 50) {
        errors.insert("phone".to_string(), json!("Phone number is too long"));
    }
    if req.country.as_deref().map_or(false, |v| v.trim().len() > 100) {
        errors.insert("country".to_string(), json!("Country is too long"));
    }
    if req
        .travel_dates
        .as_deref()
        .map_or(false, |v| v.trim().len() > 255)
    {
        errors.insert("travelDates".to_string(), json!("Travel dates are too long"));
    }
    if req.group_size.map_or(false, |n| !(1..=100).contains(&n)) {
        errors.insert(
            "groupSize".to_string(),
            json!("Group size must be between 1 and 100"),
        );
    }
    if req
        .requirements
        .as_deref()
        .map_or(false, |v| v.trim().len() > 1000)
    {
        errors.insert(
            "requirements".to_string(),
            json!("Requirements are too long"),
        );
    }

    errors
}

/// Accepts a quote request. Quote requests are never priced; the package
/// tier (including deluxe) is stored as metadata for staff follow-up.
pub async fn submit_quote(
    sink: web::Data<InquirySink>,
    input: web::Json<QuoteRequest>,
) -> impl Responder {
    let req = input.into_inner();

    let errors = validate(&req);
    if !errors.is_empty() {
        return HttpResponse::BadRequest().json(json!({ "errors": errors }));
    }

    let inquiry = QuoteInquiry::from_request(req);

    match sink.submit(InquiryKind::Quote, &inquiry).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "status": "received" })),
        Err(err) => {
            log::error!("Failed to submit quote inquiry: {}", err);
            HttpResponse::InternalServerError().body("Something went wrong. Please try again.")
        }
    }
}
