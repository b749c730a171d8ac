use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use mongodb::{bson::doc, Client};
use std::sync::Arc;

use crate::models::inquiry::{BookingInquiry, QuoteInquiry};

/// Staff follow-up listings. These read the managed backend directly; when
/// the webhook sink is deployed instead, the collections are simply empty.

pub async fn get_booking_inquiries(data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<BookingInquiry> =
        client.database("Inquiries").collection("Bookings");

    match collection.find(doc! {}).sort(doc! { "created_at": -1 }).await {
        Ok(cursor) => match cursor.try_collect::<Vec<BookingInquiry>>().await {
            Ok(inquiries) => HttpResponse::Ok().json(inquiries),
            Err(err) => {
                log::error!("Failed to collect booking inquiries: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect booking inquiries.")
            }
        },
        Err(err) => {
            log::error!("Failed to find booking inquiries: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find booking inquiries.")
        }
    }
}

pub async fn get_quote_inquiries(data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<QuoteInquiry> =
        client.database("Inquiries").collection("Quotes");

    match collection.find(doc! {}).sort(doc! { "created_at": -1 }).await {
        Ok(cursor) => match cursor.try_collect::<Vec<QuoteInquiry>>().await {
            Ok(inquiries) => HttpResponse::Ok().json(inquiries),
            Err(err) => {
                log::error!("Failed to collect quote inquiries: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect quote inquiries.")
            }
        },
        Err(err) => {
            log::error!("Failed to find quote inquiries: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find quote inquiries.")
        }
    }
}
