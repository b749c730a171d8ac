use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use magadh_explora_api::db;
use magadh_explora_api::routes;
use magadh_explora_api::services::inquiry_service::InquirySink;
use magadh_explora_api::services::locale_service::{IpapiGeoLookup, LocaleDetector};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);

    let mongo_uri = std::env::var("MONGODB_URI").expect("MONGODB_URI must be set");
    let client = db::mongo::create_mongo_client(&mongo_uri).await;

    let sink = web::Data::new(InquirySink::from_env(client.clone()));
    let detector = web::Data::new(LocaleDetector::new(IpapiGeoLookup::new()));

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .route("/health", web::get().to(|| async { "OK" }))
            .app_data(web::Data::new(client.clone()))
            .app_data(sink.clone())
            .app_data(detector.clone())
            .service(
                web::scope("/api")
                    .route(
                        "/destinations",
                        web::get().to(routes::catalog::get_destinations),
                    )
                    .route(
                        "/quote-destinations",
                        web::get().to(routes::catalog::get_quote_destinations),
                    )
                    .route(
                        "/traveler-types",
                        web::get().to(routes::catalog::get_traveler_types),
                    )
                    .route(
                        "/package-tiers",
                        web::get().to(routes::catalog::get_package_tiers),
                    )
                    .route("/meal-plans", web::get().to(routes::catalog::get_meal_plans))
                    .route("/activities", web::get().to(routes::catalog::get_activities))
                    .service(
                        web::scope("/pricing")
                            .route("/quote", web::post().to(routes::pricing::calculate))
                            .route("/rates", web::get().to(routes::pricing::get_rates)),
                    )
                    .route("/bookings", web::post().to(routes::booking::submit_booking))
                    .route("/quotes", web::post().to(routes::quote::submit_quote))
                    .service(
                        web::scope("/inquiries")
                            .route(
                                "/bookings",
                                web::get().to(routes::inquiry::get_booking_inquiries),
                            )
                            .route(
                                "/quotes",
                                web::get().to(routes::inquiry::get_quote_inquiries),
                            ),
                    )
                    .route("/locale", web::get().to(routes::locale::detect_locale)),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
