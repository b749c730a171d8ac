use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};

use magadh_explora_api::routes;
use magadh_explora_api::services::inquiry_service::InquirySink;
use magadh_explora_api::services::locale_service::{IpapiGeoLookup, LocaleDetector};

pub struct TestApp {
    sink: web::Data<InquirySink>,
    detector: web::Data<LocaleDetector<IpapiGeoLookup>>,
}

impl TestApp {
    /// App wired like production, with the inquiry sink pointed at an
    /// address nothing listens on so submissions deterministically fail.
    pub fn new() -> Self {
        Self::with_webhook("http://127.0.0.1:1".to_string())
    }

    pub fn with_webhook(url: String) -> Self {
        Self {
            sink: web::Data::new(InquirySink::webhook(url)),
            detector: web::Data::new(LocaleDetector::new(IpapiGeoLookup::new())),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
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
            .app_data(self.sink.clone())
            .app_data(self.detector.clone())
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
                    .route("/locale", web::get().to(routes::locale::detect_locale)),
            )
    }
}

/// Minimal HTTP listener standing in for the external inquiry notifier.
/// Accepts every request, drains the body, and answers 200 with no content.
/// Returns the base URL to point the webhook sink at.
#[allow(dead_code)]
pub fn spawn_stub_webhook() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind stub webhook");
    let addr = listener.local_addr().expect("stub webhook has no address");

    std::thread::spawn(move || {
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => answer_ok(stream),
                Err(_) => break,
            }
        }
    });

    format!("http://{}", addr)
}

fn answer_ok(mut stream: TcpStream) {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];

    loop {
        let n = match stream.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(_) => return,
        };
        data.extend_from_slice(&buf[..n]);

        if let Some(header_end) = data.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&data[..header_end]).to_lowercase();
            let content_length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);

            if data.len() >= header_end + 4 + content_length {
                let _ = stream.write_all(
                    b"HTTP/1.1 200 OK\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
                );
                return;
            }
        }
    }
}
