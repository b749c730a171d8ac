use std::net::{IpAddr, SocketAddr};

use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

use crate::services::locale_service::{IpapiGeoLookup, LocaleDetector};

#[derive(Debug, Deserialize)]
pub struct LocaleQuery {
    /// Previously stored preference, sent back by the client if it has one.
    pub lang: Option<String>,
}

/// `realip_remote_addr` yields either a bare IP (forwarded headers) or an
/// `ip:port` / `[ip]:port` peer address; both forms must survive IPv6.
fn client_ip(addr: &str) -> Option<IpAddr> {
    addr.parse::<SocketAddr>()
        .map(|sock| sock.ip())
        .or_else(|_| addr.parse::<IpAddr>())
        .ok()
}

/// Resolves the UI language for a fresh visitor: stored preference,
/// Accept-Language, IP geolocation, then English.
pub async fn detect_locale(
    req: HttpRequest,
    query: web::Query<LocaleQuery>,
    detector: web::Data<LocaleDetector<IpapiGeoLookup>>,
) -> impl Responder {
    let accept_language = req
        .headers()
        .get(actix_web::http::header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());

    let ip = req
        .connection_info()
        .realip_remote_addr()
        .and_then(client_ip);

    let language = detector
        .detect(query.lang.as_deref(), accept_language.as_deref(), ip)
        .await;

    HttpResponse::Ok().json(json!({ "language": language.code() }))
}
