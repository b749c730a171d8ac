use std::net::IpAddr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// UI languages the site ships translations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
    Zh,
    Ja,
}

impl Language {
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::En),
            "hi" => Some(Language::Hi),
            "zh" => Some(Language::Zh),
            "ja" => Some(Language::Ja),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Zh => "zh",
            Language::Ja => "ja",
        }
    }
}

/// Country-code step of the detection chain, behind a trait so tests can
/// stub the network lookup.
pub trait GeoLookup {
    async fn country_code(&self, ip: IpAddr) -> Option<String>;
}

/// ipapi.co lookup with a hard timeout. Best effort; any failure is None.
pub struct IpapiGeoLookup {
    http: reqwest::Client,
}

#[derive(Deserialize)]
struct IpapiResponse {
    country_code: Option<String>,
}

impl IpapiGeoLookup {
    pub fn new() -> Self {
        IpapiGeoLookup {
            http: reqwest::Client::new(),
        }
    }
}

impl Default for IpapiGeoLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoLookup for IpapiGeoLookup {
    async fn country_code(&self, ip: IpAddr) -> Option<String> {
        let url = format!("https://ipapi.co/{}/json/", ip);
        let response = self
            .http
            .get(&url)
            .timeout(Duration::from_secs(3))
            .send()
            .await
            .ok()?;
        let body: IpapiResponse = response.json().await.ok()?;
        body.country_code
    }
}

fn country_language(country_code: &str) -> Option<Language> {
    match country_code {
        "CN" | "TW" | "HK" => Some(Language::Zh),
        "JP" => Some(Language::Ja),
        "IN" => Some(Language::Hi),
        _ => None,
    }
}

/// Primary subtag of an Accept-Language value, only when it names one of
/// the non-default site languages (an English platform locale still falls
/// through to geolocation, matching the original behavior).
fn platform_language(accept_language: &str) -> Option<Language> {
    let primary = accept_language
        .split(',')
        .next()?
        .trim()
        .split(&['-', ';'][..])
        .next()?;
    match primary {
        "zh" => Some(Language::Zh),
        "ja" => Some(Language::Ja),
        "hi" => Some(Language::Hi),
        _ => None,
    }
}

/// Resolves the visitor's UI language once, through an explicit priority
/// chain: stored preference, platform locale, IP geolocation, `en`.
pub struct LocaleDetector<G> {
    geo: G,
}

impl<G: GeoLookup> LocaleDetector<G> {
    pub fn new(geo: G) -> Self {
        LocaleDetector { geo }
    }

    pub async fn detect(
        &self,
        stored: Option<&str>,
        accept_language: Option<&str>,
        ip: Option<IpAddr>,
    ) -> Language {
        if let Some(lang) = stored.and_then(Language::from_code) {
            return lang;
        }
        if let Some(lang) = accept_language.and_then(platform_language) {
            return lang;
        }
        if let Some(ip) = ip {
            if let Some(code) = self.geo.country_code(ip).await {
                return country_language(&code).unwrap_or(Language::En);
            }
        }
        Language::En
    }
}
