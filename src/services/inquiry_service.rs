use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use mongodb::Client;
use serde::Serialize;

const INQUIRY_DB: &str = "Inquiries";

/// Hard cap on the webhook round trip; past this the submission is reported
/// as failed and the visitor is asked to try again.
const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

/// Which form produced the inquiry. Decides the backing collection and the
/// webhook path, mirroring the two upstream submission targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryKind {
    Booking,
    Quote,
}

impl InquiryKind {
    pub fn collection(&self) -> &'static str {
        match self {
            InquiryKind::Booking => "Bookings",
            InquiryKind::Quote => "Quotes",
        }
    }

    pub fn webhook_path(&self) -> &'static str {
        match self {
            InquiryKind::Booking => "mail/booking",
            InquiryKind::Quote => "mail/quote",
        }
    }
}

/// Coarse submission failure. Lead-capture forms only distinguish success
/// from "try again"; no structured error codes.
#[derive(Debug)]
pub struct SubmitError(String);

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "inquiry submission failed: {}", self.0)
    }
}

impl std::error::Error for SubmitError {}

/// Downstream home for captured inquiries. Exactly one variant is selected
/// at deployment time via `INQUIRY_SINK`; the handlers never know which.
pub enum InquirySink {
    /// Insert into the managed backend for staff follow-up.
    Mongo(Arc<Client>),
    /// Fire-and-once POST of the JSON payload to an external notifier.
    Webhook {
        http: reqwest::Client,
        base_url: String,
    },
}

impl InquirySink {
    /// Reads `INQUIRY_SINK` (`mongo` | `webhook`, default `mongo`).
    /// The webhook variant requires `INQUIRY_WEBHOOK_URL`.
    pub fn from_env(client: Arc<Client>) -> Self {
        match std::env::var("INQUIRY_SINK").as_deref() {
            Ok("webhook") => {
                let base_url = std::env::var("INQUIRY_WEBHOOK_URL")
                    .expect("INQUIRY_WEBHOOK_URL must be set when INQUIRY_SINK=webhook");
                InquirySink::webhook(base_url)
            }
            _ => InquirySink::Mongo(client),
        }
    }

    pub fn webhook(base_url: String) -> Self {
        InquirySink::Webhook {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Submits one inquiry. No retry, no backoff; double submission is
    /// prevented upstream by disabling the form control while in flight.
    pub async fn submit<T>(&self, kind: InquiryKind, inquiry: &T) -> Result<(), SubmitError>
    where
        T: Serialize + Send + Sync,
    {
        match self {
            InquirySink::Mongo(client) => {
                let collection: mongodb::Collection<T> =
                    client.database(INQUIRY_DB).collection(kind.collection());
                collection
                    .insert_one(inquiry)
                    .await
                    .map(|_| ())
                    .map_err(|err| {
                        log::error!("Failed to insert inquiry: {:?}", err);
                        SubmitError(err.to_string())
                    })
            }
            InquirySink::Webhook { http, base_url } => {
                let url = format!("{}/{}", base_url, kind.webhook_path());
                let response =
                    tokio::time::timeout(WEBHOOK_TIMEOUT, http.post(&url).json(inquiry).send())
                        .await
                        .map_err(|_| {
                            log::error!("Inquiry webhook timed out after {:?}", WEBHOOK_TIMEOUT);
                            SubmitError("webhook timed out".to_string())
                        })?
                        .map_err(|err| {
                            log::error!("Failed to reach inquiry webhook: {:?}", err);
                            SubmitError(err.to_string())
                        })?;
                if response.status().is_success() {
                    Ok(())
                } else {
                    log::error!("Inquiry webhook returned {}", response.status());
                    Err(SubmitError(format!(
                        "webhook returned {}",
                        response.status()
                    )))
                }
            }
        }
    }
}
