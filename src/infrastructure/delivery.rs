//! Webhook delivery of the assembled submission payload.
//!
//! One-shot, user-triggered: no internal retry and no concurrent
//! submissions. A failed delivery leaves the responses and profile untouched
//! so the respondent can resubmit.

use crate::domain::WebhookPayload;

/// Endpoint the payload is posted to unless `CSMATURITY_WEBHOOK_URL` is set.
pub const DEFAULT_WEBHOOK_URL: &str = "https://hooks.example.com/csmaturity-intake";

/// Result of one delivery attempt. Distinguishes a rejecting server from an
/// unreachable one so the caller can word the failure notice accordingly.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryOutcome {
    Accepted,
    Rejected { status: u16 },
    Unreachable { detail: String },
}

impl DeliveryOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DeliveryOutcome::Accepted)
    }

    pub fn describe(&self) -> String {
        match self {
            DeliveryOutcome::Accepted => "Submission accepted".to_string(),
            DeliveryOutcome::Rejected { status } => {
                format!("Submission rejected by server (HTTP {})", status)
            }
            DeliveryOutcome::Unreachable { detail } => {
                format!("Could not reach submission endpoint: {}", detail)
            }
        }
    }
}

pub trait DeliveryPort {
    fn deliver(&self, payload: &WebhookPayload) -> DeliveryOutcome;
}

/// Posts the JSON-serialized payload with a blocking HTTP client. The main
/// loop only ever has one submission in flight, so blocking here is fine.
pub struct WebhookClient {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl WebhookClient {
    pub fn new() -> Self {
        let endpoint = std::env::var("CSMATURITY_WEBHOOK_URL")
            .unwrap_or_else(|_| DEFAULT_WEBHOOK_URL.to_string());
        Self::with_endpoint(endpoint)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for WebhookClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DeliveryPort for WebhookClient {
    fn deliver(&self, payload: &WebhookPayload) -> DeliveryOutcome {
        match self.client.post(&self.endpoint).json(payload).send() {
            Ok(response) if response.status().is_success() => DeliveryOutcome::Accepted,
            Ok(response) => DeliveryOutcome::Rejected {
                status: response.status().as_u16(),
            },
            Err(e) => DeliveryOutcome::Unreachable {
                detail: e.to_string(),
            },
        }
    }
}

/// Scripted delivery stub for exercising the submission workflow in tests.
#[derive(Debug, Clone)]
pub struct StubDelivery {
    outcome: DeliveryOutcome,
}

impl StubDelivery {
    pub fn accepting() -> Self {
        Self { outcome: DeliveryOutcome::Accepted }
    }

    pub fn rejecting(status: u16) -> Self {
        Self { outcome: DeliveryOutcome::Rejected { status } }
    }

    pub fn unreachable(detail: &str) -> Self {
        Self {
            outcome: DeliveryOutcome::Unreachable { detail: detail.to_string() },
        }
    }
}

impl DeliveryPort for StubDelivery {
    fn deliver(&self, _payload: &WebhookPayload) -> DeliveryOutcome {
        self.outcome.clone()
    }
}
