//! Outbound email collaborator for the contact form.
//!
//! The window manager never sees this: the mail view posts the form to a
//! relay endpoint and renders whatever comes back. No retry, no queuing;
//! failures are display strings only.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Get the API base URL based on current environment
/// - In development (localhost): use http://localhost:8080
/// - In production: use same origin (the relay serves the static site)
fn get_api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8080".to_string()
    } else {
        "".to_string()
    }
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailRequest {
    pub subject: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_email: Option<String>,
}

impl EmailRequest {
    pub fn new(subject: String, message: String, from_email: String) -> Self {
        let from_email = from_email.trim();
        Self {
            subject,
            // The relay only forwards; the sender line travels in the body.
            message: format!(
                "From: {}\n{}",
                if from_email.is_empty() { "Unknown" } else { from_email },
                message
            ),
            from_email: (!from_email.is_empty()).then(|| from_email.to_string()),
        }
    }
}

/// Relay response: success/error, plus the provider message id on success.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EmailReceipt {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

pub async fn send_email(request: &EmailRequest) -> Result<EmailReceipt, String> {
    if request.subject.is_empty() || request.message.is_empty() {
        return Err("Subject and message are required".to_string());
    }

    let url = format!("{}/contact/send", api_base());

    let response = Request::post(&url)
        .json(request)
        .map_err(|e| format!("Request failed: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let receipt = response
        .json::<EmailReceipt>()
        .await
        .map_err(|e| format!("Invalid response: {e}"))?;
    log::debug!("contact relay answered success={}", receipt.success);
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_is_folded_into_the_message_body() {
        let request = EmailRequest::new(
            "Project Inquiry".to_string(),
            "Hi!".to_string(),
            "a@b.dev".to_string(),
        );
        assert_eq!(request.message, "From: a@b.dev\nHi!");
        assert_eq!(request.from_email.as_deref(), Some("a@b.dev"));
    }

    #[test]
    fn missing_sender_reads_unknown() {
        let request = EmailRequest::new("Hello".to_string(), "Hi!".to_string(), "  ".to_string());
        assert_eq!(request.message, "From: Unknown\nHi!");
        assert!(request.from_email.is_none());
    }

    #[test]
    fn from_email_is_omitted_from_the_wire_when_absent() {
        let request = EmailRequest::new("s".to_string(), "m".to_string(), String::new());
        let wire = serde_json::to_string(&request).unwrap();
        assert!(!wire.contains("from_email"));
    }
}
