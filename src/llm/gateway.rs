use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::CONFIG;
use crate::utils::http::get_http_client;

/// Failure taxonomy for calls into the AI gateway. Nothing here is
/// retried; every failure is terminal for the single request.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("LOVABLE_API_KEY is not configured")]
    MissingCredential,
    #[error("AI gateway error: {status}")]
    Upstream { status: StatusCode, detail: String },
    #[error("No image URL in response")]
    NoImage,
    #[error("No response from AI")]
    NoReply,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// The bearer credential, or a fail-fast error before any network I/O.
pub(crate) fn require_credential() -> Result<&'static str, GatewayError> {
    let key = CONFIG.gateway_api_key.trim();
    if key.is_empty() {
        return Err(GatewayError::MissingCredential);
    }
    Ok(key)
}

pub(crate) fn truncate_for_log(value: &str, limit: usize) -> String {
    if value.chars().count() <= limit {
        return value.to_string();
    }
    let truncated: String = value.chars().take(limit).collect();
    format!("{truncated}... (truncated)")
}

fn summarize_payload(payload: &Value) -> String {
    let model = payload
        .get("model")
        .and_then(|v| v.as_str())
        .unwrap_or("unknown");
    let message_count = payload
        .get("messages")
        .and_then(|v| v.as_array())
        .map(|messages| messages.len())
        .unwrap_or(0);
    let modalities = payload
        .get("modalities")
        .and_then(|v| v.as_array())
        .map(|values| {
            values
                .iter()
                .filter_map(|v| v.as_str())
                .collect::<Vec<_>>()
                .join(",")
        })
        .unwrap_or_else(|| "text".to_string());

    format!("model={model}, messages={message_count}, modalities=[{modalities}]")
}

fn summarize_error_body(body: &str) -> (Option<String>, String) {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return (None, "empty response body".to_string());
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        let message = value
            .pointer("/error/message")
            .and_then(|v| v.as_str())
            .map(|v| v.to_string())
            .or_else(|| {
                value
                    .get("message")
                    .and_then(|v| v.as_str())
                    .map(|v| v.to_string())
            });
        return (message, truncate_for_log(&value.to_string(), 2000));
    }

    (None, truncate_for_log(trimmed, 2000))
}

/// Single request/response call to the gateway's chat-completions
/// endpoint. The caller owns any retry policy; there is none here.
pub(crate) async fn post_chat_completions(payload: &Value) -> Result<Value, GatewayError> {
    let api_key = require_credential()?;
    debug!("AI gateway request: {}", summarize_payload(payload));

    let client = get_http_client();
    let response = client
        .post(format!(
            "{}/chat/completions",
            CONFIG.gateway_base_url.trim_end_matches('/')
        ))
        .bearer_auth(api_key)
        .timeout(Duration::from_secs(CONFIG.gateway_timeout_seconds))
        .json(payload)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let (message, body_summary) = summarize_error_body(&body);
        warn!("AI gateway error: status={}, body={}", status, body_summary);
        return Err(GatewayError::Upstream {
            status,
            detail: message.unwrap_or(body_summary),
        });
    }

    let value = response.json::<Value>().await?;
    debug!(
        "AI gateway response received for model={}",
        payload
            .get("model")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown")
    );
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_summary_includes_model_and_counts() {
        let payload = json!({
            "model": "google/gemini-2.5-flash-image-preview",
            "messages": [{"role": "user", "content": "hi"}],
            "modalities": ["image", "text"]
        });
        let summary = summarize_payload(&payload);
        assert_eq!(
            summary,
            "model=google/gemini-2.5-flash-image-preview, messages=1, modalities=[image,text]"
        );
    }

    #[test]
    fn error_body_summary_prefers_nested_error_message() {
        let (message, _) =
            summarize_error_body(r#"{"error": {"message": "quota exceeded", "code": 429}}"#);
        assert_eq!(message.as_deref(), Some("quota exceeded"));
    }

    #[test]
    fn error_body_summary_handles_non_json() {
        let (message, summary) = summarize_error_body("upstream exploded");
        assert_eq!(message, None);
        assert_eq!(summary, "upstream exploded");
    }

    #[test]
    fn long_values_are_truncated_for_logs() {
        let long = "x".repeat(2100);
        let summary = truncate_for_log(&long, 2000);
        assert!(summary.ends_with("... (truncated)"));
        assert!(summary.chars().count() < long.chars().count());
    }
}
