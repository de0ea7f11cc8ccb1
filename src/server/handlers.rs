use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::config::CONFIG;
use crate::design::selection::{DesignParams, DesignSelection};
use crate::llm::assistant::ChatMessage;
use crate::llm::{assistant_reply, generate_design, GatewayError};
use crate::utils::timing::{complete_request_timer, start_request_timer};

/// Any caught failure surfaces as 500 with `{ "error": <message> }`,
/// mirroring the status contract of the original endpoints.
pub struct ApiError(String);

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        ApiError(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.0 })),
        )
            .into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDesignResponse {
    pub image_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantRequest {
    pub message: String,
    pub design_params: DesignParams,
    #[serde(default)]
    pub conversation_history: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct AssistantResponse {
    pub response: String,
}

pub async fn generate_textile_design(
    Json(selection): Json<DesignSelection>,
) -> Result<Json<GenerateDesignResponse>, ApiError> {
    let mut timer = start_request_timer("generate-textile-design");
    match generate_design(&selection).await {
        Ok(image_url) => {
            complete_request_timer(&mut timer, "success", None);
            Ok(Json(GenerateDesignResponse { image_url }))
        }
        Err(err) => {
            error!("Error in generate-textile-design: {err}");
            complete_request_timer(&mut timer, "error", Some(err.to_string()));
            Err(err.into())
        }
    }
}

pub async fn textile_ai_assistant(
    Json(request): Json<AssistantRequest>,
) -> Result<Json<AssistantResponse>, ApiError> {
    let mut timer = start_request_timer("textile-ai-assistant");
    match assistant_reply(
        &request.message,
        &request.design_params,
        &request.conversation_history,
    )
    .await
    {
        Ok(response) => {
            complete_request_timer(&mut timer, "success", None);
            Ok(Json(AssistantResponse { response }))
        }
        Err(err) => {
            error!("Error in textile-ai-assistant: {err}");
            complete_request_timer(&mut timer, "error", Some(err.to_string()));
            Err(err.into())
        }
    }
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": "textile-design-studio",
        "gateway_configured": !CONFIG.gateway_api_key.trim().is_empty(),
        "image_model": &CONFIG.image_model,
        "chat_model": &CONFIG.chat_model,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_request_body_accepts_optional_fields_missing() {
        let body = r#"{
            "material": "silk",
            "clothType": "saree",
            "usage": "ethnic",
            "color": "red",
            "pattern": "floral"
        }"#;
        let selection: DesignSelection = serde_json::from_str(body).expect("decode body");
        assert_eq!(selection.cloth_type, "saree");
        assert_eq!(selection.cloth_detail, None);
        assert_eq!(selection.blend_color, None);
    }

    #[test]
    fn assistant_request_decodes_history_roles() {
        let body = r#"{
            "message": "rate this",
            "designParams": {
                "material": "cotton",
                "clothType": "shirt",
                "usage": "casual",
                "color": "blue",
                "pattern": "striped"
            },
            "conversationHistory": [
                {"role": "assistant", "content": "Hello!"},
                {"role": "user", "content": "hi"}
            ]
        }"#;
        let request: AssistantRequest = serde_json::from_str(body).expect("decode body");
        assert_eq!(request.conversation_history.len(), 2);
        assert_eq!(request.design_params.cloth_type, "shirt");
    }

    #[test]
    fn api_error_carries_the_gateway_message() {
        let err = ApiError::from(GatewayError::NoImage);
        assert_eq!(err.0, "No image URL in response");
    }
}
