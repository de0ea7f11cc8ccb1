use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::{ASSISTANT_SYSTEM_PROMPT, CONFIG};
use crate::design::selection::DesignParams;
use crate::llm::gateway::{post_chat_completions, GatewayError};
use crate::utils::timing::log_llm_timing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One transcript entry. The sequence is append-only and ordered by send
/// time; the user message for a turn precedes the assistant's reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        ChatMessage {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

fn render_system_prompt(params: &DesignParams) -> String {
    ASSISTANT_SYSTEM_PROMPT
        .replace("{material}", &params.material)
        .replace("{cloth_type}", &params.cloth_type)
        .replace("{pattern}", &params.pattern)
        .replace("{color}", &params.color)
        .replace("{usage}", &params.usage)
}

/// Ordered message list for the completion call: design-aware system
/// prompt, prior history verbatim, then the new user message.
fn assemble_messages(params: &DesignParams, history: &[ChatMessage], message: &str) -> Vec<Value> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(json!({
        "role": "system",
        "content": render_system_prompt(params)
    }));
    for entry in history {
        messages.push(json!({
            "role": entry.role,
            "content": &entry.content
        }));
    }
    messages.push(json!({
        "role": "user",
        "content": message
    }));
    messages
}

fn extract_reply_text(response: &Value) -> Option<String> {
    response
        .pointer("/choices/0/message/content")
        .and_then(|v| v.as_str())
        .filter(|text| !text.trim().is_empty())
        .map(|text| text.to_string())
}

fn first_reply_text(response: &Value) -> Result<String, GatewayError> {
    extract_reply_text(response).ok_or(GatewayError::NoReply)
}

/// Forwards a user message plus conversation history to the assistant
/// model and returns the reply text.
pub async fn assistant_reply(
    message: &str,
    params: &DesignParams,
    history: &[ChatMessage],
) -> Result<String, GatewayError> {
    let payload = json!({
        "model": &CONFIG.chat_model,
        "messages": assemble_messages(params, history, message)
    });

    log_llm_timing(
        "gateway",
        &CONFIG.chat_model,
        "chat:textile-ai-assistant",
        || async {
            let response = post_chat_completions(&payload).await?;
            first_reply_text(&response)
        },
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> DesignParams {
        DesignParams {
            material: "silk".to_string(),
            cloth_type: "saree".to_string(),
            usage: "ethnic".to_string(),
            color: "red".to_string(),
            pattern: "floral".to_string(),
        }
    }

    #[test]
    fn empty_history_assembles_exactly_two_messages() {
        let messages = assemble_messages(&params(), &[], "rate this");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], "rate this");
    }

    #[test]
    fn system_prompt_embeds_the_design_summary() {
        let messages = assemble_messages(&params(), &[], "hello");
        let system = messages[0]["content"].as_str().expect("system content");
        assert!(system.contains("silk saree, floral pattern in red, for ethnic"));
    }

    #[test]
    fn history_is_forwarded_in_order_with_roles_mapped() {
        let history = vec![
            ChatMessage::assistant("Hello! How can I help?"),
            ChatMessage::user("rate my combo"),
            ChatMessage::assistant("7/10, swap the color."),
        ];
        let messages = assemble_messages(&params(), &history, "and now?");
        assert_eq!(messages.len(), 5);
        assert_eq!(messages[1]["role"], "assistant");
        assert_eq!(messages[2]["role"], "user");
        assert_eq!(messages[2]["content"], "rate my combo");
        assert_eq!(messages[4]["role"], "user");
        assert_eq!(messages[4]["content"], "and now?");
    }

    #[test]
    fn missing_reply_text_is_a_no_reply_error() {
        let response = json!({"choices": [{"message": {}}]});
        assert!(matches!(
            first_reply_text(&response),
            Err(GatewayError::NoReply)
        ));

        let response = json!({"choices": [{"message": {"content": "   "}}]});
        assert!(matches!(
            first_reply_text(&response),
            Err(GatewayError::NoReply)
        ));
    }

    #[test]
    fn reply_text_is_extracted_from_first_choice() {
        let response = json!({
            "choices": [
                {"message": {"content": "Solid 8/10."}},
                {"message": {"content": "ignored"}}
            ]
        });
        assert_eq!(first_reply_text(&response).expect("reply"), "Solid 8/10.");
    }
}
