use serde_json::{json, Value};
use tracing::debug;

use crate::config::CONFIG;
use crate::design::prompt::build_image_prompt;
use crate::design::selection::DesignSelection;
use crate::llm::gateway::{post_chat_completions, truncate_for_log, GatewayError};
use crate::utils::timing::log_llm_timing;

/// First generated image URL in the completion envelope, if any.
fn extract_image_url(response: &Value) -> Option<String> {
    response
        .pointer("/choices/0/message/images/0/image_url/url")
        .and_then(|v| v.as_str())
        .map(|v| v.to_string())
}

fn first_image_url(response: &Value) -> Result<String, GatewayError> {
    extract_image_url(response).ok_or(GatewayError::NoImage)
}

/// Generates a textile design image for the selection. Builds the prompt,
/// issues one blocking gateway call requesting image+text modalities, and
/// returns the first image URL from the response.
pub async fn generate_design(selection: &DesignSelection) -> Result<String, GatewayError> {
    let prompt = build_image_prompt(selection);
    debug!(
        "Generating textile design with prompt: {}",
        truncate_for_log(&prompt, 600)
    );

    let payload = json!({
        "model": &CONFIG.image_model,
        "messages": [
            {
                "role": "user",
                "content": prompt
            }
        ],
        "modalities": ["image", "text"]
    });

    log_llm_timing(
        "gateway",
        &CONFIG.image_model,
        "image:generate-textile-design",
        || async {
            let response = post_chat_completions(&payload).await?;
            first_image_url(&response)
        },
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_image_url_from_envelope() {
        let response = json!({
            "choices": [
                {
                    "message": {
                        "content": "here you go",
                        "images": [
                            {"image_url": {"url": "data:image/png;base64,AAAA"}},
                            {"image_url": {"url": "data:image/png;base64,BBBB"}}
                        ]
                    }
                }
            ]
        });
        assert_eq!(
            first_image_url(&response).expect("image url"),
            "data:image/png;base64,AAAA"
        );
    }

    #[test]
    fn successful_envelope_without_image_is_a_no_image_error() {
        let response = json!({
            "choices": [
                {"message": {"content": "all text, no pixels"}}
            ]
        });
        let err = first_image_url(&response).expect_err("must fail");
        assert!(matches!(err, GatewayError::NoImage));
    }

    #[test]
    fn empty_choices_is_a_no_image_error() {
        let response = json!({"choices": []});
        assert!(matches!(
            first_image_url(&response),
            Err(GatewayError::NoImage)
        ));
    }
}
