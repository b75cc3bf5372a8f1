//! HTTP client for the Zhipu GLM chat-completions endpoint.
//!
//! One function, one POST. The request pins `do_sample: false` and a low
//! `top_p` so reasoning-capable GLM models answer directly instead of
//! spending tokens thinking, which is what keeps lookup-style translation
//! fast.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::config::PluginConfig;
use crate::error::PluginError;

/// User-Agent presented to the endpoint.
pub const USER_AGENT: &str = "Bob/1.0.0 (ZhipuTranslator/1.0.0)";

/// Completion ceiling; generous for translation-sized outputs.
const MAX_TOKENS: u32 = 2048;

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
    max_tokens: u32,
    stream: bool,
    do_sample: bool,
    top_p: f32,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

// Response messages only have to carry the content; the endpoint sends
// `role` too, but nothing else is read.
#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Send one prompt to the chat-completions endpoint and return the trimmed
/// completion text.
///
/// Fails with `ApiFailure` on transport errors, non-success statuses, and
/// response bodies without a usable first choice. The configured timeout
/// bounds the whole call, so the caller never waits unboundedly.
pub async fn request_translation(
    client: &reqwest::Client,
    config: &PluginConfig,
    prompt: &str,
) -> Result<String, PluginError> {
    let request = ChatRequest {
        model: config.model.clone(),
        messages: vec![Message {
            role: "user".to_string(),
            content: prompt.to_string(),
        }],
        temperature: config.temperature,
        max_tokens: MAX_TOKENS,
        stream: false,
        do_sample: false,
        top_p: 0.1,
    };

    debug!(
        "Requesting completion from {} ({} prompt chars)",
        config.model,
        prompt.chars().count()
    );

    let response = client
        .post(format!("{}/chat/completions", config.api_base_url))
        .header("Authorization", format!("Bearer {}", config.api_key))
        .header("Content-Type", "application/json")
        .header("User-Agent", USER_AGENT)
        .timeout(Duration::from_secs(config.timeout_secs))
        .json(&request)
        .send()
        .await
        .map_err(|e| PluginError::network(&e))?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(PluginError::api_status(status, &extract_error_detail(&body)));
    }

    let chat_response: ChatResponse = response
        .json()
        .await
        .map_err(|_| PluginError::malformed_response())?;

    let content = chat_response
        .choices
        .first()
        .map(|c| c.message.content.trim().to_string())
        .ok_or_else(PluginError::malformed_response)?;

    Ok(content)
}

/// Pull a human-readable message out of an error body.
///
/// The endpoint usually nests it at `error.message`, sometimes at a
/// top-level `message`; anything else falls back to a generic marker.
fn extract_error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .or_else(|| v.get("message"))
                .and_then(|m| m.as_str())
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| "未知错误".to_string())
}
