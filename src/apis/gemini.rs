use anyhow::{anyhow, Result};
use reqwest::Client as ReqwestClient;
use serde_json::Value;
use tracing::debug;

use crate::image_utils::ImagePayload;

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Sends one multimodal `generateContent` request: the mode instruction plus
/// the inlined screenshot. Returns the raw candidate text, fences and all.
pub async fn send_gemini_request(
    client: &ReqwestClient,
    base_url: &str,
    api_key: &str,
    model: &str,
    instruction: &str,
    image: &ImagePayload,
) -> Result<String> {
    let request_body = serde_json::json!({
        "contents": [{
            "parts": [
                { "text": instruction },
                {
                    "inline_data": {
                        "mime_type": image.mime_type,
                        "data": image.data,
                    }
                },
            ]
        }]
    });

    let response = client
        .post(format!("{base_url}/models/{model}:generateContent"))
        .header("x-goog-api-key", api_key)
        .json(&request_body)
        .send()
        .await?;

    let status = response.status();
    let response_body = response.text().await?;
    let json_response: Value = serde_json::from_str(&response_body)?;

    // Gemini reports failures as an error object, with or without a non-2xx
    // status; its message beats a bare status code in the logs.
    if let Some(message) = json_response["error"]["message"].as_str() {
        return Err(anyhow!("Gemini API error: {message}"));
    }
    if !status.is_success() {
        return Err(anyhow!("status code: {status}"));
    }

    debug!("Gemini response: {json_response}");

    json_response["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow!("no candidate text in Gemini response"))
}
