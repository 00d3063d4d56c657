use lambda_http::{run, service_fn, Error, Request, Response};
use reqwest::Client as ReqwestClient;
use serde::Serialize;
use std::env;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod apis;
mod image_utils;
mod mock;
mod models;
mod preview;
mod sanitize;
mod structs;

use apis::send_gemini_request;
use image_utils::{parse_image_payload, ImagePayload};
use mock::mock_code;
use models::{GeneratedCode, OutputMode};
use preview::build_preview;
use sanitize::strip_code_fences;
use structs::{
    ErrorResponse, GenerateRequest, GenerateResponse, PreviewRequest, PreviewResponse,
};

const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Read once at cold start and passed into the handler, so tests can inject
/// their own key and endpoint. A missing key is an expected state: every
/// generation then comes from the mock fallback.
#[derive(Debug, Clone)]
struct Config {
    gemini_api_key: Option<String>,
    gemini_model: String,
    gemini_base_url: String,
}

impl Config {
    fn from_env() -> Self {
        Self {
            gemini_api_key: env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: apis::GEMINI_BASE_URL.to_string(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .with_env_filter(EnvFilter::new("snap2code=debug"))
        .init();

    info!("Starting the code generation service");

    let config = Config::from_env();
    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY not set, every generation will use the mock fallback");
    }

    let client = ReqwestClient::new();
    info!("Gemini API client initialized");

    // Run the Lambda function
    run(service_fn(|req| handler(req, &config, &client))).await
}

async fn handler(
    req: Request,
    config: &Config,
    client: &ReqwestClient,
) -> Result<Response<String>, Error> {
    debug!("Received {} {}", req.method(), req.uri().path());

    match (req.method().as_str(), req.uri().path()) {
        ("POST", "/api/generate") => handle_generate(req.body(), config, client).await,
        ("POST", "/api/preview") => handle_preview(req.body()),
        _ => json_response(404, &ErrorResponse::new("Not found")),
    }
}

/// `POST /api/generate`: validate, call Gemini, sanitize, fall back to the
/// mock on any provider failure. A well-formed request always gets a 200
/// with renderable code.
async fn handle_generate(
    body: &[u8],
    config: &Config,
    client: &ReqwestClient,
) -> Result<Response<String>, Error> {
    let request: GenerateRequest = match serde_json::from_slice(body) {
        Ok(request) => request,
        Err(e) => {
            error!("Failed to parse request body: {e}");
            return json_response(500, &ErrorResponse::new("Internal server error"));
        }
    };

    if request.image.trim().is_empty() {
        warn!("Request rejected: no image provided");
        return json_response(400, &ErrorResponse::new("No image provided"));
    }

    let mode = OutputMode::parse(request.mode.as_deref());
    debug!("Generating {mode} code");

    let image = match parse_image_payload(request.image.trim()) {
        Ok(image) => image,
        Err(e) => {
            warn!("Request rejected: {e}");
            return json_response(
                400,
                &ErrorResponse::with_details(
                    "Invalid image payload",
                    serde_json::json!({ "image": e.to_string() }),
                ),
            );
        }
    };

    let result = generate(config, client, mode, &image).await;
    info!("Returning {} code (mock: {})", mode, result.is_mock());

    json_response(
        200,
        &GenerateResponse {
            code: result.code().to_string(),
            is_mock: result.is_mock(),
        },
    )
}

/// The one outbound call per request lives here. Both non-provider branches
/// (no key, provider failure) land on the deterministic mock, flagged as
/// such.
async fn generate(
    config: &Config,
    client: &ReqwestClient,
    mode: OutputMode,
    image: &ImagePayload,
) -> GeneratedCode {
    let Some(api_key) = config.gemini_api_key.as_deref() else {
        info!("No API key configured, returning mock {mode} code");
        return GeneratedCode::Fallback(mock_code(mode).to_string());
    };

    let result = send_gemini_request(
        client,
        &config.gemini_base_url,
        api_key,
        &config.gemini_model,
        mode.instruction(),
        image,
    )
    .await;

    match result {
        Ok(raw) => GeneratedCode::Provider(strip_code_fences(&raw)),
        Err(e) => {
            error!("Gemini request failed, falling back to mock: {e:?}");
            GeneratedCode::Fallback(mock_code(mode).to_string())
        }
    }
}

/// `POST /api/preview`: wrap generated code into the isolated document the
/// client feeds to its sandboxed iframe.
fn handle_preview(body: &[u8]) -> Result<Response<String>, Error> {
    let request: PreviewRequest = match serde_json::from_slice(body) {
        Ok(request) => request,
        Err(e) => {
            error!("Failed to parse request body: {e}");
            return json_response(500, &ErrorResponse::new("Internal server error"));
        }
    };

    if request.code.trim().is_empty() {
        warn!("Preview rejected: no code provided");
        return json_response(400, &ErrorResponse::new("No code provided"));
    }

    let mode = OutputMode::parse(request.mode.as_deref());
    let document = build_preview(&request.code, mode);

    json_response(
        200,
        &PreviewResponse {
            srcdoc: document.srcdoc,
            sandbox: document.sandbox,
        },
    )
}

fn json_response<T: Serialize>(status: u16, body: &T) -> Result<Response<String>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(serde_json::to_string(body)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    // 1x1 transparent PNG
    const PIXEL: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

    fn test_config(api_key: Option<&str>) -> Config {
        Config {
            gemini_api_key: api_key.map(str::to_string),
            gemini_model: "gemini-test".to_string(),
            // Closed loopback port: any provider call fails immediately.
            gemini_base_url: "http://127.0.0.1:9".to_string(),
        }
    }

    fn body(value: Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    fn parse(response: &Response<String>) -> Value {
        serde_json::from_str(response.body()).unwrap()
    }

    #[tokio::test]
    async fn empty_image_is_rejected() {
        let config = test_config(Some("key"));
        let client = ReqwestClient::new();
        let response = handle_generate(&body(json!({"image": "", "mode": "html"})), &config, &client)
            .await
            .unwrap();

        assert_eq!(response.status(), 400);
        assert_eq!(parse(&response)["error"], "No image provided");
    }

    #[tokio::test]
    async fn invalid_base64_is_rejected() {
        let config = test_config(Some("key"));
        let client = ReqwestClient::new();
        let response = handle_generate(
            &body(json!({"image": "not!!base64$$", "mode": "html"})),
            &config,
            &client,
        )
        .await
        .unwrap();

        assert_eq!(response.status(), 400);
        assert_eq!(parse(&response)["error"], "Invalid image payload");
    }

    #[tokio::test]
    async fn missing_api_key_returns_mock() {
        let config = test_config(None);
        let client = ReqwestClient::new();
        let response = handle_generate(&body(json!({"image": PIXEL})), &config, &client)
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let parsed = parse(&response);
        assert_eq!(parsed["isMock"], true);
        assert_eq!(parsed["code"], mock_code(OutputMode::Html));
    }

    #[tokio::test]
    async fn unreachable_provider_falls_back_to_mock() {
        let config = test_config(Some("key"));
        let client = ReqwestClient::new();
        let response = handle_generate(
            &body(json!({"image": PIXEL, "mode": "react"})),
            &config,
            &client,
        )
        .await
        .unwrap();

        assert_eq!(response.status(), 200);
        let parsed = parse(&response);
        assert_eq!(parsed["isMock"], true);
        assert_eq!(parsed["code"], mock_code(OutputMode::React));
    }

    #[tokio::test]
    async fn unknown_mode_defaults_to_html() {
        let config = test_config(None);
        let client = ReqwestClient::new();
        let response = handle_generate(
            &body(json!({"image": PIXEL, "mode": "vue"})),
            &config,
            &client,
        )
        .await
        .unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(parse(&response)["code"], mock_code(OutputMode::Html));
    }

    #[tokio::test]
    async fn malformed_body_is_a_server_error() {
        let config = test_config(Some("key"));
        let client = ReqwestClient::new();
        let response = handle_generate(b"{not json", &config, &client)
            .await
            .unwrap();

        assert_eq!(response.status(), 500);
        assert_eq!(parse(&response)["error"], "Internal server error");
    }

    #[tokio::test]
    async fn data_url_payload_is_accepted() {
        let config = test_config(None);
        let client = ReqwestClient::new();
        let response = handle_generate(
            &body(json!({"image": format!("data:image/png;base64,{PIXEL}")})),
            &config,
            &client,
        )
        .await
        .unwrap();

        assert_eq!(response.status(), 200);
    }

    #[test]
    fn preview_wraps_markup() {
        let response = handle_preview(&body(json!({"code": "<div>x</div>", "mode": "html"}))).unwrap();

        assert_eq!(response.status(), 200);
        let parsed = parse(&response);
        assert_eq!(parsed["sandbox"], "allow-scripts");
        assert!(parsed["srcdoc"].as_str().unwrap().contains("<div>x</div>"));
    }

    #[test]
    fn preview_rejects_empty_code() {
        let response = handle_preview(&body(json!({"code": ""}))).unwrap();

        assert_eq!(response.status(), 400);
        assert_eq!(parse(&response)["error"], "No code provided");
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let config = test_config(None);
        let client = ReqwestClient::new();
        let request = lambda_http::http::Request::builder()
            .method("GET")
            .uri("/api/nope")
            .body(lambda_http::Body::Empty)
            .unwrap();
        let response = handler(request, &config, &client).await.unwrap();

        assert_eq!(response.status(), 404);
    }
}
