use bill_analyzer::config::GeminiConfig;
use serde_json::json;

pub const TEST_BOUNDARY: &str = "bill-analyzer-test-boundary";

pub const TEST_API_KEY: &str = "test-api-key";

pub const TEST_MODEL: &str = "gemini-test";

/// Create a Gemini configuration pointing at a mock server
pub fn create_test_gemini_config(base_url: &str) -> GeminiConfig {
    GeminiConfig {
        base_url: base_url.to_string(),
        model: TEST_MODEL.to_string(),
        api_key: Some(TEST_API_KEY.to_string()),
        timeout_secs: 5,
        ..GeminiConfig::default()
    }
}

/// Path the client posts to for `TEST_MODEL`
pub fn generate_content_path() -> String {
    format!("/models/{}:generateContent", TEST_MODEL)
}

/// A single part of a multipart form body
pub struct FormPart<'a> {
    pub name: &'a str,
    pub file_name: Option<&'a str>,
    pub content_type: Option<&'a str>,
    pub data: &'a [u8],
}

impl<'a> FormPart<'a> {
    pub fn image(data: &'a [u8], content_type: &'a str) -> Self {
        Self {
            name: "image",
            file_name: Some("bill.png"),
            content_type: Some(content_type),
            data,
        }
    }
}

/// Encode parts as a `multipart/form-data` body delimited by `TEST_BOUNDARY`
pub fn multipart_body(parts: &[FormPart<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", TEST_BOUNDARY).as_bytes());

        let mut disposition = format!("Content-Disposition: form-data; name=\"{}\"", part.name);
        if let Some(file_name) = part.file_name {
            disposition.push_str(&format!("; filename=\"{}\"", file_name));
        }
        body.extend_from_slice(disposition.as_bytes());
        body.extend_from_slice(b"\r\n");

        if let Some(content_type) = part.content_type {
            body.extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
        }

        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", TEST_BOUNDARY).as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", TEST_BOUNDARY)
}

/// Gemini reply whose single candidate carries `text`
pub fn gemini_text_response(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": text }]
            },
            "finishReason": "STOP"
        }]
    })
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9090
  max_upload_bytes: 1048576
  logs:
    level: "debug"

gemini:
  base_url: "http://localhost:4000/v1beta"
  model: "gemini-2.0-flash"
  api_key: "file-api-key"
  timeout_secs: 15
"#;

/// Configuration YAML with only some sections present
pub const PARTIAL_CONFIG_YAML: &str = r#"
server:
  port: 3000
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;
