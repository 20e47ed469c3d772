//! Gemini API client struct, request building, and response parsing.

use crate::{AiError, TokenUsage};

use super::config::GeminiConfig;

/// Gemini API client.
///
/// Each question is sent as a single-turn `generateContent` request; the
/// configured system role travels as `systemInstruction`.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
    pub(crate) system_role: Option<String>,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("config", &self.config)
            .field("system_role", &self.system_role)
            .finish()
    }
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AiError::NotConfigured(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            config,
            http,
            system_role: None,
        })
    }

    pub fn system_role(&self) -> Option<&str> {
        self.system_role.as_deref()
    }

    pub(crate) fn api_url(&self) -> String {
        format!("{}/{}:generateContent", self.config.base_url, self.config.model)
    }

    /// Build the JSON request body for the Gemini API.
    pub(crate) fn build_request_body(&self, question: &str) -> serde_json::Value {
        let mut body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": question }]
            }],
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": self.config.temperature,
            }
        });

        if let Some(ref role) = self.system_role {
            body["systemInstruction"] = serde_json::json!({
                "parts": [{ "text": role }]
            });
        }

        body
    }

    /// Parse a Gemini response into the answer text and token usage.
    pub(crate) fn parse_response(
        &self,
        json: &serde_json::Value,
    ) -> Result<(String, TokenUsage), AiError> {
        let candidates = json["candidates"].as_array().ok_or_else(|| {
            match json["promptFeedback"]["blockReason"].as_str() {
                Some(reason) => AiError::ParseError(format!("prompt blocked: {reason}")),
                None => AiError::ParseError("no candidates in response".to_string()),
            }
        })?;

        let first = candidates
            .first()
            .ok_or_else(|| AiError::ParseError("empty candidates".to_string()))?;

        let parts = first["content"]["parts"].as_array().ok_or_else(|| {
            let reason = first["finishReason"].as_str().unwrap_or("unknown");
            AiError::ParseError(format!("no content parts in candidate (finishReason: {reason})"))
        })?;

        let content: String = parts.iter().filter_map(|p| p["text"].as_str()).collect();

        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        Ok((content, usage))
    }
}
