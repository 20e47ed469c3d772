//! LlmClient trait implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiError, Interaction, LlmClient};

use super::client::GeminiClient;

fn map_transport_error(e: reqwest::Error) -> AiError {
    if e.is_timeout() {
        AiError::Timeout
    } else {
        AiError::NetworkError(e.to_string())
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    fn set_system_role(&mut self, role: &str) {
        self.system_role = Some(role.to_string());
    }

    async fn send_question(&self, question: &str) -> Result<Interaction, AiError> {
        let body = self.build_request_body(question);
        let request_payload = serde_json::to_string_pretty(&body)
            .map_err(|e| AiError::ParseError(format!("failed to serialize request: {e}")))?;
        let url = self.api_url();

        debug!(model = %self.config.model, "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .body(request_payload.clone())
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        let response_payload = response.text().await.map_err(map_transport_error)?;
        let json: serde_json::Value = serde_json::from_str(&response_payload)
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        let (answer, usage) = self.parse_response(&json)?;
        debug!(
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            "Gemini API response"
        );

        Ok(Interaction::new(answer, request_payload, response_payload).with_usage(usage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeminiConfig;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve one canned HTTP response on a local port. The handle yields the
    /// raw request text that was received.
    async fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                received.extend_from_slice(&buf[..n]);
                if request_complete(&received) {
                    break;
                }
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&received).into_owned()
        });

        (format!("http://{addr}/v1beta/models"), handle)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(head_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..head_end]
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        raw.len() >= head_end + 4 + content_length
    }

    fn client_for(base_url: &str) -> GeminiClient {
        let config = GeminiConfig::new("test-key")
            .with_model("gemini-test")
            .with_base_url(base_url);
        GeminiClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn success_keeps_raw_payloads_and_sends_key_header() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"Hi "},{"text":"there"}]}}],"usageMetadata":{"promptTokenCount":3,"candidatesTokenCount":2}}"#;
        let (base_url, server) = serve_once("200 OK", body).await;
        let mut client = client_for(&base_url);
        client.set_system_role("Be kind.");

        let interaction = client.send_question("Hello").await.unwrap();
        let request = server.await.unwrap();

        assert_eq!(interaction.extracted_answer(), "Hi there");
        assert_eq!(interaction.response_payload(), body);
        assert_eq!(interaction.usage().input_tokens, 3);
        assert_eq!(interaction.usage().output_tokens, 2);

        let lowered = request.to_ascii_lowercase();
        assert!(lowered.starts_with("post /v1beta/models/gemini-test:generatecontent "));
        assert!(lowered.contains("x-goog-api-key: test-key"));
        assert!(request.ends_with(interaction.request_payload()));
        assert!(interaction.request_payload().contains("\"Be kind.\""));
    }

    #[tokio::test]
    async fn too_many_requests_is_rate_limited() {
        let (base_url, server) = serve_once("429 Too Many Requests", "{}").await;
        let err = client_for(&base_url).send_question("Hello").await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, AiError::RateLimited));
    }

    #[tokio::test]
    async fn other_http_failure_reports_status_and_body() {
        let (base_url, server) = serve_once("500 Internal Server Error", "backend exploded").await;
        let err = client_for(&base_url).send_question("Hello").await.unwrap_err();
        server.await.unwrap();

        match err {
            AiError::ApiError(message) => {
                assert!(message.starts_with("HTTP 500"), "{message}");
                assert!(message.ends_with(": backend exploded"), "{message}");
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_success_body_is_a_parse_error() {
        let (base_url, server) = serve_once("200 OK", "<html>nope</html>").await;
        let err = client_for(&base_url).send_question("Hello").await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, AiError::ParseError(_)));
    }

    #[test]
    fn set_system_role_replaces_previous_role() {
        let mut client = GeminiClient::new(GeminiConfig::new("k")).unwrap();
        assert!(client.system_role().is_none());

        client.set_system_role("first");
        client.set_system_role("second");
        assert_eq!(client.system_role(), Some("second"));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        // Port 9 (discard) on localhost is expected to refuse connections.
        let config = GeminiConfig::new("k").with_base_url("http://127.0.0.1:9/v1beta/models");
        let client = GeminiClient::new(config).unwrap();

        let err = client.send_question("Hello").await.unwrap_err();
        assert!(matches!(err, AiError::NetworkError(_) | AiError::Timeout));
    }
}
