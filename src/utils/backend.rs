use super::types::{ChatRequest, ChatResponse, ErrorBody};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

// ============================================================================
// Constants
// ============================================================================

const CHAT_PATH: &str = "/chat";

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request failed with status code {status}")]
    Status { status: u16, detail: Option<String> },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ChatError {
    /// Server-supplied detail, if the backend sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ChatError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Text shown in the response panel in place of an answer.
    pub fn display_text(&self) -> String {
        match self.detail() {
            Some(detail) => format!("Error: {}", detail),
            None => format!("Error: {}", self),
        }
    }
}

// ============================================================================
// Transport
// ============================================================================

/// Issues a single chat exchange against the backend.
#[async_trait(?Send)]
pub trait ChatTransport {
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError>;
}

pub struct BackendClient {
    client: Client,
    base_url: Arc<String>,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self, ChatError> {
        let builder = Client::builder();

        // wasm clients run under the browser's own request limits
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(timeout_secs));
        #[cfg(target_arch = "wasm32")]
        let _ = timeout_secs;

        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: Arc::new(base_url.into()),
        })
    }

    pub fn chat_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), CHAT_PATH)
    }
}

#[async_trait(?Send)]
impl ChatTransport for BackendClient {
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        let url = self.chat_url();
        debug!(%url, model = %request.model, "posting chat request");

        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable or unstructured body just means there is no detail to show.
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.detail_text());

            return Err(ChatError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<ChatResponse>(&body).map_err(|e| ChatError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ModelId;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_chat_url_joins_base() {
        let client = BackendClient::new("http://localhost:8000/", 5).unwrap();
        assert_eq!(client.chat_url(), "http://localhost:8000/chat");

        let client = BackendClient::new("http://localhost:8000", 5).unwrap();
        assert_eq!(client.chat_url(), "http://localhost:8000/chat");
    }

    #[test]
    fn test_display_text_prefers_detail() {
        let with_detail = ChatError::Status {
            status: 429,
            detail: Some("rate limited".to_string()),
        };
        assert_eq!(with_detail.display_text(), "Error: rate limited");

        let bare = ChatError::Status {
            status: 502,
            detail: None,
        };
        assert_eq!(bare.display_text(), "Error: Request failed with status code 502");

        let decode = ChatError::Decode("missing field `response`".to_string());
        assert_eq!(
            decode.display_text(),
            "Error: Failed to parse response: missing field `response`"
        );
    }

    #[tokio::test]
    async fn test_send_chat_posts_body_and_returns_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .and(body_json(json!({ "model": "gpt", "message": "hello", "context": [] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "hi there" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri(), 5).unwrap();
        let response = client
            .send_chat(&ChatRequest::new(ModelId::Gpt, "hello"))
            .await
            .unwrap();

        assert_eq!(response.response, "hi there");
        assert_eq!(response.model, None);
    }

    #[tokio::test]
    async fn test_send_chat_surfaces_server_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({ "detail": "rate limited" })))
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri(), 5).unwrap();
        let err = client
            .send_chat(&ChatRequest::new(ModelId::Claude, "hello"))
            .await
            .unwrap_err();

        assert!(matches!(err, ChatError::Status { status: 429, .. }));
        assert_eq!(err.detail(), Some("rate limited"));
        assert_eq!(err.display_text(), "Error: rate limited");
    }

    #[tokio::test]
    async fn test_send_chat_without_detail_uses_status_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri(), 5).unwrap();
        let err = client
            .send_chat(&ChatRequest::new(ModelId::Gemini, "hello"))
            .await
            .unwrap_err();

        assert_eq!(err.detail(), None);
        assert_eq!(err.display_text(), "Error: Request failed with status code 500");
    }

    #[tokio::test]
    async fn test_send_chat_blank_detail_falls_back_to_status_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({ "detail": "" })))
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri(), 5).unwrap();
        let err = client
            .send_chat(&ChatRequest::new(ModelId::Gpt, "hello"))
            .await
            .unwrap_err();

        assert_eq!(err.detail(), None);
        assert_eq!(err.display_text(), "Error: Request failed with status code 422");
    }

    #[tokio::test]
    async fn test_send_chat_rejects_malformed_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "answer": "nope" })))
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri(), 5).unwrap();
        let err = client
            .send_chat(&ChatRequest::new(ModelId::Gpt, "hello"))
            .await
            .unwrap_err();

        assert!(matches!(err, ChatError::Decode(_)));
        assert!(err.display_text().starts_with("Error: Failed to parse response: "));
    }

    #[tokio::test]
    async fn test_send_chat_unreachable_backend_is_transport_error() {
        // Nothing listens on port 1.
        let client = BackendClient::new("http://127.0.0.1:1", 5).unwrap();
        let err = client
            .send_chat(&ChatRequest::new(ModelId::Gpt, "hello"))
            .await
            .unwrap_err();

        assert!(matches!(err, ChatError::Transport(_)));
        assert_eq!(err.detail(), None);
        assert!(err.display_text().starts_with("Error: "));
        assert!(err.display_text().len() > "Error: ".len());
    }
}
