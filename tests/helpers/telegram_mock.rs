//! Mock Telegram API Server for testing
//!
//! This module provides a mock HTTP server that simulates the Telegram Bot API
//! for testing purposes. It uses wiremock to create configurable mock responses
//! and exposes the requests the bot made so tests can inspect them.

use serde_json::{json, Value};
use teloxide::Bot;
use wiremock::{
    matchers::{body_partial_json, method, path_regex},
    Mock, MockServer, ResponseTemplate,
};

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
    pub token: String,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub success: bool,
    pub delay_ms: Option<u64>,
    pub custom_response: Option<Value>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            success: true,
            delay_ms: None,
            custom_response: None,
        }
    }
}

/// A `sendMessage` call captured by the mock server
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub chat_id: i64,
    pub text: String,
    pub reply_markup: Option<Value>,
}

impl SentMessage {
    /// Button captions of the reply keyboard, row by row
    pub fn keyboard(&self) -> Option<Vec<Vec<String>>> {
        let rows = self.reply_markup.as_ref()?.get("keyboard")?.as_array()?;
        Some(
            rows.iter()
                .map(|row| {
                    row.as_array()
                        .map(|buttons| {
                            buttons
                                .iter()
                                .filter_map(|button| button["text"].as_str().map(str::to_string))
                                .collect()
                        })
                        .unwrap_or_default()
                })
                .collect(),
        )
    }

    pub fn removes_keyboard(&self) -> bool {
        self.reply_markup
            .as_ref()
            .and_then(|markup| markup.get("remove_keyboard"))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

impl TelegramMockServer {
    /// Create a new mock Telegram API server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self {
            server,
            token: test_bot_token(),
        }
    }

    /// Bot client pointed at the mock server
    pub fn bot(&self) -> Bot {
        Bot::new(&self.token).set_api_url(self.server.uri().parse().unwrap())
    }

    /// Path matcher for a Bot API method; teloxide spells method names in PascalCase
    fn endpoint(&self, method_name: &str) -> String {
        format!(r"(?i)^/bot[^/]+/{}$", method_name)
    }

    fn response(config: MockResponseConfig, ok_body: Value, error_body: Value) -> ResponseTemplate {
        let body = config
            .custom_response
            .unwrap_or(if config.success { ok_body } else { error_body });

        let mut response = ResponseTemplate::new(if config.success { 200 } else { 400 }).set_body_json(body);
        if let Some(delay) = config.delay_ms {
            response = response.set_delay(std::time::Duration::from_millis(delay));
        }
        response
    }

    /// Setup mock for sendMessage endpoint
    pub async fn mock_send_message(&self, config: MockResponseConfig) {
        let response = Self::response(config, sent_message_response(test_user_id()), chat_not_found());

        Mock::given(method("POST"))
            .and(path_regex(self.endpoint("sendMessage")))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Make every sendMessage to `chat_id` fail, leaving other chats alone
    pub async fn mock_send_message_failure_for(&self, chat_id: i64) {
        Mock::given(method("POST"))
            .and(path_regex(self.endpoint("sendMessage")))
            .and(body_partial_json(json!({ "chat_id": chat_id })))
            .respond_with(ResponseTemplate::new(400).set_body_json(chat_not_found()))
            .with_priority(1)
            .mount(&self.server)
            .await;
    }

    /// Setup mock for setMyCommands endpoint
    pub async fn mock_set_my_commands(&self, config: MockResponseConfig) {
        let response = Self::response(
            config,
            json!({ "ok": true, "result": true }),
            json!({ "ok": false, "error_code": 401, "description": "Unauthorized" }),
        );

        Mock::given(method("POST"))
            .and(path_regex(self.endpoint("setMyCommands")))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Setup all common mocks with default success responses
    pub async fn setup_default_mocks(&self) {
        self.mock_send_message(MockResponseConfig::default()).await;
        self.mock_set_my_commands(MockResponseConfig::default()).await;
    }

    /// Reset all mocks
    pub async fn reset(&self) {
        self.server.reset().await;
    }

    /// sendMessage calls received so far, in arrival order
    pub async fn sent_messages(&self) -> Vec<SentMessage> {
        let requests = self.server.received_requests().await.unwrap_or_default();
        requests
            .iter()
            .filter(|request| is_method(request.url.path(), "sendMessage"))
            .map(|request| {
                let body: Value = serde_json::from_slice(&request.body).unwrap();
                SentMessage {
                    chat_id: body["chat_id"].as_i64().unwrap(),
                    text: body["text"].as_str().unwrap().to_string(),
                    reply_markup: body.get("reply_markup").cloned(),
                }
            })
            .collect()
    }

    /// Verify that a specific endpoint was called
    pub async fn verify_endpoint_called(&self, endpoint: &str, times: usize) {
        let received_requests = self.server.received_requests().await.unwrap();
        let matching_requests = received_requests
            .iter()
            .filter(|req| is_method(req.url.path(), endpoint))
            .count();

        assert_eq!(
            matching_requests, times,
            "Expected {} calls to {}, but got {}",
            times, endpoint, matching_requests
        );
    }
}

/// True when `path` ends with the Bot API method `method_name`, ignoring case
pub fn is_method(path: &str, method_name: &str) -> bool {
    path.rsplit('/')
        .next()
        .map_or(false, |last| last.eq_ignore_ascii_case(method_name))
}

fn sent_message_response(chat_id: i64) -> Value {
    json!({
        "ok": true,
        "result": {
            "message_id": 123,
            "from": {
                "id": 12345,
                "is_bot": true,
                "first_name": "FreightDesk",
                "username": "freightdesk_bot"
            },
            "chat": {
                "id": chat_id,
                "first_name": "Ivan",
                "type": "private"
            },
            "date": 1714550400,
            "text": "ok"
        }
    })
}

fn chat_not_found() -> Value {
    json!({
        "ok": false,
        "error_code": 400,
        "description": "Bad Request: chat not found"
    })
}

/// Helper function to create a test bot token
pub fn test_bot_token() -> String {
    "12345:test_token".to_string()
}

/// Helper function to create test user ID; private chats share the user's ID
pub fn test_user_id() -> i64 {
    987654321
}

/// Chat that receives submitted orders in tests
pub fn test_operator_chat_id() -> i64 {
    1493522735
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_match_ignores_case() {
        assert!(is_method("/bot12345:test_token/SendMessage", "sendMessage"));
        assert!(is_method("/bot12345:test_token/sendMessage", "sendMessage"));
        assert!(!is_method("/bot12345:test_token/SetMyCommands", "sendMessage"));
    }
}
