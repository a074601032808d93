//! Test data helpers for creating test objects
//!
//! Messages are built from Bot API JSON, the same way teloxide receives them.

use serde_json::json;
use teloxide::types::Message;

/// Helper function to create a text message in a private chat
pub fn create_text_message(user_id: i64, username: Option<&str>, text: &str) -> Message {
    let mut user = json!({
        "id": user_id,
        "is_bot": false,
        "first_name": "Ivan",
        "language_code": "ru"
    });
    let mut chat = json!({
        "id": user_id,
        "first_name": "Ivan",
        "type": "private"
    });
    if let Some(username) = username {
        user["username"] = json!(username);
        chat["username"] = json!(username);
    }

    serde_json::from_value(json!({
        "message_id": 1,
        "date": 1714550400,
        "chat": chat,
        "from": user,
        "text": text
    }))
    .expect("valid message JSON")
}

/// Helper function to create a location message, which carries no text
pub fn create_location_message(user_id: i64) -> Message {
    serde_json::from_value(json!({
        "message_id": 2,
        "date": 1714550400,
        "chat": { "id": user_id, "first_name": "Ivan", "type": "private" },
        "from": { "id": user_id, "is_bot": false, "first_name": "Ivan" },
        "location": { "latitude": 55.7558, "longitude": 37.6173 }
    }))
    .expect("valid location JSON")
}

/// Answers for the seven free-text wizard steps, after the marketplace
pub fn order_answers() -> [&'static str; 7] {
    [
        "Склад №1",
        "2024-05-01",
        "ул. Ленина, д. 1",
        "15",
        "12",
        "ИП Иванов",
        "+79001234567",
    ]
}
