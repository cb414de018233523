//! Wire types for the Spark REST API.

use serde::{Deserialize, Serialize};

/// Maximum length the messages endpoint accepts for `text` and `markdown`.
/// Longer values are clamped before serialization; the API rejects them.
pub const MAX_MESSAGE_CHARS: usize = 7439;

/// Body of `POST /v1/messages`. Absent fields stay off the wire.
///
/// At least one of the addressing fields (`room_id`, `to_person_id`,
/// `to_person_email`) must be set by the caller.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_person_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<String>,
}

impl OutboundMessage {
    /// Message addressed to a room.
    pub fn to_room(room_id: impl Into<String>) -> Self {
        Self {
            room_id: Some(room_id.into()),
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_markdown(mut self, markdown: impl Into<String>) -> Self {
        self.markdown = Some(markdown.into());
        self
    }

    pub fn with_files(mut self, files: impl Into<String>) -> Self {
        self.files = Some(files.into());
        self
    }

    /// Clamp `text` and `markdown` independently to the API's hard limit.
    pub(crate) fn truncate_to_limit(&mut self) {
        if let Some(text) = self.text.as_mut() {
            truncate_chars(text, MAX_MESSAGE_CHARS);
        }
        if let Some(markdown) = self.markdown.as_mut() {
            truncate_chars(markdown, MAX_MESSAGE_CHARS);
        }
    }
}

/// Cut `value` down to at most `max` characters, on a char boundary.
fn truncate_chars(value: &mut String, max: usize) {
    if let Some((index, _)) = value.char_indices().nth(max) {
        value.truncate(index);
    }
}

/// Subset of `GET /v1/messages/{id}` the bot cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageDetails {
    #[serde(default)]
    pub text: String,
}

/// `GET /v1/people/{id}` entity. Read-only, fetched on demand, never cached.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub display_name: String,
    /// ISO-8601 creation timestamp.
    pub created: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub emails: Vec<String>,
}

/// One entry of `GET /v1/rooms`.
#[derive(Debug, Clone, Deserialize)]
pub struct Room {
    pub id: String,
    pub title: String,
    /// "group" for multi-party rooms, "direct" for 1:1 conversations.
    #[serde(rename = "type")]
    pub room_type: String,
}

/// Collection payload of `GET /v1/rooms`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomList {
    #[serde(default)]
    pub items: Vec<Room>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_stay_off_the_wire() {
        let message = OutboundMessage::to_room("R1").with_text("hello");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json, serde_json::json!({"roomId": "R1", "text": "hello"}));
    }

    #[test]
    fn long_text_is_clamped_to_the_limit() {
        let mut message = OutboundMessage::to_room("R1").with_text("x".repeat(10_000));
        message.truncate_to_limit();
        let text = message.text.unwrap();
        assert_eq!(text.len(), MAX_MESSAGE_CHARS);
        assert_eq!(text, "x".repeat(MAX_MESSAGE_CHARS));
    }

    #[test]
    fn text_and_markdown_are_clamped_independently() {
        let mut message = OutboundMessage::to_room("R1")
            .with_text("t".repeat(8_000))
            .with_markdown("m".repeat(9_000));
        message.truncate_to_limit();
        assert_eq!(message.text.unwrap().len(), MAX_MESSAGE_CHARS);
        assert_eq!(message.markdown.unwrap().len(), MAX_MESSAGE_CHARS);
    }

    #[test]
    fn short_text_is_left_alone() {
        let mut message = OutboundMessage::to_room("R1").with_text("short");
        message.truncate_to_limit();
        assert_eq!(message.text.as_deref(), Some("short"));
    }

    #[test]
    fn clamping_counts_characters_not_bytes() {
        let mut message = OutboundMessage::to_room("R1").with_text("é".repeat(8_000));
        message.truncate_to_limit();
        let text = message.text.unwrap();
        assert_eq!(text.chars().count(), MAX_MESSAGE_CHARS);
    }

    #[test]
    fn person_decodes_the_camel_case_payload() {
        let person: Person = serde_json::from_str(
            r#"{
                "id": "P-1",
                "displayName": "Ada",
                "created": "2016-07-05T12:00:00.000Z",
                "avatar": "https://avatars.test/ada.png",
                "emails": ["ada@example.com"]
            }"#,
        )
        .unwrap();
        assert_eq!(person.display_name, "Ada");
        assert_eq!(person.emails, vec!["ada@example.com".to_string()]);
    }

    #[test]
    fn room_type_maps_the_reserved_word() {
        let rooms: RoomList = serde_json::from_str(
            r#"{"items": [{"id": "R1", "title": "Eng", "type": "group"}]}"#,
        )
        .unwrap();
        assert_eq!(rooms.items[0].room_type, "group");
    }
}
