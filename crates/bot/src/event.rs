//! Inbound webhook event types.

use serde::Deserialize;

/// Identifier used for every field of a test-mode (GET) invocation.
/// Replies are never dispatched to this room.
pub const LOCAL_TEST_ID: &str = "local-test";

/// Webhook delivery payload as posted by Spark.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookDelivery {
    pub data: DeliveryData,
}

/// Identifying fields of the triggering message. Spark does not deliver the
/// message body itself; it has to be fetched separately.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryData {
    pub id: String,
    pub person_id: String,
    pub person_email: String,
    pub room_id: String,
}

/// Per-request view of the triggering event. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct InboundEvent {
    pub message_id: String,
    pub person_id: String,
    pub person_email: String,
    pub room_id: String,
}

impl InboundEvent {
    /// Synthetic event for manual GET invocations.
    pub fn local_test() -> Self {
        Self {
            message_id: LOCAL_TEST_ID.into(),
            person_id: LOCAL_TEST_ID.into(),
            person_email: LOCAL_TEST_ID.into(),
            room_id: LOCAL_TEST_ID.into(),
        }
    }

    /// True for events synthesized by [`InboundEvent::local_test`].
    pub fn is_local_test(&self) -> bool {
        self.room_id == LOCAL_TEST_ID
    }
}

impl From<WebhookDelivery> for InboundEvent {
    fn from(delivery: WebhookDelivery) -> Self {
        let data = delivery.data;
        Self {
            message_id: data.id,
            person_id: data.person_id,
            person_email: data.person_email,
            room_id: data.room_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_payload_maps_onto_the_event() {
        let delivery: WebhookDelivery = serde_json::from_str(
            r#"{
                "data": {
                    "id": "MSG-1",
                    "personId": "P-1",
                    "personEmail": "ada@example.com",
                    "roomId": "R-1"
                }
            }"#,
        )
        .unwrap();
        let event = InboundEvent::from(delivery);
        assert_eq!(event.message_id, "MSG-1");
        assert_eq!(event.person_id, "P-1");
        assert_eq!(event.person_email, "ada@example.com");
        assert_eq!(event.room_id, "R-1");
        assert!(!event.is_local_test());
    }

    #[test]
    fn local_test_events_are_flagged() {
        assert!(InboundEvent::local_test().is_local_test());
    }
}
