//! Typed operations over the Spark REST endpoints.

use std::sync::Arc;

use {http::Method, secrecy::ExposeSecret, tracing::warn};

use crate::{
    client::{ApiRequest, RestClient},
    config::SparkConfig,
    error::Result,
    types::{MessageDetails, OutboundMessage, Person, RoomList},
};

const API_VERSION: &str = "v1";

const MESSAGES: &str = "messages";
const ROOMS: &str = "rooms";
const WEBHOOKS: &str = "webhooks";
const PEOPLE: &str = "people";

/// Spark messaging façade: knows the endpoint paths, header shape, and
/// payload shapes so nothing else has to.
pub struct SparkApi {
    client: Arc<dyn RestClient>,
    base_url: String,
    /// Built once at construction, shared by every call.
    headers: Vec<(String, String)>,
}

impl SparkApi {
    pub fn new(config: &SparkConfig, client: Arc<dyn RestClient>) -> Self {
        let headers = vec![
            (
                "authorization".into(),
                format!("Bearer {}", config.token.expose_secret()),
            ),
            ("content-type".into(), "application/json".into()),
            ("cache-control".into(), "no-cache".into()),
        ];
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            headers,
        }
    }

    fn collection_url(&self, resource: &str) -> String {
        format!("{}/{}/{}", self.base_url, API_VERSION, resource)
    }

    fn item_url(&self, resource: &str, id: &str) -> String {
        format!("{}/{}", self.collection_url(resource), urlencoding::encode(id))
    }

    fn get(&self, url: String) -> ApiRequest {
        ApiRequest {
            method: Method::GET,
            url,
            headers: self.headers.clone(),
            body: None,
        }
    }

    fn post(&self, url: String, body: String) -> ApiRequest {
        ApiRequest {
            method: Method::POST,
            url,
            headers: self.headers.clone(),
            body: Some(body),
        }
    }

    /// Post a message. `text` and `markdown` are clamped to the API limit
    /// before serialization.
    pub async fn post_message(&self, mut message: OutboundMessage) -> Result<serde_json::Value> {
        message.truncate_to_limit();
        let body = serde_json::to_string(&message)?;
        self.client
            .send_json(self.post(self.collection_url(MESSAGES), body))
            .await
    }

    /// Register a webhook. All four required fields must be non-empty;
    /// otherwise the call is skipped with a warning and `Ok(None)`.
    pub async fn create_webhook(
        &self,
        name: &str,
        target_url: &str,
        resource: &str,
        event: &str,
        filter: Option<&str>,
        secret: Option<&str>,
    ) -> Result<Option<serde_json::Value>> {
        if name.is_empty() || target_url.is_empty() || resource.is_empty() || event.is_empty() {
            warn!(
                name,
                target_url, resource, event, "skipping webhook registration: required fields missing"
            );
            return Ok(None);
        }
        let mut body = serde_json::json!({
            "name": name,
            "targetUrl": target_url,
            "resource": resource,
            "event": event,
        });
        if let Some(filter) = filter {
            body["filter"] = filter.into();
        }
        if let Some(secret) = secret {
            body["secret"] = secret.into();
        }
        let request = self.post(self.collection_url(WEBHOOKS), body.to_string());
        Ok(Some(self.client.send_json(request).await?))
    }

    /// Register a message-created webhook filtered to a single room.
    pub async fn create_webhook_simplified(
        &self,
        name: &str,
        target_url: &str,
        resource: &str,
        room_id: &str,
    ) -> Result<Option<serde_json::Value>> {
        let filter = format!("roomId={room_id}");
        self.create_webhook(name, target_url, resource, "created", Some(&filter), None)
            .await
    }

    /// Fetch a person by id. An empty id is skipped with a warning.
    pub async fn get_person_details(&self, person_id: &str) -> Result<Option<Person>> {
        if person_id.is_empty() {
            warn!("skipping person lookup: empty person id");
            return Ok(None);
        }
        let value = self
            .client
            .send_json(self.get(self.item_url(PEOPLE, person_id)))
            .await?;
        Ok(Some(serde_json::from_value(value)?))
    }

    /// Fetch a message by id and return only its text.
    pub async fn get_message(&self, message_id: &str) -> Result<String> {
        let value = self
            .client
            .send_json(self.get(self.item_url(MESSAGES, message_id)))
            .await?;
        let details: MessageDetails = serde_json::from_value(value)?;
        Ok(details.text)
    }

    /// Fetch the room collection. Filtering is up to the caller.
    pub async fn get_rooms(&self) -> Result<RoomList> {
        let value = self
            .client
            .send_json(self.get(self.collection_url(ROOMS)))
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::Error,
        test_util::StubClient,
        types::MAX_MESSAGE_CHARS,
    };

    fn api(stub: &Arc<StubClient>) -> SparkApi {
        let config = SparkConfig {
            base_url: "https://spark.test".into(),
            ..SparkConfig::default()
        };
        SparkApi::new(&config, Arc::clone(stub) as Arc<dyn RestClient>)
    }

    #[tokio::test]
    async fn every_call_carries_the_shared_header_set() {
        let stub = Arc::new(StubClient::new().route(Method::GET, "/v1/rooms", 200, r#"{"items":[]}"#));
        api(&stub).get_rooms().await.unwrap();

        let calls = stub.calls();
        let authorization = calls[0]
            .headers
            .iter()
            .find(|(name, _)| name == "authorization")
            .map(|(_, value)| value.clone())
            .unwrap();
        assert!(authorization.starts_with("Bearer "));
        assert!(calls[0].headers.iter().any(|(name, value)| {
            name == "cache-control" && value == "no-cache"
        }));
    }

    #[tokio::test]
    async fn post_message_clamps_long_text_before_serialization() {
        let stub = Arc::new(StubClient::new().route(Method::POST, "/v1/messages", 200, "{}"));
        let message = OutboundMessage::to_room("R1").with_text("x".repeat(10_000));
        api(&stub).post_message(message).await.unwrap();

        let body: serde_json::Value =
            serde_json::from_str(stub.calls()[0].body.as_deref().unwrap()).unwrap();
        let text = body["text"].as_str().unwrap();
        assert_eq!(text.len(), MAX_MESSAGE_CHARS);
        assert_eq!(text, "x".repeat(MAX_MESSAGE_CHARS));
    }

    #[tokio::test]
    async fn post_message_omits_absent_fields() {
        let stub = Arc::new(StubClient::new().route(Method::POST, "/v1/messages", 200, "{}"));
        let message = OutboundMessage::to_room("R1").with_text("hello");
        api(&stub).post_message(message).await.unwrap();

        let body: serde_json::Value =
            serde_json::from_str(stub.calls()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"roomId": "R1", "text": "hello"}));
    }

    #[rstest::rstest]
    #[case("", "https://bot.test/webhook_messages", "messages", "created")]
    #[case("bot", "", "messages", "created")]
    #[case("bot", "https://bot.test/webhook_messages", "", "created")]
    #[case("bot", "https://bot.test/webhook_messages", "messages", "")]
    #[tokio::test]
    async fn create_webhook_with_a_missing_required_field_is_a_no_op(
        #[case] name: &str,
        #[case] target_url: &str,
        #[case] resource: &str,
        #[case] event: &str,
    ) {
        let stub = Arc::new(StubClient::new());
        let created = api(&stub)
            .create_webhook(name, target_url, resource, event, None, None)
            .await
            .unwrap();
        assert!(created.is_none());
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn create_webhook_simplified_fixes_event_and_filter() {
        let stub = Arc::new(StubClient::new().route(Method::POST, "/v1/webhooks", 200, "{}"));
        api(&stub)
            .create_webhook_simplified("bot", "https://bot.test/webhook_messages", "messages", "R1")
            .await
            .unwrap();

        let body: serde_json::Value =
            serde_json::from_str(stub.calls()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["event"], "created");
        assert_eq!(body["filter"], "roomId=R1");
        assert!(body.get("secret").is_none());
    }

    #[tokio::test]
    async fn get_person_details_with_empty_id_is_a_no_op() {
        let stub = Arc::new(StubClient::new());
        let person = api(&stub).get_person_details("").await.unwrap();
        assert!(person.is_none());
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn get_message_returns_only_the_text_field() {
        let stub = Arc::new(StubClient::new().route(
            Method::GET,
            "/v1/messages/MSG-1",
            200,
            r#"{"id": "MSG-1", "roomId": "R1", "text": "hi there"}"#,
        ));
        let text = api(&stub).get_message("MSG-1").await.unwrap();
        assert_eq!(text, "hi there");
    }

    #[tokio::test]
    async fn unrouted_calls_surface_as_classified_failures() {
        let stub = Arc::new(StubClient::new());
        let error = api(&stub).get_rooms().await.unwrap_err();
        assert!(matches!(error, Error::NotFound { .. }));
    }
}
