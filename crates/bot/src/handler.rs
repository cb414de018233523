//! The per-request webhook pipeline and its single failure boundary.

use {
    chrono::Utc,
    tracing::{info, warn},
};

use sparkbot_spark::{SparkApi, types::OutboundMessage};

use crate::{
    error::{Error, Result},
    event::InboundEvent,
    intent::{Intent, match_intent},
    reply::{self, Reply},
};

/// How the webhook endpoint was invoked.
#[derive(Debug, Clone)]
pub enum Trigger {
    /// Manual GET invocation carrying the message text directly.
    Test { message: String },
    /// Production POST delivery; the message text has to be fetched.
    Delivery { event: InboundEvent },
    /// Anything that is neither GET nor POST.
    Unsupported { method: String },
}

/// The bot: holds the façade and answers webhook triggers.
pub struct Bot {
    api: SparkApi,
    token_is_placeholder: bool,
}

impl Bot {
    pub fn new(api: SparkApi, token_is_placeholder: bool) -> Self {
        Self {
            api,
            token_is_placeholder,
        }
    }

    /// Run the pipeline and render the outcome for the webhook caller.
    ///
    /// The caller always gets HTTP 200 with this text as the body; failures
    /// surface here and in the logs, never as an HTTP error status. That is
    /// the platform contract the bot was built against.
    pub async fn respond(&self, trigger: Trigger) -> String {
        match self.run(trigger).await {
            Ok(Some(text)) => text,
            Ok(None) => "Success".to_string(),
            Err(error) => {
                warn!(%error, "webhook request failed");
                error.to_string()
            },
        }
    }

    async fn run(&self, trigger: Trigger) -> Result<Option<String>> {
        let (event, message) = match trigger {
            Trigger::Unsupported { method } => {
                return Err(Error::UnsupportedMethod { method });
            },
            Trigger::Test { message } => (InboundEvent::local_test(), message),
            Trigger::Delivery { event } => {
                let message = self.read_message(&event.message_id).await?;
                (event, message)
            },
        };

        info!(room_id = %event.room_id, "received: {message}");

        let Some(intent) = match_intent(&message) else {
            return Ok(None);
        };

        let reply = self.build_reply(intent, &event).await?;

        // Test invocations only echo the text back to the HTTP caller;
        // real rooms get the reply posted.
        if !event.is_local_test() {
            let mut outbound =
                OutboundMessage::to_room(event.room_id.as_str()).with_text(reply.text.clone());
            outbound.files = reply.files.clone();
            self.api
                .post_message(outbound)
                .await
                .map_err(|source| Error::Write { source })?;
        }

        Ok(Some(reply.text))
    }

    /// Fetch the triggering message. A placeholder token is diagnosed only
    /// after the read has failed, never checked up front.
    async fn read_message(&self, message_id: &str) -> Result<String> {
        match self.api.get_message(message_id).await {
            Ok(text) => Ok(text),
            Err(source) if self.token_is_placeholder => {
                warn!(%source, "message read failed with the placeholder token still configured");
                Err(Error::TokenNotConfigured)
            },
            Err(source) => Err(Error::Read { source }),
        }
    }

    async fn build_reply(&self, intent: Intent, event: &InboundEvent) -> Result<Reply> {
        match intent {
            Intent::Greeting => Ok(reply::greeting()),
            Intent::ShowMoney => Ok(reply::show_money(event)),
            Intent::ShowMoreMoney => Ok(reply::show_more_money()),
            Intent::WhoAreYou => Ok(reply::who_are_you()),
            Intent::Help => Ok(reply::help()),
            Intent::WhoAmI => {
                let Some(person) = self.api.get_person_details(&event.person_id).await? else {
                    return Ok(Reply::text("Sorry, I could not look up your profile."));
                };
                reply::person_summary(&person, &event.person_email, Utc::now())
            },
            Intent::WhichRooms => {
                let rooms = self.api.get_rooms().await?;
                Ok(reply::room_listing(&rooms))
            },
        }
    }
}
