use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure union of the webhook pipeline.
///
/// The handler is the single boundary that renders these for the webhook
/// caller; nothing escapes as a panic or as a non-200 response.
#[derive(Debug, Error)]
pub enum Error {
    /// Inbound call used a method the webhook endpoint does not understand.
    #[error("cannot handle {method} requests on the webhook endpoint")]
    UnsupportedMethod { method: String },

    /// Reading the triggering message failed while the configured token is
    /// still the placeholder, which is the likely cause.
    #[error(
        "the Spark token is not configured; put your bot token into the `spark.token` config key \
         (see https://developer.webex.com/docs/getting-started)"
    )]
    TokenNotConfigured,

    /// Reading the triggering message from Spark failed.
    #[error("failed to read the triggering message from Spark: {source}")]
    Read {
        #[source]
        source: sparkbot_spark::Error,
    },

    /// Posting the reply back to Spark failed.
    #[error("failed to post the reply to Spark: {source}")]
    Write {
        #[source]
        source: sparkbot_spark::Error,
    },

    /// A secondary lookup (person, rooms) failed; surfaced verbatim.
    #[error(transparent)]
    Api(#[from] sparkbot_spark::Error),

    /// A person record carried a creation timestamp we could not parse.
    #[error("invalid creation timestamp in person record: {0}")]
    InvalidTimestamp(#[from] chrono::ParseError),
}
