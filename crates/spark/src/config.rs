use {
    secrecy::{ExposeSecret, Secret},
    serde::{Deserialize, Serialize},
};

/// Token value shipped in example configs. Requests made with it will never
/// authenticate; the bot warns about it at startup and after failed reads.
pub const TOKEN_PLACEHOLDER: &str = "GET-YOUR-TOKEN";

const DEFAULT_BASE_URL: &str = "https://api.ciscospark.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for one Spark bot account.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SparkConfig {
    /// Bearer token provisioned for the bot.
    #[serde(serialize_with = "serialize_secret")]
    pub token: Secret<String>,

    /// API origin, joined with the version prefix on every call.
    pub base_url: String,

    /// Outbound request timeout in seconds. Always applied; the transport
    /// default is deliberately not relied on.
    pub request_timeout_secs: u64,
}

impl SparkConfig {
    /// True while the config still carries the placeholder token.
    pub fn token_is_placeholder(&self) -> bool {
        self.token.expose_secret() == TOKEN_PLACEHOLDER
    }
}

impl Default for SparkConfig {
    fn default() -> Self {
        Self {
            token: Secret::new(TOKEN_PLACEHOLDER.into()),
            base_url: DEFAULT_BASE_URL.into(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl std::fmt::Debug for SparkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SparkConfig")
            .field("token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

fn serialize_secret<S: serde::Serializer>(
    secret: &Secret<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}
