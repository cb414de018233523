//! Generic REST client: one dispatch per call, typed status classification.

use std::time::Duration;

use {async_trait::async_trait, http::Method, tracing::debug};

use crate::error::{Error, Result};

/// A single outbound REST request.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Raw transport response, before classification.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    /// Fully resolved request URL, kept for not-found reporting.
    pub url: String,
    pub body: String,
}

/// Capability interface the Spark façade depends on.
///
/// `dispatch` is the only transport-specific method. `send` and `send_json`
/// layer status classification and JSON decoding on top of it, so a scripted
/// test double goes through the same classification as the real client.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Issue exactly one HTTP call. No retries.
    async fn dispatch(&self, request: ApiRequest) -> Result<RawResponse>;

    /// Dispatch and classify the HTTP status into a typed outcome.
    async fn send(&self, request: ApiRequest) -> Result<RawResponse> {
        debug!(method = %request.method, url = %request.url, "sending Spark API request");
        let response = self.dispatch(request).await?;
        classify_status(&response)?;
        debug!(status = response.status, "Spark API request succeeded");
        Ok(response)
    }

    /// Dispatch, classify, and decode the response body as JSON.
    async fn send_json(&self, request: ApiRequest) -> Result<serde_json::Value> {
        let response = self.send(request).await?;
        Ok(serde_json::from_str(&response.body)?)
    }
}

/// Map an HTTP status to its typed outcome. 200 is the only success; the
/// classified set mirrors the Spark API documentation and anything outside
/// it is reported with the literal status code.
pub fn classify_status(response: &RawResponse) -> Result<()> {
    match response.status {
        200 => Ok(()),
        302 => Err(Error::BadCredentials),
        400 => Err(Error::InvalidRequest {
            message: error_document_message(&response.body),
        }),
        401 => Err(Error::Unauthorized),
        403 => Err(Error::Forbidden),
        404 => Err(Error::NotFound {
            url: response.url.clone(),
        }),
        406 => Err(Error::NotAcceptable),
        415 => Err(Error::UnsupportedMediaType),
        500 => Err(Error::Internal),
        502 => Err(Error::BadGateway),
        503 => Err(Error::RateLimited),
        status => Err(Error::UnexpectedStatus { status }),
    }
}

/// Pull `errorDocument.message` out of a 400 body, falling back to the raw
/// body when the shape does not match.
fn error_document_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .pointer("/errorDocument/message")
                .and_then(|message| message.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

/// reqwest-backed [`RestClient`] with an explicit per-request timeout.
///
/// The timeout comes from config rather than the transport default, so a
/// hung remote call cannot pin a webhook request forever.
pub struct HttpRestClient {
    http: reqwest::Client,
}

impl HttpRestClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl RestClient for HttpRestClient {
    async fn dispatch(&self, request: ApiRequest) -> Result<RawResponse> {
        let mut builder = self.http.request(request.method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let body = response.text().await?;
        Ok(RawResponse { status, url, body })
    }
}
