use thiserror::Error;

/// Crate-wide result type for Spark API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Typed outcome of a Spark REST call, classified by HTTP status or
/// transport condition. Nothing here is retried; a failure terminates the
/// current request's processing.
#[derive(Debug, Error)]
pub enum Error {
    /// Network or connection error reaching the Spark API.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// 302 — the API redirected to a login page instead of answering.
    #[error("incorrect credentials provided")]
    BadCredentials,

    /// 400 — detail extracted from `errorDocument.message` when present.
    #[error("invalid request: {message}")]
    InvalidRequest { message: String },

    /// 401
    #[error("unauthorized access")]
    Unauthorized,

    /// 403
    #[error("forbidden access to the REST API")]
    Forbidden,

    /// 404 — carries the resolved URL so misconfigured bases show up.
    #[error("URL not found: {url}")]
    NotFound { url: String },

    /// 406
    #[error("the Accept header sent in the request does not match a supported type")]
    NotAcceptable,

    /// 415
    #[error("the Content-Type header sent in the request does not match a supported type")]
    UnsupportedMediaType,

    /// 500
    #[error("an error occurred during the API invocation")]
    Internal,

    /// 502
    #[error("the API server is down or being upgraded")]
    BadGateway,

    /// 503
    #[error("the API servers are overloaded with requests, try again later")]
    RateLimited,

    /// Any status code outside the classified set.
    #[error("unexpected status code {status}")]
    UnexpectedStatus { status: u16 },

    /// Request or response JSON (de)serialization failed.
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}
