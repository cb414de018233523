//! Cisco Spark (Webex) REST plumbing for sparkbot.
//!
//! `client` holds the generic REST client with typed status classification;
//! `api` wraps it with the Spark-specific endpoint paths, header shape, and
//! payload shapes.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod types;

#[cfg(any(test, feature = "test-util"))]
pub mod test_util;

pub use {
    api::SparkApi,
    client::{ApiRequest, HttpRestClient, RawResponse, RestClient},
    config::{SparkConfig, TOKEN_PLACEHOLDER},
    error::{Error, Result},
};
