//! Scripted [`RestClient`] double for tests.

use std::sync::Mutex;

use {async_trait::async_trait, http::Method};

use crate::{
    client::{ApiRequest, RawResponse, RestClient},
    error::Result,
};

struct StubRoute {
    method: Method,
    url_suffix: String,
    status: u16,
    body: String,
}

/// Scripted [`RestClient`] that answers from a fixed route table and records
/// every dispatched request. Unmatched requests answer 404, so they surface
/// through the regular classification path.
#[derive(Default)]
pub struct StubClient {
    routes: Vec<StubRoute>,
    calls: Mutex<Vec<ApiRequest>>,
}

impl StubClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method` requests whose URL ends with `url_suffix`.
    pub fn route(mut self, method: Method, url_suffix: &str, status: u16, body: &str) -> Self {
        self.routes.push(StubRoute {
            method,
            url_suffix: url_suffix.into(),
            status,
            body: body.into(),
        });
        self
    }

    /// Every request dispatched so far, in order.
    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[async_trait]
impl RestClient for StubClient {
    async fn dispatch(&self, request: ApiRequest) -> Result<RawResponse> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request.clone());
        let matched = self
            .routes
            .iter()
            .find(|route| route.method == request.method && request.url.ends_with(&route.url_suffix));
        Ok(match matched {
            Some(route) => RawResponse {
                status: route.status,
                url: request.url,
                body: route.body.clone(),
            },
            None => RawResponse {
                status: 404,
                url: request.url,
                body: String::new(),
            },
        })
    }
}
