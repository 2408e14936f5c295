//! Transport seam and the reqwest-backed implementation.
//!
//! The pipeline treats the network as a capability: hand over a fully-built
//! request, receive status, headers, and body bytes. Implementations decide
//! timeouts and connection handling; the pipeline never retries.

use std::future::Future;
use std::time::Duration;

use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use tracing::debug;

use pharos_core::DraftRequest;

use crate::error::TransportError;

/// Raw outcome of one HTTP exchange.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body bytes.
    pub body: Bytes,
}

/// A one-shot request/response exchange.
///
/// Implementations are expected to complete, fail, or be abandoned by the
/// caller; no cancellation token flows through the pipeline.
pub trait Transport: Send + Sync {
    /// Executes the request and returns the raw response.
    fn send(
        &self,
        request: DraftRequest,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;
}

/// Reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    /// Creates a transport with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the underlying client cannot be
    /// constructed.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| TransportError::with_source("failed to create http client", err))?;
        Ok(Self { client, timeout })
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: DraftRequest) -> Result<TransportResponse, TransportError> {
        debug!(method = %request.method, url = %request.url, "dispatching request");

        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| TransportError::with_source(format!("request failed: {err}"), err))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|err| TransportError::with_source(format!("failed to read body: {err}"), err))?;

        debug!(status = %status, len = body.len(), "received response");
        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}
