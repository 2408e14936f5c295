//! Operation execution.
//!
//! One call moves through a fixed sequence: resolve the endpoint, build the
//! request, invoke the transport, validate the status, decode the body. No
//! step is retried, no step is skipped, and nothing survives the call; the
//! only state shared between concurrent executions is the registry.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};
use url::Url;

use pharos_core::{Operation, RequestData};

use crate::builder::build_request;
use crate::endpoint::Endpoint;
use crate::error::{PharosError, PharosResult};
use crate::registry::ConfigRegistry;
use crate::transport::Transport;

/// Executes typed operations against registered services.
///
/// The client owns its transport and shares a [`ConfigRegistry`]; it holds
/// no per-call state, so a single instance serves any number of concurrent
/// executions.
#[derive(Debug, Clone)]
pub struct Client<T> {
    registry: Arc<ConfigRegistry>,
    transport: T,
}

impl<T: Transport> Client<T> {
    /// Creates a client over a shared registry and a transport.
    #[must_use]
    pub fn new(registry: Arc<ConfigRegistry>, transport: T) -> Self {
        Self {
            registry,
            transport,
        }
    }

    /// Returns the configuration registry.
    #[must_use]
    pub fn registry(&self) -> &ConfigRegistry {
        &self.registry
    }

    /// Registers a base address under a key, overwriting any prior entry.
    pub fn register(&self, key: impl Into<String>, base_url: Url) {
        self.registry.register(key, base_url);
    }

    /// Executes one operation and decodes its typed response.
    ///
    /// Suspends at the registry lookup and the transport call; every other
    /// step is a synchronous transformation.
    ///
    /// # Errors
    ///
    /// Returns the first classified failure encountered:
    ///
    /// - [`PharosError::ConfigurationNotFound`] when the operation's key was
    ///   never registered (the transport is not invoked)
    /// - [`PharosError::Encoding`] when the request body fails to serialize
    /// - [`PharosError::Transport`] when the exchange fails
    /// - [`PharosError::Http`] for a status outside `[200, 299]`
    /// - [`PharosError::Decoding`] when the body does not decode into `R`
    pub async fn execute<Q, R>(&self, operation: &Operation<Q, R>) -> PharosResult<R>
    where
        Q: RequestData + Sync,
        R: DeserializeOwned,
    {
        let endpoint = Endpoint::resolve(
            &self.registry,
            operation.config_key(),
            operation.method().clone(),
            operation.path(),
        )
        .await?;

        let draft = build_request(&endpoint, operation.request(), operation.profile())
            .map_err(|err| {
                error!(category = err.category(), %err, "request build failed");
                err
            })?;

        let response = match self.transport.send(draft).await {
            Ok(response) => response,
            Err(err) => {
                error!(%err, "transport failed");
                return Err(err.into());
            }
        };

        if !response.status.is_success() {
            warn!(status = %response.status, "response status outside success range");
            return Err(PharosError::http(response.status, response.headers));
        }

        debug!(len = response.body.len(), "decoding response body");
        let value = operation.profile().decode(&response.body).map_err(|err| {
            error!(
                kind = err.kind().as_str(),
                path = err.path(),
                "response decode failed"
            );
            PharosError::from(err)
        })?;
        debug!("decoded response body");

        Ok(value)
    }
}
