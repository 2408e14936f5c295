//! Endpoint resolution.

use http::Method;
use tracing::{debug, warn};
use url::Url;

use crate::error::{PharosError, PharosResult};
use crate::registry::ConfigRegistry;

/// A resolved call target: base address, method, and path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    method: Method,
    base_url: Url,
    path: String,
}

impl Endpoint {
    /// Resolves an endpoint from a registered configuration key.
    ///
    /// The registry already caches configurations, so resolution performs a
    /// single lookup and never caches its own results.
    ///
    /// # Errors
    ///
    /// Returns [`PharosError::ConfigurationNotFound`] when the key was never
    /// registered. No default is ever substituted.
    pub async fn resolve(
        registry: &ConfigRegistry,
        key: &str,
        method: Method,
        path: &str,
    ) -> PharosResult<Self> {
        let Some(config) = registry.get(key) else {
            warn!(key, "configuration lookup failed");
            return Err(PharosError::configuration_not_found(key));
        };

        debug!(key, method = %method, path, "resolved endpoint");
        Ok(Self {
            method,
            base_url: config.base_url().clone(),
            path: path.to_string(),
        })
    }

    /// Returns the HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the base address.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the path to append to the base address.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the full request URL: the base address with the path appended
    /// as path components.
    ///
    /// A base address that cannot carry path segments keeps its URL
    /// unchanged; the condition is logged.
    #[must_use]
    pub fn url(&self) -> Url {
        let mut url = self.base_url.clone();
        {
            let Ok(mut segments) = url.path_segments_mut() else {
                warn!(base_url = %self.base_url, "base address cannot carry path segments");
                return self.base_url.clone();
            };
            segments.pop_if_empty();
            segments.extend(self.path.split('/').filter(|segment| !segment.is_empty()));
        }
        url
    }
}
