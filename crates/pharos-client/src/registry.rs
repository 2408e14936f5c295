//! Configuration registry.
//!
//! A process typically constructs one registry at startup, registers the
//! base address of each upstream service under a well-known key, and shares
//! the registry (behind an `Arc`) with every client. The registry is an
//! explicit value rather than a hidden global so tests can construct
//! isolated instances.

use std::collections::HashMap;

use parking_lot::Mutex;
use url::Url;

/// A named API base configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    key: String,
    base_url: Url,
}

impl ServiceConfig {
    /// Creates a configuration entry.
    #[must_use]
    pub fn new(key: impl Into<String>, base_url: Url) -> Self {
        Self {
            key: key.into(),
            base_url,
        }
    }

    /// Returns the configuration key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the base address.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/// Keyed store of named API base configurations.
///
/// Access is serialized through a single mutual-exclusion lock: one
/// registration or lookup completes before the next begins, and the lock is
/// held only for the duration of the map access. Entries persist for the
/// life of the registry; there is no eviction.
#[derive(Debug, Default)]
pub struct ConfigRegistry {
    entries: Mutex<HashMap<String, ServiceConfig>>,
}

impl ConfigRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a base address under a key.
    ///
    /// Registering an existing key overwrites the prior entry; the last
    /// write wins.
    pub fn register(&self, key: impl Into<String>, base_url: Url) {
        let key = key.into();
        tracing::debug!(key = %key, base_url = %base_url, "registered configuration");
        self.entries
            .lock()
            .insert(key.clone(), ServiceConfig::new(key, base_url));
    }

    /// Looks up a configuration by exact key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<ServiceConfig> {
        self.entries.lock().get(key).cloned()
    }

    /// Returns whether a key is registered.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().contains_key(key)
    }

    /// Returns the number of registered configurations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
