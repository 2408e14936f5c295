//! Typed operation descriptors.
//!
//! An [`Operation`] is a single-shot description of one HTTP call: the
//! configuration key naming the target service, the method and path, the
//! request payload, and the coder profile used on both sides of the wire.
//! It is immutable once built; the execution pipeline is written once,
//! generically over the request and response payload types.

use std::marker::PhantomData;

use http::Method;
use pharos_codec::JsonProfile;

use crate::data::Empty;

/// A typed, single-shot description of one HTTP call.
///
/// # Type Parameters
///
/// - `Q`: the request payload type (its capabilities shape the request)
/// - `R`: the response payload type the body decodes into
///
/// # Example
///
/// ```
/// use http::Method;
/// use pharos_codec::JsonProfile;
/// use pharos_core::{Json, Operation};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize)]
/// struct CreateUser {
///     name: String,
/// }
///
/// #[derive(Deserialize)]
/// struct User {
///     id: u64,
///     name: String,
/// }
///
/// let operation: Operation<_, User> =
///     Operation::builder("accounts", Json(CreateUser { name: "ada".to_string() }))
///         .method(Method::POST)
///         .path("/users")
///         .profile(JsonProfile::Portable)
///         .build();
///
/// assert_eq!(operation.path(), "/users");
/// ```
#[derive(Debug, Clone)]
pub struct Operation<Q, R> {
    config_key: String,
    method: Method,
    path: String,
    request: Q,
    profile: JsonProfile,
    _response: PhantomData<fn() -> R>,
}

impl<Q, R> Operation<Q, R> {
    /// Creates an operation builder for the given configuration key and
    /// request payload.
    #[must_use]
    pub fn builder(config_key: impl Into<String>, request: Q) -> OperationBuilder<Q, R> {
        OperationBuilder::new(config_key, request)
    }

    /// Returns the configuration key naming the target service.
    #[must_use]
    pub fn config_key(&self) -> &str {
        &self.config_key
    }

    /// Returns the HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the endpoint path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the request payload.
    #[must_use]
    pub fn request(&self) -> &Q {
        &self.request
    }

    /// Returns the coder profile used for both encoding and decoding.
    #[must_use]
    pub fn profile(&self) -> JsonProfile {
        self.profile
    }
}

impl<R> Operation<Empty, R> {
    /// Creates a GET operation with no request payload.
    ///
    /// # Example
    ///
    /// ```
    /// use pharos_core::Operation;
    ///
    /// let operation: Operation<_, serde_json::Value> = Operation::get("accounts", "/users");
    /// assert_eq!(operation.method(), &http::Method::GET);
    /// ```
    #[must_use]
    pub fn get(config_key: impl Into<String>, path: impl Into<String>) -> Self {
        Self::builder(config_key, Empty).path(path).build()
    }
}

/// Builder for [`Operation`] instances.
#[derive(Debug)]
pub struct OperationBuilder<Q, R> {
    config_key: String,
    method: Method,
    path: String,
    request: Q,
    profile: JsonProfile,
    _response: PhantomData<fn() -> R>,
}

impl<Q, R> OperationBuilder<Q, R> {
    fn new(config_key: impl Into<String>, request: Q) -> Self {
        Self {
            config_key: config_key.into(),
            method: Method::GET,
            path: "/".to_string(),
            request,
            profile: JsonProfile::default(),
            _response: PhantomData,
        }
    }

    /// Sets the HTTP method. Defaults to GET.
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Sets the endpoint path. Defaults to `/`.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Sets the coder profile. Defaults to [`JsonProfile::Plain`].
    #[must_use]
    pub fn profile(mut self, profile: JsonProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Builds the operation.
    #[must_use]
    pub fn build(self) -> Operation<Q, R> {
        Operation {
            config_key: self.config_key,
            method: self.method,
            path: self.path,
            request: self.request,
            profile: self.profile,
            _response: PhantomData,
        }
    }
}
