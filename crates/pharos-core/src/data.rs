//! Request-data capabilities.
//!
//! A request payload opts into any subset of three capabilities by
//! overriding the corresponding method of [`RequestData`]: header
//! contributions, query contributions, and a body value. The defaults
//! contribute nothing, so a payload that implements none of them leaves the
//! draft request untouched beyond its method and URL. Capability membership
//! is fixed at compile time through the trait implementation; the pipeline
//! never inspects payload types at runtime.

use serde::Serialize;

/// Capability trait for request payloads.
///
/// # Example
///
/// ```
/// use pharos_core::RequestData;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct CreateReminder {
///     name: String,
/// }
///
/// struct CreateReminderRequest {
///     reminder: CreateReminder,
///     list_id: String,
/// }
///
/// impl RequestData for CreateReminderRequest {
///     type Body = CreateReminder;
///
///     fn query(&self) -> Vec<(String, String)> {
///         vec![("list".to_string(), self.list_id.clone())]
///     }
///
///     fn body(&self) -> Option<&Self::Body> {
///         Some(&self.reminder)
///     }
/// }
/// ```
pub trait RequestData {
    /// The body value type, serialized with the operation's coder profile.
    ///
    /// Payloads without a body set this to `()` and keep the default
    /// [`body`](Self::body) implementation.
    type Body: Serialize;

    /// Header contributions, applied in order with later names overwriting
    /// earlier ones.
    fn headers(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Query contributions, applied as an ordered replacement of the URL's
    /// query item list.
    fn query(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// The body value, if this payload carries one.
    fn body(&self) -> Option<&Self::Body> {
        None
    }
}

/// Payload for operations that send nothing beyond method and URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty;

impl RequestData for Empty {
    type Body = ();
}

/// Payload wrapper for the common body-only case.
///
/// # Example
///
/// ```
/// use pharos_core::{Json, RequestData};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct CreateUser {
///     name: String,
/// }
///
/// let payload = Json(CreateUser { name: "ada".to_string() });
/// assert!(payload.body().is_some());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Json<T>(pub T);

impl<T: Serialize> RequestData for Json<T> {
    type Body = T;

    fn body(&self) -> Option<&T> {
        Some(&self.0)
    }
}
