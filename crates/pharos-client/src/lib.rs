//! # Pharos Client
//!
//! Typed HTTP operation execution for the Pharos framework.
//!
//! Callers declare an [`Operation`] (method, path, payload types, coder
//! profile), register base addresses in a [`ConfigRegistry`], and hand both
//! to a [`Client`]. The client resolves the endpoint, assembles the request
//! from the payload's capabilities, invokes the [`Transport`], validates the
//! HTTP status, and decodes the typed response, returning either the typed
//! value or a classified [`PharosError`].
//!
//! # Example
//!
//! ```no_run
//! use pharos_client::{Client, ConfigRegistry, HttpTransport, Operation};
//! use serde::Deserialize;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[derive(Deserialize)]
//! struct Health {
//!     success: bool,
//! }
//!
//! # async fn run() -> Result<(), pharos_client::PharosError> {
//! let registry = Arc::new(ConfigRegistry::new());
//! registry.register("svc", "https://api.example.com".parse().unwrap());
//!
//! let client = Client::new(registry, HttpTransport::new(Duration::from_secs(30))?);
//! let health: Health = client.execute(&Operation::get("svc", "/health")).await?;
//! assert!(health.success);
//! # Ok(())
//! # }
//! ```

#![doc(html_root_url = "https://docs.rs/pharos-client/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod builder;
mod client;
mod endpoint;
mod error;
mod registry;
mod transport;

pub use builder::build_request;
pub use client::Client;
pub use endpoint::Endpoint;
pub use error::{PharosError, PharosResult, TransportError};
pub use registry::{ConfigRegistry, ServiceConfig};
pub use transport::{HttpTransport, Transport, TransportResponse};

pub use pharos_codec::{DecodeError, DecodeKind, EncodeError, JsonProfile, Timestamp};
pub use pharos_core::{DraftRequest, Empty, Json, Operation, OperationBuilder, RequestData};
