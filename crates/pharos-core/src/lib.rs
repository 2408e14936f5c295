//! # Pharos Core
//!
//! Core types for the Pharos typed HTTP operation framework.
//!
//! This crate provides the vocabulary shared by the client pipeline:
//!
//! - [`Operation`] - a typed, single-shot description of one HTTP call
//! - [`RequestData`] - capability trait through which a payload contributes
//!   headers, query items, and a body to its request
//! - [`DraftRequest`] - the mutable in-progress request handed to the
//!   transport
//! - [`Empty`] / [`Json`] - payload markers for the common cases

#![doc(html_root_url = "https://docs.rs/pharos-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod data;
mod operation;
mod request;

pub use data::{Empty, Json, RequestData};
pub use operation::{Operation, OperationBuilder};
pub use request::DraftRequest;
