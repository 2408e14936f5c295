//! # Pharos Codec
//!
//! JSON coding strategies for the Pharos operation framework.
//!
//! This crate provides the two coder profiles used on the wire:
//!
//! - [`JsonProfile::Plain`] - field names are emitted exactly as declared
//! - [`JsonProfile::Portable`] - field names are translated to `snake_case`
//!   on encode and back to the declared casing on decode
//!
//! Both profiles share the same date handling through [`Timestamp`]: instants
//! at midnight UTC travel as date-only strings (`YYYY-MM-DD`), everything
//! else at microsecond precision. Decode failures are classified into a
//! [`DecodeError`] carrying the failing field path and a snippet of the raw
//! payload for diagnostics.

#![doc(html_root_url = "https://docs.rs/pharos-codec/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod profile;
mod timestamp;

pub use error::{DecodeError, DecodeKind, EncodeError};
pub use profile::JsonProfile;
pub use timestamp::{Timestamp, TimestampError};
