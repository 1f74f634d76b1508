//! metriq core: transport-free data model, form parsing, and rendering.
//!
//! This crate defines the Metric record shapes exchanged with the metrics
//! service, the parsing of raw form fields into a create payload, and the
//! pure text rendering of a fetched collection. It intentionally carries no
//! HTTP or runtime dependencies so the fetch/transform layer can be
//! exercised without a live endpoint.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `MetriqError`/`Result` so the console
//! does not crash on malformed input or bad responses.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod model;
pub mod render;

/// Shared result type.
pub use error::{MetriqError, Result};
