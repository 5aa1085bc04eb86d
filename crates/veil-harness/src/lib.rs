//! Test harness for the veil cipher engine.
//!
//! Shared fixtures for integration tests: the RFC 8439 reference vectors and
//! deterministic, seeded message corpora. Keeping these in a library crate
//! lets vector tests, property tests, and fuzz reproduction all draw from the
//! same data.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod corpus;
pub mod vectors;

pub use corpus::seeded_messages;
