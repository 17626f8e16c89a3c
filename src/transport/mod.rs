//! Transport-facing request model.
//!
//! # Data Flow
//! ```text
//! serializer (method + encoded body)
//!     → Request (base)
//!     → pipeline stages (each stage works on its own copy)
//!     → final Request handed to a transport
//! ```
//!
//! # Design Decisions
//! - Every map and the body are owned values, so a copy never aliases
//! - Maps are ordered so the prepared request prints deterministically

pub mod request;

pub use request::{merge_overrides, Headers, Request};
