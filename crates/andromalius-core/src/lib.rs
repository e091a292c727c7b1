//! # Andromalius Core
//!
//! Core error, wire, and session types for the Andromalius decompression
//! library.
//!
//! Andromalius is named after the 72nd demon of the Ars Goetia, who returns
//! stolen goods and uncovers what is hidden - fitting for a library that
//! only ever recovers data and never conceals it: it decompresses inbound
//! packets but ships outbound packets untouched.
//!
//! ## Design Philosophy
//!
//! - **Asymmetric**: decompression only; there is no compression path
//! - **Bounded**: every input read, output write, and back-reference is
//!   checked against its buffer
//! - **Allocation-free hot path**: the decoder works entirely in
//!   caller-provided buffers
//!
//! ## Core Items
//!
//! - [`Error`] / [`Result`] - failure taxonomy shared by decoder and framing
//! - [`FramingTag`] - the one-byte per-packet wire tags
//! - [`PacketCodec`] - the per-session framing seam
//! - [`Metrics`] - session counters for the error sink

pub mod error;
pub mod stats;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use stats::Metrics;
pub use traits::PacketCodec;
pub use types::FramingTag;
