//! Buffer primitives for schema-driven binary serialization.
//!
//! ## Overview
//!
//! This library provides the runtime support layer used by generated
//! encoders and decoders of a schema-driven binary format: a [`Writer`]
//! which bump-allocates regions of a byte buffer for encoders to fill, and
//! a [`Reader`] which certifies that a span of an existing buffer is in
//! bounds before a decoder overlays a typed view onto it.
//!
//! The format is little-endian only. Multi-byte values are written and read
//! as raw native-width memory, so incompatible targets are rejected at
//! compile time rather than converted.

#![warn(
    clippy::nursery,
    clippy::pedantic,
    clippy::expect_used,
    clippy::unwrap_used
)]
#![allow(
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

#[cfg(not(target_endian = "little"))]
compile_error!("wirebuf only supports little-endian targets");

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("wirebuf only supports 32-bit and 64-bit targets");

mod error;
pub use error::{Error, Result};

pub mod reader;
pub use reader::Reader;

pub mod writer;
pub use writer::Writer;
