//! Capability bindings for the upload zone.
//!
//! # Services
//!
//! - [`dropzone`] - drag & drop batch intake and constraint checks

pub mod dropzone;

pub use dropzone::*;
