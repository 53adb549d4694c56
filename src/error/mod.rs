//! Error types for the object stream decoder.
//!
//! - [`RegistryError`] — Registration-time failures (inconsistent static wiring).
//! - [`LookupError`] — Registry resolution misses.
//! - [`DecodeError`] — Decode-time failures (bad or unsupported input data).
//!
//! Registration errors never propagate into decode-time error types and vice
//! versa; each carries enough context (type name, document index) to diagnose
//! a failure without inspecting internal state.

pub mod decode_error;
pub mod registry_error;

pub use decode_error::DecodeError;
pub use registry_error::{LookupError, RegistryError};

/// Convenience alias for registration results.
pub type RegistryResult<T> = Result<T, RegistryError>;
/// Convenience alias for decode results.
pub type DecodeResult<T> = Result<T, DecodeError>;
