//! Registration-time and lookup error types.

use thiserror::Error;

/// Errors raised while registering an object type.
///
/// These stem from inconsistent static wiring of known types, not from
/// external input, and are surfaced as panics by
/// [`ObjectRegistry::must_register`](crate::registry::ObjectRegistry::must_register)
/// or returned for inspection by
/// [`ObjectRegistry::register_checked`](crate::registry::ObjectRegistry::register_checked).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("cannot register an object that doesn't have a type name")]
    MissingTypeName,
    #[error("can only register shapes that encode as mappings: {type_path}")]
    InvalidShape { type_path: &'static str },
    #[error(
        "double registration of different shapes for \"{type_name}\": \
         existing={existing}, attempted={attempted}"
    )]
    ConflictingRegistration {
        type_name: String,
        existing: &'static str,
        attempted: &'static str,
    },
}

/// Errors raised while resolving a type tag against the registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("no registered type found for object with type name: {type_name}")]
    UnknownType { type_name: String },
}
