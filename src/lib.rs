//! # objstream — typed decoding of self-describing record streams
//!
//! `objstream` decodes a stream of heterogeneous records into strongly-typed
//! objects when the concrete shape of each record is unknown until the stream
//! is read. Each record carries an embedded type tag; a registry maps tags to
//! constructors so the decoder can materialize the right type per record:
//!
//! - **Type tags**: [`TypeMeta`], the identity value embedded in every record.
//! - **Registry**: [`ObjectRegistry`], an explicit tag → constructor mapping
//!   populated once during bootstrap, with conflict detection and an
//!   idempotent re-registration path.
//! - **Two-pass decode**: an envelope pass extracts the tag, the full pass
//!   decodes the whole document into the resolved shape.
//! - **Surface syntaxes**: multi-document YAML (`---`-separated) and JSON
//!   (single object, array, or concatenated values), both normalized into a
//!   canonical structured form before typed decoding.
//!
//! # Quick Start
//!
//! ```rust
//! use objstream::{decode, register_builtin_objects, Apple, ObjectRegistry};
//!
//! let mut registry = ObjectRegistry::new();
//! register_builtin_objects(&mut registry);
//!
//! let input = "type_name: Apple\ncolor: Red\n---\ntype_name: Banana\nripe: true\n";
//! let objects = decode(input.as_bytes(), &registry).unwrap();
//!
//! assert_eq!(objects.len(), 2);
//! assert_eq!(objects[0].downcast_ref::<Apple>().unwrap().color, "Red");
//! ```
//!
//! Decoding is synchronous, single-pass over the stream, and all-or-nothing:
//! the first bad document aborts the whole operation with an error naming the
//! offending type and document position.

pub mod decode;
pub mod error;
pub mod object;
pub mod objects;
pub mod registry;

pub use crate::decode::{decode, decode_str};
pub use crate::error::{DecodeError, DecodeResult, LookupError, RegistryError, RegistryResult};
pub use crate::object::{Object, TypeMeta, TYPE_NAME_KEY};
pub use crate::objects::{
    apple_meta, banana_meta, register_builtin_objects, Apple, Banana, APPLE_TYPE_NAME,
    BANANA_TYPE_NAME,
};
pub use crate::registry::{ObjectFactory, ObjectRegistry};
