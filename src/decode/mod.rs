//! Decode pipeline: stream → raw documents → typed objects.
//!
//! Decoding is two-pass per document. The envelope pass reads only the type
//! tag, because the tag is the only way to know which concrete shape to
//! allocate; the full pass then decodes the entire document into the resolved
//! shape. The cost is parsing each document's structured form twice, traded
//! for not requiring out-of-band type hints.

pub(crate) mod reader;

use std::io::Read;

use serde_json::Value;

use crate::error::{DecodeError, DecodeResult};
use crate::object::{Object, TypeMeta, TYPE_NAME_KEY};
use crate::registry::ObjectRegistry;

/// Decode objects from a stream until EOF, resolving each document's
/// concrete shape through `registry`.
///
/// The input may be YAML (multi-document, `---`-separated) or JSON (a single
/// object, an array of objects, or concatenated values). Decoding is
/// all-or-nothing: the first error at any document aborts the whole operation
/// and no partial sequence is returned. Output order always matches document
/// order in the stream; an empty stream yields an empty sequence.
pub fn decode(mut stream: impl Read, registry: &ObjectRegistry) -> DecodeResult<Vec<Box<dyn Object>>> {
    let mut buffer = String::new();
    stream.read_to_string(&mut buffer)?;
    decode_str(&buffer, registry)
}

/// Decode objects from already-buffered text. See [`decode`].
pub fn decode_str(text: &str, registry: &ObjectRegistry) -> DecodeResult<Vec<Box<dyn Object>>> {
    let documents = reader::split_documents(text)?;
    let mut objects: Vec<Box<dyn Object>> = Vec::with_capacity(documents.len());

    for (index, document) in documents.into_iter().enumerate() {
        let meta = envelope(&document, index)?;

        let factory = registry
            .resolve(&meta)
            .map_err(|_| DecodeError::UnknownType {
                index,
                type_name: meta.type_name.clone(),
            })?;

        let object = factory
            .deserialize(document)
            .map_err(|err| DecodeError::FieldDecodeError {
                index,
                type_name: meta.type_name.clone(),
                reason: err.to_string(),
            })?;

        tracing::debug!(index, type_name = %meta.type_name, "decoded document");
        objects.push(object);
    }

    Ok(objects)
}

/// Envelope pass: read only the type tag out of a canonical document.
fn envelope(document: &Value, index: usize) -> DecodeResult<TypeMeta> {
    if !document.is_object() {
        return Err(DecodeError::MalformedDocument {
            index,
            reason: format!("expected a mapping with a \"{TYPE_NAME_KEY}\" field"),
        });
    }
    serde_json::from_value(document.clone()).map_err(|err| DecodeError::MalformedDocument {
        index,
        reason: err.to_string(),
    })
}
