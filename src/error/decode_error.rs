//! Decode-time error types.

use thiserror::Error;

/// Errors raised while decoding an object stream.
///
/// Every variant aborts the whole decode; no partial sequence is returned.
/// `index` is the zero-based position of the offending document within the
/// stream.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unable to read stream: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed document at index {index}: {reason}")]
    MalformedDocument { index: usize, reason: String },
    #[error("no registered type found for object with type name \"{type_name}\" (document {index})")]
    UnknownType { index: usize, type_name: String },
    #[error("unable to decode fields of \"{type_name}\" (document {index}): {reason}")]
    FieldDecodeError {
        index: usize,
        type_name: String,
        reason: String,
    },
}
