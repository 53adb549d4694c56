//! Surface-syntax handling: splits a buffered stream into canonical documents.
//!
//! The decoder accepts two surface syntaxes and normalizes both into
//! [`serde_json::Value`] before the typed pipeline runs:
//!
//! - JSON: a single object, an array of objects, or concatenated /
//!   newline-separated values;
//! - YAML: one or more documents separated by `---` markers.

use serde_json::Value;

use crate::error::{DecodeError, DecodeResult};

/// Detected surface syntax of an input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StreamFormat {
    Json,
    Yaml,
}

/// Sniff the surface syntax from the first non-whitespace character.
pub(crate) fn detect_format(text: &str) -> StreamFormat {
    match text.trim_start().chars().next() {
        Some('{') | Some('[') => StreamFormat::Json,
        _ => StreamFormat::Yaml,
    }
}

/// Split a buffered stream into canonical [`Value`] documents, in order.
pub(crate) fn split_documents(text: &str) -> DecodeResult<Vec<Value>> {
    match detect_format(text) {
        StreamFormat::Json => split_json_documents(text),
        StreamFormat::Yaml => split_yaml_documents(text),
    }
}

fn split_json_documents(text: &str) -> DecodeResult<Vec<Value>> {
    // A top-level array is one stream of documents, not one document.
    if text.trim_start().starts_with('[') {
        return serde_json::from_str::<Vec<Value>>(text).map_err(|err| {
            DecodeError::MalformedDocument {
                index: 0,
                reason: err.to_string(),
            }
        });
    }

    let mut documents = Vec::new();
    for item in serde_json::Deserializer::from_str(text).into_iter::<Value>() {
        let value = item.map_err(|err| DecodeError::MalformedDocument {
            index: documents.len(),
            reason: err.to_string(),
        })?;
        documents.push(value);
    }
    Ok(documents)
}

fn split_yaml_documents(text: &str) -> DecodeResult<Vec<Value>> {
    let mut documents = Vec::new();
    for source in split_yaml_sources(text) {
        let value: Value =
            serde_saphyr::from_str(&source).map_err(|err| DecodeError::MalformedDocument {
                index: documents.len(),
                reason: err.to_string(),
            })?;
        // Blank documents between separators carry no record.
        if value.is_null() {
            continue;
        }
        documents.push(value);
    }
    Ok(documents)
}

/// Split raw YAML text on document boundary markers, dropping blank documents.
fn split_yaml_sources(text: &str) -> Vec<String> {
    let mut sources = Vec::new();
    let mut current = String::new();
    for line in text.lines() {
        let marker = line.trim_end();
        if marker == "---" || marker == "..." {
            flush_source(&mut sources, &mut current);
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }
    flush_source(&mut sources, &mut current);
    sources
}

fn flush_source(sources: &mut Vec<String>, current: &mut String) {
    if current.trim().is_empty() {
        current.clear();
    } else {
        sources.push(std::mem::take(current));
    }
}
