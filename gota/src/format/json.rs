//! JSON codec.
//!
//! Decodes with `serde_json`; encodes pretty-printed with a trailing
//! newline. Keys come out sorted because `serde_json::Map` is
//! order-insensitive, which makes json→json conversion a canonical
//! re-serialization of the input.

use serde_json::Value;

use super::{Document, FormatCodec, into_document};

/// Codec for JSON text.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl FormatCodec for JsonCodec {
    fn id(&self) -> &'static str {
        "json"
    }

    fn decode(&self, bytes: &[u8]) -> Result<Document, String> {
        let value: Value = serde_json::from_slice(bytes).map_err(|e| e.to_string())?;
        into_document(value)
    }

    fn encode(&self, doc: &Document) -> Result<Vec<u8>, String> {
        let mut text = serde_json::to_string_pretty(doc).map_err(|e| e.to_string())?;
        text.push('\n');
        Ok(text.into_bytes())
    }
}
