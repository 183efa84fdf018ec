//! YAML codec.
//!
//! Decodes with `serde-saphyr` (safe YAML parsing, no arbitrary tag
//! resolution); encodes block-style with `serde_yaml`. A multi-document
//! stream is a decode failure — the pipeline converts exactly one document.

use serde_json::Value;

use super::{Document, FormatCodec, into_document};

/// Codec for YAML text.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlCodec;

impl FormatCodec for YamlCodec {
    fn id(&self) -> &'static str {
        "yaml"
    }

    fn decode(&self, bytes: &[u8]) -> Result<Document, String> {
        let text = std::str::from_utf8(bytes).map_err(|_| "input is not valid UTF-8".to_owned())?;
        let value: Value = serde_saphyr::from_str(text).map_err(|e| e.to_string())?;
        into_document(value)
    }

    fn encode(&self, doc: &Document) -> Result<Vec<u8>, String> {
        let text = serde_yaml::to_string(doc).map_err(|e| e.to_string())?;
        Ok(text.into_bytes())
    }
}
