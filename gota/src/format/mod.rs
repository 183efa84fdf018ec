//! Format identifiers and codecs.
//!
//! A format identifier is the lowercased file extension without the leading
//! dot (`json`, `yaml`, `yml`). Each supported format implements
//! [`FormatCodec`], turning raw bytes into a [`Document`] and back.

pub mod json;
pub mod yaml;

use std::path::Path;

use serde_json::Value;

use crate::error::ConvertError;

/// The format-agnostic intermediate representation: a mapping from string
/// keys to arbitrary nested values (`serde_json::Value` is the tagged
/// variant — Null | Bool | Number | String | Array | Object).
pub type Document = serde_json::Map<String, Value>;

/// A decode/encode pair for one serialization format.
///
/// Codec methods return a plain `String` cause on failure; the conversion
/// pipeline wraps causes into [`ConvertError::Decode`] /
/// [`ConvertError::Encode`] together with format and path context, which the
/// codec itself does not know.
///
/// `Debug` is a supertrait so boxed codecs (and `Result`s holding them)
/// stay debug-formattable in tests and error paths.
pub trait FormatCodec: std::fmt::Debug {
    /// Canonical format identifier (e.g., `"json"`).
    fn id(&self) -> &'static str;

    /// Decode raw bytes into a [`Document`].
    ///
    /// # Errors
    /// Returns a human-readable cause if the bytes are malformed for this
    /// format or the top-level value is not a mapping.
    fn decode(&self, bytes: &[u8]) -> Result<Document, String>;

    /// Encode a [`Document`] into this format's textual representation.
    ///
    /// # Errors
    /// Returns a human-readable cause if the document contains values this
    /// format cannot represent.
    fn encode(&self, doc: &Document) -> Result<Vec<u8>, String>;
}

/// Derive a format identifier from a file path's extension, lowercased.
///
/// # Errors
/// Returns [`ConvertError::MissingExtension`] if the path has no extension
/// or the extension is not valid UTF-8.
pub fn from_path(path: &Path) -> Result<String, ConvertError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if !ext.is_empty() => Ok(ext.to_ascii_lowercase()),
        _ => Err(ConvertError::MissingExtension {
            path: path.to_owned(),
        }),
    }
}

/// Require the decoded top-level value to be a mapping.
///
/// Shared by all codecs so that a top-level sequence or scalar produces the
/// same cause regardless of input format.
pub(crate) fn into_document(value: Value) -> Result<Document, String> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(format!(
            "top-level value must be a mapping, got {}",
            value_kind(&other)
        )),
    }
}

/// Human-readable name for a value's variant, used in decode causes.
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_path_simple_extension() {
        assert_eq!(from_path(Path::new("data.json")).unwrap(), "json");
        assert_eq!(from_path(Path::new("dir/data.yaml")).unwrap(), "yaml");
    }

    #[test]
    fn test_from_path_lowercases() {
        assert_eq!(from_path(Path::new("DATA.JSON")).unwrap(), "json");
        assert_eq!(from_path(Path::new("data.Yaml")).unwrap(), "yaml");
    }

    #[test]
    fn test_from_path_uses_last_extension() {
        assert_eq!(from_path(Path::new("backup.tar.json")).unwrap(), "json");
    }

    #[test]
    fn test_from_path_no_extension() {
        let err = from_path(Path::new("Makefile")).unwrap_err();
        assert!(matches!(err, ConvertError::MissingExtension { .. }));
    }

    #[test]
    fn test_from_path_hidden_file_has_no_extension() {
        // ".bashrc" is a file name, not an extension
        let err = from_path(Path::new(".bashrc")).unwrap_err();
        assert!(matches!(err, ConvertError::MissingExtension { .. }));
    }

    #[test]
    fn test_into_document_accepts_mapping() {
        let doc = into_document(json!({"hi": true})).unwrap();
        assert_eq!(doc.get("hi"), Some(&json!(true)));
    }

    #[test]
    fn test_into_document_rejects_sequence() {
        let cause = into_document(json!([1, 2, 3])).unwrap_err();
        assert!(cause.contains("must be a mapping"), "got: {cause}");
        assert!(cause.contains("a sequence"), "got: {cause}");
    }

    #[test]
    fn test_into_document_rejects_scalar() {
        let cause = into_document(json!(42)).unwrap_err();
        assert!(cause.contains("a number"), "got: {cause}");
    }
}
