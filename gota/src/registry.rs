//! The format registry.
//!
//! One immutable table mapping format identifiers to codecs, constructed
//! once at process start and passed explicitly into the conversion routine.

use std::collections::BTreeMap;

use crate::error::ConvertError;
use crate::format::FormatCodec;
use crate::format::json::JsonCodec;
use crate::format::yaml::YamlCodec;

/// Immutable table of format identifier → codec.
///
/// Keys are kept in a `BTreeMap` so the supported-format list in error
/// messages is deterministic.
pub struct Registry {
    codecs: BTreeMap<&'static str, Box<dyn FormatCodec>>,
}

impl Registry {
    /// Build the registry with the built-in codecs: `json`, `yaml`, and the
    /// conventional `yml` alias for YAML.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut codecs: BTreeMap<&'static str, Box<dyn FormatCodec>> = BTreeMap::new();
        codecs.insert("json", Box::new(JsonCodec));
        codecs.insert("yaml", Box::new(YamlCodec));
        codecs.insert("yml", Box::new(YamlCodec));
        Self { codecs }
    }

    /// Look up the codec for a format identifier.
    ///
    /// # Errors
    /// Returns [`ConvertError::UnsupportedFormat`] naming the identifier and
    /// the supported set if the identifier is not registered.
    pub fn lookup(&self, format: &str) -> Result<&dyn FormatCodec, ConvertError> {
        match self.codecs.get(format) {
            Some(codec) => Ok(codec.as_ref()),
            None => Err(ConvertError::UnsupportedFormat {
                format: format.to_owned(),
                supported: self.supported().join(", "),
            }),
        }
    }

    /// Registered format identifiers, in deterministic order.
    #[must_use]
    pub fn supported(&self) -> Vec<&'static str> {
        self.codecs.keys().copied().collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
