//! The conversion pipeline.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ConvertError;
use crate::format;
use crate::registry::Registry;

/// Convert the file at `input` into the format derived from `output`'s
/// extension, writing the result to `output`.
///
/// Returns the encoded bytes so the caller can echo them (the CLI prints
/// them to stdout). Usage-class failures (missing extension, unsupported
/// format) are detected for both paths before any file is touched, input
/// side first. On decode failure nothing is written — there is no
/// partial-success state.
///
/// # Errors
/// Returns [`ConvertError`] on the first failing pipeline step:
/// format derivation, codec lookup, read, decode, encode, or write.
pub fn convert(registry: &Registry, input: &Path, output: &Path) -> Result<Vec<u8>, ConvertError> {
    let from = format::from_path(input)?;
    let to = format::from_path(output)?;
    let decoder = registry.lookup(&from)?;
    let encoder = registry.lookup(&to)?;
    debug!(from = %from, to = %to, "resolved codecs");

    let bytes = fs::read(input).map_err(|source| ConvertError::Io {
        action: "read",
        path: input.to_owned(),
        source,
    })?;
    debug!(bytes = bytes.len(), input = %input.display(), "read input");

    let doc = decoder.decode(&bytes).map_err(|cause| ConvertError::Decode {
        format: from.clone(),
        path: input.to_owned(),
        cause,
    })?;
    debug!(keys = doc.len(), "decoded document");

    let encoded = encoder.encode(&doc).map_err(|cause| ConvertError::Encode {
        format: to.clone(),
        cause,
    })?;

    fs::write(output, &encoded).map_err(|source| ConvertError::Io {
        action: "write",
        path: output.to_owned(),
        source,
    })?;
    debug!(bytes = encoded.len(), output = %output.display(), "wrote output");

    Ok(encoded)
}
