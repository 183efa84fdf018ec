//! Error types for the conversion pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the conversion pipeline.
///
/// Every variant is terminal: the pipeline never retries, and the CLI layer
/// maps variants to process exit codes. Usage-class failures
/// ([`MissingExtension`](Self::MissingExtension),
/// [`UnsupportedFormat`](Self::UnsupportedFormat)) are detected before any
/// file is touched.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// The path has no file extension, so no format can be derived.
    #[error("missing extension on path: {}", path.display())]
    MissingExtension {
        /// The offending path.
        path: PathBuf,
    },

    /// The derived format identifier is not in the registry.
    #[error("unsupported format '{format}' (supported: {supported})")]
    UnsupportedFormat {
        /// The format identifier derived from the file extension.
        format: String,
        /// Comma-separated list of registered format identifiers.
        supported: String,
    },

    /// A file read or write failed.
    #[error("unable to {action} {}: {source}", path.display())]
    Io {
        /// What was being attempted ("read" or "write").
        action: &'static str,
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The input bytes are malformed for the claimed format.
    #[error("unable to decode {format} file {}: {cause}", path.display())]
    Decode {
        /// Format identifier of the input.
        format: String,
        /// The input file.
        path: PathBuf,
        /// Human-readable description of the problem.
        cause: String,
    },

    /// The document contains values the target format cannot represent.
    #[error("unable to encode document as {format}: {cause}")]
    Encode {
        /// Format identifier of the output.
        format: String,
        /// Human-readable description of the problem.
        cause: String,
    },
}
