//! # gota
//!
//! Converts a structured data file from one serialization format to another,
//! inferring formats from file extensions.
//!
//! The crate is built around three pieces:
//!
//! - [`FormatCodec`] — one decode/encode implementation per supported format.
//! - [`Registry`] — the immutable format table, constructed once at startup
//!   and passed explicitly to the conversion routine.
//! - [`convert`] — the read → decode → re-encode → write pipeline.
//!
//! The format-agnostic intermediate representation is a [`Document`]: a
//! mapping from string keys to arbitrary nested values.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use gota::{Registry, convert};
//!
//! let registry = Registry::with_defaults();
//! let encoded = convert(
//!     &registry,
//!     Path::new("config.json"),
//!     Path::new("config.yaml"),
//! )
//! .unwrap();
//! println!("{}", String::from_utf8_lossy(&encoded));
//! ```

mod convert;
mod error;
pub mod format;
mod registry;

// Re-export commonly used types
pub use convert::convert;
pub use error::ConvertError;
pub use format::{Document, FormatCodec};
pub use registry::Registry;
