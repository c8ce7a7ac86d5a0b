//! # Open Access Media Importer
//!
//! Extracts article metadata, licensing, and supplementary multimedia
//! references from bulk archives of scholarly article XML.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (ArticleDocument, SupplementaryMaterial)
//! - [`archive`]: Lazy streaming over gzip-compressed tar archive volumes
//! - [`xml`]: Tree-query layer over the XML event parser
//! - [`extract`]: Metadata extraction and the license resolution chain
//! - [`config`]: Configuration management

pub mod archive;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod xml;

// Re-export commonly used types
pub use archive::ArticleStream;
pub use error::{EntryError, ExtractError};
pub use extract::Licensing;
pub use models::{ArticleDocument, SupplementaryMaterial};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
