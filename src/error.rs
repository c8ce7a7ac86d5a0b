//! Error types for archive streaming and metadata extraction.

/// Errors that can occur while parsing a document or extracting metadata
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// A mandatory structural node is missing from the document
    #[error("Malformed document: missing <{0}>")]
    MalformedDocument(&'static str),

    /// A supplementary-material caption contains a disallowed placeholder
    #[error("Malformed media reference: caption contains placeholder {0:?}")]
    MalformedMediaReference(String),

    /// XML is not well-formed
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value that must be decoded text arrived in another representation
    #[error("Encoding error: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// IO error (file system, archive reads)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for ExtractError {
    fn from(err: quick_xml::Error) -> Self {
        ExtractError::Parse(format!("XML: {}", err))
    }
}

impl From<quick_xml::events::attributes::AttrError> for ExtractError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        ExtractError::Parse(format!("XML attribute: {}", err))
    }
}

/// An extraction failure tagged with the archive entry it occurred in.
///
/// Per-entry failures never abort the run; the stream reports them to the
/// caller, which decides whether to skip, log, or stop.
#[derive(Debug, thiserror::Error)]
#[error("{name}: {source}")]
pub struct EntryError {
    /// Name of the offending archive entry
    pub name: String,
    /// The underlying extraction failure
    #[source]
    pub source: ExtractError,
}

impl EntryError {
    pub fn new(name: impl Into<String>, source: ExtractError) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }
}
