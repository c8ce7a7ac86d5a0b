//! Supplementary material model.

use serde::{Deserialize, Serialize};

/// A media attachment referenced by an article.
///
/// Only candidates that carry an actual media reference become
/// supplementary materials; captions and figures without attached media are
/// never represented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplementaryMaterial {
    /// Label text, empty if the candidate has no label node
    pub label: String,

    /// Caption title, empty if the caption has no title sub-node
    pub title: String,

    /// Caption text with the trailing size/type annotation stripped
    pub caption: String,

    /// Media type (e.g. "video")
    pub mimetype: String,

    /// Media subtype (e.g. "mpeg")
    #[serde(rename = "mime-subtype")]
    pub mime_subtype: String,

    /// Absolute URL, derived from the article's PMCID and the media node's
    /// relative reference
    pub url: String,
}

impl SupplementaryMaterial {
    /// MIME type/subtype as a single string
    pub fn mime(&self) -> String {
        format!("{}/{}", self.mimetype, self.mime_subtype)
    }
}
