//! Core data structures for extracted article records.

mod article;
mod supplement;

pub use article::{ArticleDocument, PubDate};
pub use supplement::SupplementaryMaterial;
