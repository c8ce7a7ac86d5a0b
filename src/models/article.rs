//! Article record model: the structured output of the extraction pipeline.

use serde::{Deserialize, Serialize};

use crate::models::SupplementaryMaterial;

/// Publication date of an article.
///
/// Month and day are optional; a missing month forces the day to be absent
/// as well, even if the source document carries a day node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PubDate {
    pub year: u32,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl PubDate {
    /// Create a publication date, enforcing that a day without a month is
    /// dropped.
    pub fn new(year: u32, month: Option<u32>, day: Option<u32>) -> Self {
        Self {
            year,
            month,
            day: month.and(day),
        }
    }
}

/// A scholarly article extracted from one archive entry.
///
/// This struct is the contract with downstream collaborators (template
/// rendering, media transcoding); the serialized field names follow the
/// established record layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDocument {
    /// Digital Object Identifier, if the document declares one
    pub doi: Option<String>,

    /// Citation author string, comma-separated ("Surname I, Surname I")
    #[serde(rename = "article-contrib-authors")]
    pub authors: String,

    /// Article title
    #[serde(rename = "article-title")]
    pub title: String,

    /// Abstract text, whitespace-normalized
    #[serde(rename = "article-abstract")]
    pub r#abstract: Option<String>,

    /// Journal title, truncated before the first colon
    #[serde(rename = "journal-title")]
    pub journal_title: Option<String>,

    /// Publication year
    #[serde(rename = "article-year")]
    pub year: u32,

    /// Publication month, if given
    #[serde(rename = "article-month")]
    pub month: Option<u32>,

    /// Publication day, if given (absent whenever the month is absent)
    #[serde(rename = "article-day")]
    pub day: Option<u32>,

    /// Canonical article URL, derived from the DOI
    #[serde(rename = "article-url")]
    pub url: Option<String>,

    /// Canonical license URL, if resolution succeeded
    #[serde(rename = "article-license-url")]
    pub license_url: Option<String>,

    /// Raw license statement text, preserved regardless of resolution
    #[serde(rename = "article-license-text")]
    pub license_text: Option<String>,

    /// Raw copyright statement text, preserved regardless of resolution
    #[serde(rename = "article-copyright-statement")]
    pub copyright_statement: Option<String>,

    /// Copyright holder, if stated
    #[serde(rename = "article-copyright-holder")]
    pub copyright_holder: Option<String>,

    /// Category and keyword terms, subjects first
    #[serde(rename = "article-categories")]
    pub categories: Vec<String>,

    /// Attached media descriptors
    #[serde(rename = "supplementary-materials", default)]
    pub supplementary_materials: Vec<SupplementaryMaterial>,
}

impl ArticleDocument {
    /// Returns the primary identifier for this article (DOI if available,
    /// else the title)
    pub fn primary_id(&self) -> &str {
        self.doi.as_deref().unwrap_or(&self.title)
    }

    /// Returns the citation author names as a vector
    pub fn author_list(&self) -> Vec<&str> {
        self.authors
            .split(',')
            .map(str::trim)
            .filter(|author| !author.is_empty())
            .collect()
    }

    /// Publication date as a single value
    pub fn date(&self) -> PubDate {
        PubDate {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }

    /// Whether the resolved license permits republication
    pub fn has_free_license(&self) -> bool {
        self.license_url
            .as_deref()
            .is_some_and(crate::extract::license::is_free_license)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pub_date_month_gates_day() {
        let date = PubDate::new(2008, None, Some(17));
        assert_eq!(date, PubDate { year: 2008, month: None, day: None });

        let date = PubDate::new(2008, Some(6), Some(17));
        assert_eq!(date.day, Some(17));
    }

    #[test]
    fn test_author_list() {
        let article = sample();
        assert_eq!(article.author_list(), vec!["Behnke J", "Buttle D"]);
    }

    #[test]
    fn test_serialized_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["article-contrib-authors"], "Behnke J, Buttle D");
        assert_eq!(value["article-year"], 2008);
        assert!(value["article-month"].is_null());
        assert_eq!(value["article-url"], "http://dx.doi.org/10.1186/1756-3305-1-29");
    }

    fn sample() -> ArticleDocument {
        ArticleDocument {
            doi: Some("10.1186/1756-3305-1-29".to_string()),
            authors: "Behnke J, Buttle D".to_string(),
            title: "Developing novel anthelmintics".to_string(),
            r#abstract: None,
            journal_title: Some("Parasites & Vectors".to_string()),
            year: 2008,
            month: None,
            day: None,
            url: Some("http://dx.doi.org/10.1186/1756-3305-1-29".to_string()),
            license_url: None,
            license_text: None,
            copyright_statement: None,
            copyright_holder: None,
            categories: Vec::new(),
            supplementary_materials: Vec::new(),
        }
    }
}
