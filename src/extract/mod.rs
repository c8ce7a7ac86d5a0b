//! Metadata extraction: pure queries over a parsed article tree.
//!
//! Every bibliographic field is derived by an independent query; only the
//! publication date is mandatory, everything else degrades to an absent or
//! empty value. License resolution and supplementary-material extraction
//! live in their own submodules.

pub mod license;
mod license_tables;
mod supplement;

pub use license::Licensing;
pub use supplement::supplementary_materials;

use crate::error::ExtractError;
use crate::models::{ArticleDocument, PubDate};
use crate::xml::{strip_whitespace, Element};

const DOI_URL_BASE: &str = "http://dx.doi.org/";

/// Extract one complete article record from a parsed document tree.
///
/// Fails with [`ExtractError::MalformedDocument`] when a mandatory
/// structural node is missing; such a failure is fatal for this document
/// only, never for the whole run.
pub fn extract_article(
    root: &Element,
    with_supplementary: bool,
) -> Result<ArticleDocument, ExtractError> {
    let article = if root.tag() == "article" {
        root
    } else {
        root.find_descendant("article")
            .ok_or(ExtractError::MalformedDocument("article"))?
    };
    let front = article
        .find("front")
        .ok_or(ExtractError::MalformedDocument("front"))?;

    let date = publication_date(article)?;
    let licensing = license::resolve(article);
    let doi = doi(front);

    Ok(ArticleDocument {
        url: doi.as_deref().map(|doi| format!("{}{}", DOI_URL_BASE, doi)),
        doi,
        authors: contrib_authors(front),
        title: title(article)?,
        r#abstract: abstract_text(article),
        journal_title: journal_title(front),
        year: date.year,
        month: date.month,
        day: date.day,
        license_url: licensing.url,
        license_text: licensing.text,
        copyright_statement: licensing.copyright_statement,
        copyright_holder: copyright_holder(article),
        categories: categories(article),
        supplementary_materials: if with_supplementary {
            supplement::supplementary_materials(article)?
        } else {
            Vec::new()
        },
    })
}

/// DOI from the identifier node typed as such; absent is not an error.
fn doi(front: &Element) -> Option<String> {
    front
        .descendants_named("article-id")
        .find(|id| id.attr("pub-id-type") == Some("doi"))
        .map(|id| id.text())
        .filter(|doi| !doi.is_empty())
}

/// PMCID, used to build absolute supplementary-material URLs.
pub(crate) fn pmcid(front: &Element) -> Option<String> {
    front
        .descendants_named("article-id")
        .find(|id| id.attr("pub-id-type") == Some("pmc"))
        .map(|id| id.text())
        .filter(|pmcid| !pmcid.is_empty())
}

/// Citation author string: "Surname I" per person contributor, the
/// collaborative name for organizational contributors, comma-joined in
/// source order. Contributors with no usable name are silently skipped.
fn contrib_authors(front: &Element) -> String {
    let mut authors: Vec<String> = Vec::new();
    for contrib in front.descendants_named("contrib") {
        if contrib.attr("contrib-type") != Some("author") {
            continue;
        }
        match contrib.find("name/surname") {
            Some(surname) => {
                let surname = surname.text();
                if surname.is_empty() {
                    continue;
                }
                let initial = contrib
                    .find("name/given-names")
                    .and_then(|given| given.text().chars().next());
                match initial {
                    Some(initial) => authors.push(format!("{} {}", surname, initial)),
                    None => authors.push(surname),
                }
            }
            None => {
                // not a natural person; use the collaboration name if any
                if let Some(collab) = contrib.find("collab") {
                    let name = collab.direct_text();
                    if !name.is_empty() {
                        authors.push(name);
                    }
                }
            }
        }
    }
    authors.join(", ")
}

/// Primary title, falling back to the first category subject for publishers
/// that omit the title node.
fn title(article: &Element) -> Result<String, ExtractError> {
    article
        .find("front/article-meta/title-group/article-title")
        .or_else(|| article.find("front/article-meta/article-categories/subj-group/subject"))
        .map(|title| title.text())
        .ok_or(ExtractError::MalformedDocument("article-title"))
}

/// First abstract without a type attribute; typed abstracts are
/// table-of-contents or summary variants and are excluded.
fn abstract_text(article: &Element) -> Option<String> {
    article
        .descendants_named("abstract")
        .find(|node| !node.has_attr("abstract-type"))
        .map(|node| strip_whitespace(&node.text()))
}

/// Journal title up to the first colon, with two known alternate
/// capitalizations of the PLOS acronym normalized.
fn journal_title(front: &Element) -> Option<String> {
    let journal_meta = front.find_descendant("journal-meta")?;
    let title = journal_meta.find_descendant("journal-title")?.text();
    let title = title.split(':').next().unwrap_or("").trim();
    Some(title.replace("PLoS", "PLOS").replace("PloS", "PLOS"))
}

/// Publication date from the first pub-date node. A document without one is
/// malformed; a missing month forces the day to be absent.
fn publication_date(article: &Element) -> Result<PubDate, ExtractError> {
    let article_meta = article
        .find("front/article-meta")
        .ok_or(ExtractError::MalformedDocument("article-meta"))?;
    let pub_date = article_meta
        .find_descendant("pub-date")
        .ok_or(ExtractError::MalformedDocument("pub-date"))?;

    let year = pub_date
        .find("year")
        .and_then(|year| year.text().trim().parse().ok())
        .ok_or(ExtractError::MalformedDocument("year"))?;
    let month = pub_date
        .find("month")
        .and_then(|month| month.text().trim().parse().ok());
    let day = pub_date
        .find("day")
        .and_then(|day| day.text().trim().parse().ok());

    Ok(PubDate::new(year, month, day))
}

/// Subject terms from non-heading groups, filtered and deduplicated, then
/// all keyword terms unconditionally.
fn categories(article: &Element) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();

    if let Some(article_categories) = article.find_descendant("article-categories") {
        for subj_group in article_categories.descendants_named("subj-group") {
            if subj_group.attr("subj-group-type") == Some("heading") {
                continue;
            }
            for subject in subj_group.descendants_named("subject") {
                let text = subject.direct_text();
                if text.is_empty() {
                    continue;
                }
                // slash-separated hierarchies contribute their leaf only
                let term = text.rsplit('/').next().unwrap_or(&text).to_string();
                let keep = term.contains(' ')
                    && !term.split_whitespace().any(|word| word == "and")
                    && !categories.contains(&term);
                if keep {
                    categories.push(term);
                }
            }
        }
    }

    // keywords bypass the subject filter and are not deduplicated
    if let Some(kwd_group) = article.find_descendant("kwd-group") {
        for keyword in kwd_group.descendants_named("kwd") {
            let text = keyword.direct_text();
            if !text.is_empty() {
                categories.push(text);
            }
        }
    }

    categories
}

/// Copyright holder: an explicit holder node, else the first sentence of
/// the copyright statement.
fn copyright_holder(article: &Element) -> Option<String> {
    if let Some(holder) = article.find("front/article-meta/permissions/copyright-holder") {
        let holder = holder.direct_text();
        if !holder.is_empty() {
            return Some(holder);
        }
    }
    let statement = article.find_descendant("copyright-statement")?.direct_text();
    if statement.is_empty() {
        return None;
    }
    Some(format!(
        "{}.",
        statement.split('.').next().unwrap_or_default()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> Element {
        Element::parse(xml.as_bytes()).unwrap()
    }

    fn article_with_meta(meta: &str) -> Element {
        parse(&format!(
            r#"<article xmlns:xlink="http://www.w3.org/1999/xlink"><front><article-meta>{}</article-meta></front></article>"#,
            meta
        ))
    }

    const PUB_DATE_2008: &str = "<pub-date><year>2008</year></pub-date>";

    #[test]
    fn test_person_contributor_citation_name() {
        let doc = article_with_meta(
            r#"<contrib-group>
                 <contrib contrib-type="author"><name><surname>Behnke</surname><given-names>J</given-names></name></contrib>
               </contrib-group>"#,
        );
        assert_eq!(contrib_authors(doc.find("front").unwrap()), "Behnke J");
    }

    #[test]
    fn test_contributors_in_source_order() {
        let doc = article_with_meta(
            r#"<contrib-group>
                 <contrib contrib-type="author"><name><surname>Behnke</surname><given-names>Jerzy</given-names></name></contrib>
                 <contrib contrib-type="author"><collab>The Helminth Consortium</collab></contrib>
                 <contrib contrib-type="editor"><name><surname>Ignored</surname></name></contrib>
                 <contrib contrib-type="author"><name><surname>Duce</surname></name></contrib>
               </contrib-group>"#,
        );
        assert_eq!(
            contrib_authors(doc.find("front").unwrap()),
            "Behnke J, The Helminth Consortium, Duce"
        );
    }

    #[test]
    fn test_contributor_without_usable_name_is_skipped() {
        let doc = article_with_meta(
            r#"<contrib-group>
                 <contrib contrib-type="author"><xref/></contrib>
                 <contrib contrib-type="author"><name><surname>Lowe</surname><given-names>A</given-names></name></contrib>
               </contrib-group>"#,
        );
        assert_eq!(contrib_authors(doc.find("front").unwrap()), "Lowe A");
    }

    #[test]
    fn test_date_variants() {
        let year_only = article_with_meta("<pub-date><year>2008</year></pub-date>");
        assert_eq!(
            publication_date(&year_only).unwrap(),
            PubDate { year: 2008, month: None, day: None }
        );

        let year_month = article_with_meta("<pub-date><year>2008</year><month>6</month></pub-date>");
        assert_eq!(
            publication_date(&year_month).unwrap(),
            PubDate { year: 2008, month: Some(6), day: None }
        );

        let full = article_with_meta(
            "<pub-date><year>2008</year><month>6</month><day>17</day></pub-date>",
        );
        assert_eq!(
            publication_date(&full).unwrap(),
            PubDate { year: 2008, month: Some(6), day: Some(17) }
        );
    }

    #[test]
    fn test_day_without_month_is_dropped() {
        let doc = article_with_meta("<pub-date><year>2008</year><day>17</day></pub-date>");
        assert_eq!(
            publication_date(&doc).unwrap(),
            PubDate { year: 2008, month: None, day: None }
        );
    }

    #[test]
    fn test_missing_pub_date_is_malformed() {
        let doc = article_with_meta("<title-group><article-title>x</article-title></title-group>");
        assert!(matches!(
            publication_date(&doc),
            Err(ExtractError::MalformedDocument("pub-date"))
        ));
    }

    #[test]
    fn test_title_falls_back_to_first_subject() {
        let doc = article_with_meta(
            r#"<article-categories><subj-group><subject>Case Report</subject></subj-group></article-categories>"#,
        );
        assert_eq!(title(&doc).unwrap(), "Case Report");
    }

    #[test]
    fn test_abstract_skips_typed_variants() {
        let doc = article_with_meta(
            r#"<abstract abstract-type="toc">short toc</abstract>
               <abstract>
                 Real abstract text.
               </abstract>"#,
        );
        assert_eq!(abstract_text(&doc).as_deref(), Some("Real abstract text."));
    }

    #[test]
    fn test_journal_title_normalization() {
        let doc = parse(
            r#"<article><front><journal-meta><journal-title>PLoS ONE : a journal</journal-title></journal-meta></front></article>"#,
        );
        assert_eq!(
            journal_title(doc.find("front").unwrap()).as_deref(),
            Some("PLOS ONE")
        );
    }

    #[test]
    fn test_doi_and_canonical_url() {
        let doc = article_with_meta(&format!(
            r#"<article-id pub-id-type="pmc">2559997</article-id>
               <article-id pub-id-type="doi">10.1186/1756-3305-1-29</article-id>
               <title-group><article-title>T</article-title></title-group>
               {}"#,
            PUB_DATE_2008
        ));
        let record = extract_article(&doc, false).unwrap();
        assert_eq!(record.doi.as_deref(), Some("10.1186/1756-3305-1-29"));
        assert_eq!(
            record.url.as_deref(),
            Some("http://dx.doi.org/10.1186/1756-3305-1-29")
        );
    }

    #[test]
    fn test_categories_filter_subjects_but_not_keywords() {
        let doc = article_with_meta(
            r#"<article-categories>
                 <subj-group subj-group-type="heading"><subject>Skipped Heading</subject></subj-group>
                 <subj-group>
                   <subject>Parasitology</subject>
                   <subject>Infectious Diseases</subject>
                   <subject>Ecology and Evolution</subject>
                   <subject>Infectious Diseases</subject>
                   <subject>Biology/Infectious Diseases of Livestock</subject>
                 </subj-group>
               </article-categories>
               <kwd-group><kwd>anthelmintics</kwd><kwd>cysteine proteinases</kwd></kwd-group>"#,
        );
        let categories = categories(&doc);
        assert_eq!(
            categories,
            vec![
                "Infectious Diseases",
                "Infectious Diseases of Livestock",
                "anthelmintics",
                "cysteine proteinases",
            ]
        );
    }

    #[test]
    fn test_copyright_holder_first_sentence_fallback() {
        let explicit = article_with_meta(
            r#"<permissions><copyright-holder>Behnke et al</copyright-holder></permissions>"#,
        );
        assert_eq!(copyright_holder(&explicit).as_deref(), Some("Behnke et al"));

        let fallback = article_with_meta(
            r#"<permissions><copyright-statement>Copyright 2008 Behnke et al; licensee BioMed Central Ltd. All rights reserved.</copyright-statement></permissions>"#,
        );
        assert_eq!(
            copyright_holder(&fallback).as_deref(),
            Some("Copyright 2008 Behnke et al; licensee BioMed Central Ltd.")
        );
    }

    #[test]
    fn test_missing_front_is_malformed() {
        let doc = parse("<article><body/></article>");
        assert!(matches!(
            extract_article(&doc, false),
            Err(ExtractError::MalformedDocument("front"))
        ));
    }
}
