//! Supplementary-material extraction.
//!
//! Candidates come from two node kinds: explicit supplementary-material
//! nodes and inline figures, since some publishers attach multimedia as
//! figures. A candidate without an actual media reference yields nothing.

use crate::error::ExtractError;
use crate::models::SupplementaryMaterial;
use crate::xml::{strip_whitespace, Element};

const MATERIAL_URL_BASE: &str = "http://www.ncbi.nlm.nih.gov/pmc/articles/PMC";
const MATERIAL_URL_BIN: &str = "/bin/";

/// Caption phrases that indicate the source emitted navigation boilerplate
/// instead of a caption; such a document is a data-quality violation.
const CAPTION_PLACEHOLDER: &str = "Click here";

/// Extract all supplementary materials of an article, in document order:
/// explicit supplementary-material nodes first, then figures.
pub fn supplementary_materials(
    article: &Element,
) -> Result<Vec<SupplementaryMaterial>, ExtractError> {
    let pmcid = super::pmcid(
        article
            .find("front")
            .ok_or(ExtractError::MalformedDocument("front"))?,
    );

    let mut materials = Vec::new();
    for node in article.descendants_named("supplementary-material") {
        if let Some(material) = candidate(pmcid.as_deref(), node)? {
            materials.push(material);
        }
    }
    for node in article.descendants_named("fig") {
        if let Some(material) = candidate(pmcid.as_deref(), node)? {
            materials.push(material);
        }
    }
    Ok(materials)
}

fn candidate(
    pmcid: Option<&str>,
    node: &Element,
) -> Result<Option<SupplementaryMaterial>, ExtractError> {
    let label = node
        .find("label")
        .map(Element::direct_text)
        .unwrap_or_default();

    let title = node
        .find("caption/title")
        .map(|title| strip_whitespace(&title.texts().join(" ")))
        .unwrap_or_default();

    let caption = node
        .find("caption")
        .map(caption_text)
        .transpose()?
        .unwrap_or_default();

    let media = match node.find("media") {
        Some(media) => media,
        None => return Ok(None),
    };

    let (mimetype, mime_subtype) = match (media.attr("mimetype"), media.attr("mime-subtype")) {
        (Some(mimetype), Some(mime_subtype)) => (mimetype.to_string(), mime_subtype.to_string()),
        _ => (String::new(), String::new()),
    };

    let href = media
        .attr("xlink:href")
        .ok_or(ExtractError::MalformedDocument("media/@xlink:href"))?;
    let pmcid = pmcid.ok_or(ExtractError::MalformedDocument("article-id"))?;

    Ok(Some(SupplementaryMaterial {
        label,
        title,
        caption,
        mimetype,
        mime_subtype,
        url: material_url(pmcid, href),
    }))
}

/// Caption text: all caption sub-nodes except the title, flattened and
/// joined by newline. A trailing parenthesised line is file size/type
/// boilerplate (e.g. "(1.3 MB MPG)"), not caption content, and is dropped.
fn caption_text(caption: &Element) -> Result<String, ExtractError> {
    let parts: Vec<String> = caption
        .children()
        .filter(|child| child.tag() != "title")
        .map(Element::text)
        .collect();
    let mut text = strip_whitespace(&parts.join("\n"));

    if let Some(last_line) = text.lines().last() {
        if last_line.starts_with('(') && last_line.ends_with(')') {
            let lines: Vec<&str> = text.lines().collect();
            text = lines[..lines.len() - 1].join(" ");
        }
    }

    if text.contains(CAPTION_PLACEHOLDER) {
        return Err(ExtractError::MalformedMediaReference(
            CAPTION_PLACEHOLDER.to_string(),
        ));
    }
    Ok(text)
}

/// Absolute URL for a material: base path, PMCID, bin segment and the
/// media node's relative reference, concatenated with no normalization. A
/// malformed relative reference propagates into a malformed URL unchanged.
fn material_url(pmcid: &str, href: &str) -> String {
    format!("{}{}{}{}", MATERIAL_URL_BASE, pmcid, MATERIAL_URL_BIN, href)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(body: &str) -> Element {
        let xml = format!(
            r#"<article xmlns:xlink="http://www.w3.org/1999/xlink">
                 <front><article-meta><article-id pub-id-type="pmc">2559997</article-id></article-meta></front>
                 <body>{}</body>
               </article>"#,
            body
        );
        Element::parse(xml.as_bytes()).unwrap()
    }

    #[test]
    fn test_material_with_size_annotation_stripped() {
        let doc = article(
            r#"<supplementary-material>
                 <label>Additional file 1</label>
                 <caption>
                   <title>Movie 1</title>
                   <p>A single adult female worm.</p>
                   <p>(1.3 MB MPG)</p>
                 </caption>
                 <media mimetype="video" mime-subtype="mpeg" xlink:href="1756-3305-1-29-S1.mpg"/>
               </supplementary-material>"#,
        );
        let materials = supplementary_materials(&doc).unwrap();
        assert_eq!(materials.len(), 1);
        let material = &materials[0];
        assert_eq!(material.label, "Additional file 1");
        assert_eq!(material.title, "Movie 1");
        assert_eq!(material.caption, "A single adult female worm.");
        assert_eq!(material.mimetype, "video");
        assert_eq!(material.mime_subtype, "mpeg");
        assert_eq!(material.mime(), "video/mpeg");
        assert_eq!(
            material.url,
            "http://www.ncbi.nlm.nih.gov/pmc/articles/PMC2559997/bin/1756-3305-1-29-S1.mpg"
        );
    }

    #[test]
    fn test_multiline_caption_joined_with_spaces() {
        let doc = article(
            r#"<supplementary-material>
                 <caption>
                   <p>Adult worms in culture.</p>
                   <p>Recorded over six hours.</p>
                   <p>(2.5 MB AVI)</p>
                 </caption>
                 <media mimetype="video" mime-subtype="avi" xlink:href="worms.avi"/>
               </supplementary-material>"#,
        );
        let materials = supplementary_materials(&doc).unwrap();
        assert_eq!(
            materials[0].caption,
            "Adult worms in culture. Recorded over six hours."
        );
    }

    #[test]
    fn test_candidate_without_media_yields_nothing() {
        let doc = article(
            r#"<fig><caption><p>Just a figure caption.</p></caption><graphic/></fig>"#,
        );
        assert!(supplementary_materials(&doc).unwrap().is_empty());
    }

    #[test]
    fn test_figures_with_media_are_candidates() {
        let doc = article(
            r#"<fig>
                 <caption><p>Video attached as a figure.</p></caption>
                 <media mimetype="video" mime-subtype="mp4" xlink:href="pone.0001.s001.mp4"/>
               </fig>"#,
        );
        let materials = supplementary_materials(&doc).unwrap();
        assert_eq!(materials.len(), 1);
        assert_eq!(materials[0].label, "");
        assert_eq!(materials[0].caption, "Video attached as a figure.");
    }

    #[test]
    fn test_placeholder_caption_is_malformed() {
        let doc = article(
            r#"<supplementary-material>
                 <caption><p>Click here for additional data file.</p></caption>
                 <media mimetype="video" mime-subtype="mpeg" xlink:href="x.mpg"/>
               </supplementary-material>"#,
        );
        assert!(matches!(
            supplementary_materials(&doc),
            Err(ExtractError::MalformedMediaReference(_))
        ));
    }

    #[test]
    fn test_missing_mime_attributes_default_to_empty() {
        let doc = article(
            r#"<supplementary-material>
                 <caption><p>No mime info.</p></caption>
                 <media xlink:href="data.avi"/>
               </supplementary-material>"#,
        );
        let materials = supplementary_materials(&doc).unwrap();
        assert_eq!(materials[0].mimetype, "");
        assert_eq!(materials[0].mime_subtype, "");
    }

    #[test]
    fn test_malformed_reference_propagates_unnormalized() {
        let doc = article(
            r#"<supplementary-material>
                 <media mimetype="video" mime-subtype="mpeg" xlink:href="../escape path.mpg"/>
               </supplementary-material>"#,
        );
        let materials = supplementary_materials(&doc).unwrap();
        assert_eq!(
            materials[0].url,
            "http://www.ncbi.nlm.nih.gov/pmc/articles/PMC2559997/bin/../escape path.mpg"
        );
    }
}
