//! License resolution: an ordered four-stage fallback chain.
//!
//! A machine-readable link is the most reliable signal; free-text license
//! statements are a weaker but article-specific signal; copyright-statement
//! boilerplate is shared across many unrelated articles and is the weakest,
//! last-resort signal. Each stage runs only if the prior stages produced no
//! URL, and every output URL is traceable to the raw extracted link or to
//! one of the curated tables, never a synthesized value.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::warn;

use super::license_tables::{COPYRIGHT_SUFFIX_URLS, LICENSE_TEXT_URLS, LICENSE_URL_FIXES};
use crate::xml::Element;

/// License URLs considered open enough for republication.
pub static FREE_LICENSE_URLS: &[&str] = &[
    "http://creativecommons.org/licenses/by/2.0/",
    "http://creativecommons.org/licenses/by-sa/2.0/",
    "http://creativecommons.org/licenses/by/2.5/",
    "http://creativecommons.org/licenses/by-sa/2.5/",
    "http://creativecommons.org/licenses/by/3.0/",
    "http://creativecommons.org/licenses/by-sa/3.0/",
    "http://creativecommons.org/licenses/by/4.0/",
    "http://creativecommons.org/licenses/by-sa/4.0/",
    "http://creativecommons.org/publicdomain/zero/1.0/",
];

static URL_FIX_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| LICENSE_URL_FIXES.iter().copied().collect());

static LICENSE_TEXT_INDEX: Lazy<HashMap<&'static str, Option<&'static str>>> =
    Lazy::new(|| LICENSE_TEXT_URLS.iter().copied().collect());

/// Raw and resolved licensing signals for one article.
///
/// The raw texts are preserved regardless of resolution outcome; downstream
/// collaborators need them for display and for future table corrections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Licensing {
    /// Canonical license URL, if any stage resolved one
    pub url: Option<String>,
    /// License statement text as written in the document
    pub text: Option<String>,
    /// Copyright statement text as written in the document
    pub copyright_statement: Option<String>,
}

/// Resolve the licensing of an article from its parsed tree.
pub fn resolve(article: &Element) -> Licensing {
    let front = article.find("front");
    let license = front.and_then(|front| front.find_descendant("license"));

    let text = license.map(Element::spaced_text);
    let copyright_statement = front
        .and_then(|front| front.find_descendant("copyright-statement"))
        .map(Element::spaced_text);

    let mut url = license
        .and_then(direct_url)
        .map(|raw| correct_url(&raw).to_string());

    if url.is_none() {
        url = text.as_deref().and_then(from_license_text);
    }

    if url.is_none() {
        url = copyright_statement
            .as_deref()
            .and_then(from_copyright_statement);
    }

    Licensing {
        url,
        text,
        copyright_statement,
    }
}

/// Stage 1: the hyperlink target of the license node itself, or of an
/// external link nested in its descriptive paragraph.
fn direct_url(license: &Element) -> Option<String> {
    license
        .attr("xlink:href")
        .or_else(|| {
            license
                .find("license-p/ext-link")
                .and_then(|link| link.attr("xlink:href"))
        })
        .map(str::to_string)
}

/// Stage 2: fix known typos in an extracted license URL.
///
/// Idempotent: an already-correct URL is returned unchanged.
pub fn correct_url(url: &str) -> &str {
    URL_FIX_INDEX.get(url).copied().unwrap_or(url)
}

/// Stage 3: verbatim lookup of the flattened license text.
///
/// An unknown text is logged and yields no URL; it never fails the article.
fn from_license_text(text: &str) -> Option<String> {
    match LICENSE_TEXT_INDEX.get(text) {
        Some(url) => url.map(str::to_string),
        None => {
            warn!("Unknown license: {}", text);
            None
        }
    }
}

/// Stage 4: trailing-suffix match of the copyright statement.
///
/// Real copyright statements are prefixed with variable footnote markers but
/// end in stable legal boilerplate, so the match is on the suffix. The first
/// matching table entry wins.
fn from_copyright_statement(statement: &str) -> Option<String> {
    for (suffix, url) in COPYRIGHT_SUFFIX_URLS {
        if statement.ends_with(suffix) {
            return url.map(str::to_string);
        }
    }
    warn!("Unknown copyright statement: {}", statement);
    None
}

/// Whether a canonical license URL is in the republication allow-list.
pub fn is_free_license(url: &str) -> bool {
    FREE_LICENSE_URLS.contains(&url)
}
