//! End-to-end tests for archive streaming and extraction.

use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::tempdir;

use oa_media_importer::ArticleStream;

/// Write a gzip-compressed tar archive with the given (name, content) entries.
fn write_archive(path: &Path, entries: &[(&str, &str)]) {
    let file = File::create(path).unwrap();
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);
    for (name, content) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, name, content.as_bytes())
            .unwrap();
    }
    builder.into_inner().unwrap().finish().unwrap();
}

fn sample_article(title: &str) -> String {
    format!(
        r#"<article xmlns:xlink="http://www.w3.org/1999/xlink">
  <front>
    <journal-meta><journal-title>Parasites &amp; Vectors</journal-title></journal-meta>
    <article-meta>
      <article-id pub-id-type="doi">10.1186/1756-3305-1-29</article-id>
      <article-id pub-id-type="pmc">2559997</article-id>
      <title-group><article-title>{}</article-title></title-group>
      <contrib-group>
        <contrib contrib-type="author">
          <name><surname>Behnke</surname><given-names>Jerzy</given-names></name>
        </contrib>
      </contrib-group>
      <pub-date><day>17</day><month>9</month><year>2008</year></pub-date>
      <permissions>
        <license xlink:href="http://creativecommons.org/licenses/by/2.0"/>
      </permissions>
    </article-meta>
  </front>
  <body>
    <supplementary-material>
      <label>Additional file 1</label>
      <caption>
        <title>Movie 1</title>
        <p>A single adult female worm.</p>
        <p>(1.3 MB MPG)</p>
      </caption>
      <media mimetype="video" mime-subtype="mpeg" xlink:href="1756-3305-1-29-S1.mpg"/>
    </supplementary-material>
  </body>
</article>"#,
        title
    )
}

#[test]
fn test_stream_yields_records_in_archive_order() {
    let dir = tempdir().unwrap();
    write_archive(
        &dir.path().join("volume-1.tar.gz"),
        &[
            ("journal/article-a.nxml", &sample_article("First article")),
            ("journal/article-b.nxml", &sample_article("Second article")),
        ],
    );

    let mut seen = HashSet::new();
    let records: Vec<_> = ArticleStream::open(dir.path(), &mut seen, true)
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].0, "journal/article-a.nxml");
    assert_eq!(records[0].1.title, "First article");
    assert_eq!(records[0].1.authors, "Behnke J");
    assert_eq!(records[0].1.year, 2008);
    assert_eq!(records[0].1.month, Some(9));
    assert_eq!(
        records[0].1.license_url.as_deref(),
        Some("http://creativecommons.org/licenses/by/2.0/")
    );
    assert_eq!(records[1].0, "journal/article-b.nxml");
}

#[test]
fn test_duplicate_entry_across_volumes_emitted_once() {
    let dir = tempdir().unwrap();
    let content = sample_article("Split volume article");
    write_archive(
        &dir.path().join("volume-1.tar.gz"),
        &[("journal/shared.nxml", &content)],
    );
    write_archive(
        &dir.path().join("volume-2.tar.gz"),
        &[
            ("journal/shared.nxml", &content),
            ("journal/unique.nxml", &sample_article("Only in volume 2")),
        ],
    );

    let mut seen = HashSet::new();
    let records: Vec<_> = ArticleStream::open(dir.path(), &mut seen, false)
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    let names: Vec<&str> = records.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["journal/shared.nxml", "journal/unique.nxml"]);
}

#[test]
fn test_entries_are_processed_only_when_pulled() {
    let dir = tempdir().unwrap();
    write_archive(
        &dir.path().join("volume-1.tar.gz"),
        &[
            ("journal/a.nxml", &sample_article("Pulled")),
            ("journal/b.nxml", &sample_article("Not yet pulled")),
        ],
    );

    let mut seen = HashSet::new();
    {
        let mut stream = ArticleStream::open(dir.path(), &mut seen, false).unwrap();
        let (name, article) = stream.next().unwrap().unwrap();
        assert_eq!(name, "journal/a.nxml");
        assert_eq!(article.title, "Pulled");
    }

    // pulling one record must not have touched the entry behind it
    assert!(seen.contains("journal/a.nxml"));
    assert!(!seen.contains("journal/b.nxml"));
}

#[test]
fn test_prepopulated_seen_set_skips_entries() {
    let dir = tempdir().unwrap();
    write_archive(
        &dir.path().join("volume-1.tar.gz"),
        &[
            ("journal/done.nxml", &sample_article("Already processed")),
            ("journal/new.nxml", &sample_article("Not yet processed")),
        ],
    );

    let mut seen = HashSet::from(["journal/done.nxml".to_string()]);
    let records: Vec<_> = ArticleStream::open(dir.path(), &mut seen, false)
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].0, "journal/new.nxml");
    assert!(seen.contains("journal/new.nxml"));
}

#[test]
fn test_non_article_entries_are_filtered() {
    let dir = tempdir().unwrap();
    write_archive(
        &dir.path().join("volume-1.tar.gz"),
        &[
            ("journal/article.nxml", &sample_article("The article")),
            ("journal/article.pdf", "%PDF-1.4 not xml"),
            ("journal/readme.txt", "plain text"),
        ],
    );

    let mut seen = HashSet::new();
    let records: Vec<_> = ArticleStream::open(dir.path(), &mut seen, false)
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(records.len(), 1);
    assert!(!seen.contains("journal/article.pdf"));
}

#[test]
fn test_malformed_entry_does_not_abort_the_stream() {
    let dir = tempdir().unwrap();
    write_archive(
        &dir.path().join("volume-1.tar.gz"),
        &[
            ("journal/broken.nxml", "<article><front></article>"),
            ("journal/good.nxml", &sample_article("Survives the run")),
        ],
    );

    let mut seen = HashSet::new();
    let items: Vec<_> = ArticleStream::open(dir.path(), &mut seen, false)
        .unwrap()
        .collect();

    assert_eq!(items.len(), 2);
    let err = items[0].as_ref().unwrap_err();
    assert_eq!(err.name, "journal/broken.nxml");
    assert_eq!(items[1].as_ref().unwrap().1.title, "Survives the run");
}

#[test]
fn test_supplementary_extraction_is_optional() {
    let dir = tempdir().unwrap();
    write_archive(
        &dir.path().join("volume-1.tar.gz"),
        &[("journal/article.nxml", &sample_article("With media"))],
    );

    let mut seen = HashSet::new();
    let records: Vec<_> = ArticleStream::open(dir.path(), &mut seen, true)
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let materials = &records[0].1.supplementary_materials;
    assert_eq!(materials.len(), 1);
    assert_eq!(materials[0].label, "Additional file 1");
    assert_eq!(
        materials[0].url,
        "http://www.ncbi.nlm.nih.gov/pmc/articles/PMC2559997/bin/1756-3305-1-29-S1.mpg"
    );

    let mut seen = HashSet::new();
    let records: Vec<_> = ArticleStream::open(dir.path(), &mut seen, false)
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert!(records[0].1.supplementary_materials.is_empty());
}

#[test]
fn test_missing_directory_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let mut seen = HashSet::new();
    assert!(ArticleStream::open(&missing, &mut seen, false).is_err());
}

#[test]
fn test_corrupt_archive_ends_the_stream() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("volume-1.tar.gz"), b"not a gzip stream").unwrap();
    write_archive(
        &dir.path().join("volume-2.tar.gz"),
        &[("journal/later.nxml", &sample_article("Never reached"))],
    );

    let mut seen = HashSet::new();
    let items: Vec<_> = ArticleStream::open(dir.path(), &mut seen, false)
        .unwrap()
        .collect();

    // one fatal error for the corrupt archive, then the stream ends
    assert_eq!(items.len(), 1);
    assert!(items[0].is_err());
}
