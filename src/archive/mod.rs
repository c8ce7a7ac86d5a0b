//! Archive stream reader.
//!
//! Streams article documents out of a directory of gzip-compressed tar
//! archives without extracting them to disk. The stream is a lazy, finite,
//! non-restartable sequence of (entry-name, record) pairs: each pull reads
//! and parses exactly one archive entry, so memory stays bounded against
//! multi-gigabyte inputs and abandoning the iterator abandons all remaining
//! work. Restarting requires reopening the archives from the beginning.

use std::collections::{HashSet, VecDeque};
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use ouroboros::self_referencing;
use tracing::debug;

use crate::error::{EntryError, ExtractError};
use crate::extract;
use crate::models::ArticleDocument;
use crate::xml::Element;

/// Extension identifying an article document inside an archive.
const ARTICLE_EXTENSION: &str = "nxml";

/// Suffix of the archive files distributed by the upstream source.
const ARCHIVE_SUFFIX: &str = ".tar.gz";

type ArchiveReader = tar::Archive<GzDecoder<BufReader<File>>>;

/// An open archive volume together with its entry cursor.
///
/// `tar::Entries` borrows the archive it reads from, so the two are held in
/// one owning struct and the cursor is only touched through
/// `with_entries_mut`.
#[self_referencing]
struct OpenArchive {
    archive: ArchiveReader,
    #[borrows(mut archive)]
    #[not_covariant]
    entries: tar::Entries<'this, GzDecoder<BufReader<File>>>,
}

fn open_archive(path: &Path) -> Result<OpenArchive, ExtractError> {
    let file = File::open(path)?;
    let archive = tar::Archive::new(GzDecoder::new(BufReader::new(file)));
    OpenArchiveTryBuilder {
        archive,
        entries_builder: |archive| archive.entries(),
    }
    .try_build()
    .map_err(ExtractError::from)
}

/// A lazy stream of article records over the archives in one directory.
///
/// Split archive volumes occasionally repeat entry names; the caller-owned
/// seen-set guarantees every entry name is processed at most once per run,
/// across all archives. Entries that fail structural validation are
/// reported per entry and do not abort the run; an unreadable archive file
/// is fatal and ends the stream after reporting it.
pub struct ArticleStream<'a> {
    archives: VecDeque<PathBuf>,
    current: Option<(PathBuf, OpenArchive)>,
    seen: &'a mut HashSet<String>,
    with_supplementary: bool,
    failed: bool,
}

impl<'a> ArticleStream<'a> {
    /// Open a stream over every archive file in `dir`.
    ///
    /// Archives are visited in name order; within an archive, entries are
    /// visited in file order. The seen-set is owned by the caller so that a
    /// skip list can outlive a single stream.
    pub fn open(
        dir: impl AsRef<Path>,
        seen: &'a mut HashSet<String>,
        with_supplementary: bool,
    ) -> std::io::Result<Self> {
        let mut archives: Vec<PathBuf> = std::fs::read_dir(dir)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(OsStr::to_str)
                    .is_some_and(|name| name.ends_with(ARCHIVE_SUFFIX))
            })
            .collect();
        archives.sort();

        Ok(Self {
            archives: archives.into(),
            current: None,
            seen,
            with_supplementary,
            failed: false,
        })
    }
}

/// Advance the entry cursor to the next article record, or to the end of
/// the archive.
///
/// Entries already in the seen-set and entries without the article
/// extension are skipped without being read. The raw bytes of the one entry
/// being processed are dropped as soon as it is parsed. A tar or gzip read
/// failure is fatal for the whole archive and surfaces in the outer
/// `Result`; a parse or validation failure is tagged with the entry name
/// and surfaces in the inner one.
fn next_record(
    entries: &mut tar::Entries<'_, GzDecoder<BufReader<File>>>,
    seen: &mut HashSet<String>,
    with_supplementary: bool,
) -> Result<Option<Result<(String, ArticleDocument), EntryError>>, ExtractError> {
    for entry in entries.by_ref() {
        let mut entry = entry?;
        let name = entry.path()?.to_string_lossy().into_owned();
        if seen.contains(&name) {
            debug!("Skipping duplicate entry {}", name);
            continue;
        }
        if Path::new(&name).extension().and_then(OsStr::to_str) != Some(ARTICLE_EXTENSION) {
            continue;
        }
        // guard against duplicate input before parsing, so a malformed
        // duplicate is not retried from a later volume
        seen.insert(name.clone());

        let mut content = Vec::new();
        entry.read_to_end(&mut content)?;
        let record = Element::parse(&content)
            .and_then(|root| extract::extract_article(&root, with_supplementary));
        return Ok(Some(match record {
            Ok(article) => Ok((name, article)),
            Err(source) => Err(EntryError::new(name, source)),
        }));
    }
    Ok(None)
}

impl Iterator for ArticleStream<'_> {
    type Item = Result<(String, ArticleDocument), EntryError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.failed {
                return None;
            }
            if self.current.is_none() {
                let path = self.archives.pop_front()?;
                debug!("Reading archive {}", path.display());
                match open_archive(&path) {
                    Ok(open) => self.current = Some((path, open)),
                    Err(source) => {
                        // an unreadable archive is fatal to the run
                        self.failed = true;
                        return Some(Err(EntryError::new(path.display().to_string(), source)));
                    }
                }
            }

            let seen = &mut *self.seen;
            let with_supplementary = self.with_supplementary;
            let Some((path, open)) = self.current.as_mut() else {
                continue;
            };
            let step =
                open.with_entries_mut(|entries| next_record(entries, seen, with_supplementary));
            match step {
                Ok(Some(item)) => return Some(item),
                Ok(None) => {
                    // archive exhausted, releases the file handle
                    self.current = None;
                }
                Err(source) => {
                    let name = path.display().to_string();
                    self.failed = true;
                    self.current = None;
                    return Some(Err(EntryError::new(name, source)));
                }
            }
        }
    }
}
