//! Document sources: inline text, stdin, local files and web pages.
//!
//! Local files are read as plain text, except `.pdf` (pdf-extract) and `.pptx`
//! (slide XML pulled out of the zip container with quick-xml).

use crate::scraper::{self, ScraperError};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("PDF extraction failed: {0}")]
    Pdf(String),
    #[error("invalid PPTX archive: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("invalid slide XML: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error(transparent)]
    Web(#[from] ScraperError),
}

/// Where a document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Inline(String),
    Stdin,
    File(PathBuf),
    Url(String),
}

impl Source {
    /// Load the document text
    pub async fn load(&self, timeout: Duration) -> Result<String, SourceError> {
        match self {
            Source::Inline(text) => Ok(text.clone()),
            Source::Stdin => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .map_err(SourceError::Stdin)?;
                Ok(text)
            }
            Source::File(path) => read_file(path),
            Source::Url(url) => Ok(scraper::fetch_page(url, timeout).await?.text),
        }
    }
}

/// Read a local document, picking the extractor by extension
pub fn read_file(path: &Path) -> Result<String, SourceError> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    debug!(path = %path.display(), ext = %ext, "reading document");

    let io_error = |source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    };

    match ext.as_str() {
        "pdf" => pdf_extract::extract_text(path).map_err(|e| SourceError::Pdf(e.to_string())),
        "pptx" => {
            let file = File::open(path).map_err(io_error)?;
            read_pptx(file)
        }
        _ => std::fs::read_to_string(path).map_err(io_error),
    }
}

/// Slide text of a PPTX archive, one block per slide in slide order
pub fn read_pptx<R: Read + io::Seek>(reader: R) -> Result<String, SourceError> {
    let mut archive = zip::ZipArchive::new(reader)?;

    let mut slides: Vec<(u32, String)> = archive
        .file_names()
        .filter_map(|name| slide_number(name).map(|n| (n, name.to_string())))
        .collect();
    slides.sort();

    let mut blocks = Vec::with_capacity(slides.len());
    for (_, name) in slides {
        let mut xml = String::new();
        archive
            .by_name(&name)?
            .read_to_string(&mut xml)
            .map_err(|source| SourceError::Io {
                path: PathBuf::from(&name),
                source,
            })?;

        let text = slide_text(&xml)?;
        if !text.is_empty() {
            blocks.push(text);
        }
    }

    Ok(blocks.join("\n\n"))
}

/// `ppt/slides/slide12.xml` -> 12
fn slide_number(name: &str) -> Option<u32> {
    name.strip_prefix("ppt/slides/slide")?
        .strip_suffix(".xml")?
        .parse()
        .ok()
}

/// Text runs (`a:t`) of one slide, paragraphs (`a:p`) separated by spaces
fn slide_text(xml: &str) -> Result<String, SourceError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_run = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"a:t" => in_run = true,
            Event::End(e) if e.name().as_ref() == b"a:t" => in_run = false,
            Event::End(e) if e.name().as_ref() == b"a:p" => {
                let paragraph = current.trim();
                if !paragraph.is_empty() {
                    paragraphs.push(paragraph.to_string());
                }
                current.clear();
            }
            Event::Text(t) if in_run => current.push_str(&String::from_utf8_lossy(&t)),
            Event::GeneralRef(r) if in_run => {
                let entity = match &*r {
                    b"amp" => "&",
                    b"lt" => "<",
                    b"gt" => ">",
                    b"quot" => "\"",
                    b"apos" => "'",
                    _ => "",
                };
                current.push_str(entity);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs.join(" "))
}
