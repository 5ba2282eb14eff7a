//! Materializes assembled articles as markdown files.
//!
//! Layout: `<content_root>/<topic>/<slug>.md`. The topic directory is created
//! on demand. An existing file with the same slug is overwritten; there is no
//! collision detection, so the last write wins.

use crate::article::{ArticleDocument, ArticleError};
use crate::frontmatter::format_article;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File extension of generated articles (without the dot).
pub const ARTICLE_EXTENSION: &str = "md";

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure of one generate-and-write cycle.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Article(#[from] ArticleError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Target path for a document: `<content_root>/<topic>/<slug>.md`.
pub fn article_path(content_root: &Path, document: &ArticleDocument) -> PathBuf {
    content_root
        .join(&document.topic)
        .join(format!("{}.{ARTICLE_EXTENSION}", document.slug))
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> WriteError {
    let path = path.to_path_buf();
    move |source| WriteError::Io { path, source }
}

/// Write `document` under `content_root` and return the absolute path written.
pub fn write_article(
    document: &ArticleDocument,
    content_root: &Path,
    author: &str,
    now: DateTime<Utc>,
) -> Result<PathBuf, WriteError> {
    let path = article_path(content_root, document);

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(io_err(dir))?;
    }

    let content = format_article(document, author, now);
    fs::write(&path, content).map_err(io_err(&path))?;

    let absolute = std::path::absolute(&path).map_err(io_err(&path))?;
    tracing::info!(
        path = %absolute.display(),
        topic = %document.topic,
        slug = %document.slug,
        "article written"
    );
    Ok(absolute)
}
