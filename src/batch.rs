//! Batch generation: many articles in one run.
//!
//! Iteration `i` uses topic `TOPICS[i % TOPICS.len()]` and article type
//! `ARTICLE_TYPES[i % ARTICLE_TYPES.len()]`, with a random category from the
//! topic. The first two articles are marked featured. A failed iteration is
//! logged and skipped; it never aborts the batch.

use crate::article::{ArticleRequest, Assembler};
use crate::catalog::{ARTICLE_TYPES, TOPICS};
use crate::writer::{self, GenerateError};
use chrono::{DateTime, Utc};
use rand::Rng;
use std::path::{Path, PathBuf};

/// How many leading articles of a batch are marked featured.
pub const FEATURED_COUNT: usize = 2;

/// Summary of one article written by a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub title: String,
    pub path: PathBuf,
    pub topic: String,
    pub article_type: String,
}

/// Request for iteration `i`. The category index is drawn from `rng`.
pub fn batch_request<R: Rng + ?Sized>(i: usize, rng: &mut R) -> ArticleRequest {
    let topic = &TOPICS[i % TOPICS.len()];
    let article_type = &ARTICLE_TYPES[i % ARTICLE_TYPES.len()];
    let category_index = rng.gen_range(0..topic.categories.len());

    ArticleRequest::new(topic.key, article_type.key)
        .category(category_index)
        .featured(i < FEATURED_COUNT)
        .draft(false)
}

fn generate_one<R: Rng + ?Sized>(
    assembler: &Assembler,
    request: &ArticleRequest,
    content_root: &Path,
    author: &str,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Result<BatchEntry, GenerateError> {
    let document = assembler.assemble(request, rng)?;
    let path = writer::write_article(&document, content_root, author, now)?;
    Ok(BatchEntry {
        title: document.title,
        path,
        topic: document.topic,
        article_type: document.article_type,
    })
}

/// Generate `count` articles under `content_root`.
///
/// Returns summaries of the articles that were written, in generation order.
pub fn batch_generate<R: Rng + ?Sized>(
    assembler: &Assembler,
    content_root: &Path,
    author: &str,
    count: usize,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Vec<BatchEntry> {
    let _span = tracing::info_span!("batch", count).entered();
    let mut entries = Vec::with_capacity(count);

    for i in 0..count {
        let request = batch_request(i, rng);
        match generate_one(assembler, &request, content_root, author, rng, now) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                tracing::error!(
                    iteration = i,
                    topic = %request.topic,
                    article_type = %request.article_type,
                    error = %e,
                    "failed to generate article"
                );
            }
        }
    }

    tracing::info!(written = entries.len(), "batch complete");
    entries
}
