//! Front-matter serialization for generated articles.
//!
//! The layout is fixed and line-oriented so the output matches what the blog's
//! content collection expects:
//!
//! ```text
//! ---
//! author: ChaneyChan
//! pubDatetime: 2024-05-01T08:30:00.000Z
//! modDatetime: 2024-05-01T08:30:00.000Z
//! title: Rust所有权模型深度解析 - 生产实践总结
//! slug: rust所有权模型深度解析
//! featured: true
//! draft: false
//! tags:
//!   - rust
//!   - 系统编程
//! description: Rust所有权模型深度解析性能优化实战技巧总结
//! ---
//!
//! ## Table of contents
//!
//! <body>
//! ```
//!
//! Values are written verbatim. A title or description containing YAML
//! syntax (`: `, leading `#`, quotes) is not escaped; catalog phrases never do.

use crate::article::ArticleDocument;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use thiserror::Error;

const DELIMITER: &str = "---";

/// Heading inserted between the front-matter block and the article body.
pub const TOC_HEADING: &str = "## Table of contents";

#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("no front-matter block found")]
    MissingBlock,
    #[error("invalid front-matter: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Front-matter fields as read back from a written article.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FrontMatter {
    pub author: String,
    pub pub_datetime: String,
    pub mod_datetime: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
}

/// ISO-8601 timestamp with millisecond precision and a `Z` suffix.
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Render a document as front-matter followed by its body.
pub fn format_article(document: &ArticleDocument, author: &str, now: DateTime<Utc>) -> String {
    let timestamp = format_timestamp(now);
    let tags: Vec<String> = document.tags.iter().map(|t| format!("  - {t}")).collect();

    format!(
        "{DELIMITER}
author: {author}
pubDatetime: {timestamp}
modDatetime: {timestamp}
title: {title}
slug: {slug}
featured: {featured}
draft: {draft}
tags:
{tags}
description: {description}
{DELIMITER}

{TOC_HEADING}

{body}",
        title = document.title,
        slug = document.slug,
        featured = document.featured,
        draft = document.draft,
        tags = tags.join("\n"),
        description = document.description,
        body = document.body,
    )
}

/// Split `---`-delimited front-matter off the top of a document.
///
/// Returns the raw block (without delimiters) and the remainder.
pub fn split_front_matter(text: &str) -> Option<(&str, &str)> {
    let rest = text.strip_prefix(DELIMITER)?.strip_prefix('\n')?;
    let end = rest
        .find("\n---\n")
        .or_else(|| rest.strip_suffix("\n---").map(str::len))?;
    let block = &rest[..end];
    let remainder = rest[end..]
        .strip_prefix("\n---")
        .map(|r| r.strip_prefix('\n').unwrap_or(r))
        .unwrap_or("");
    Some((block, remainder))
}

/// Parse the front-matter block of a written article.
pub fn parse_front_matter(text: &str) -> Result<FrontMatter, FrontMatterError> {
    let (block, _) = split_front_matter(text).ok_or(FrontMatterError::MissingBlock)?;
    Ok(serde_yaml::from_str(block)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::{ArticleRequest, Assembler};
    use crate::test_helpers::{fixed_now, seeded_rng};

    fn rust_practice() -> ArticleDocument {
        let req = ArticleRequest::new("rust", "practice").featured(true);
        Assembler::new().assemble(&req, &mut seeded_rng(3)).unwrap()
    }

    #[test]
    fn timestamp_has_millis_and_z() {
        assert_eq!(format_timestamp(fixed_now()), "2024-05-01T08:30:00.000Z");
    }

    #[test]
    fn header_lines_in_fixed_order() {
        let doc = rust_practice();
        let text = format_article(&doc, "ChaneyChan", fixed_now());
        let description_line = format!("description: {}", doc.description);
        let lines: Vec<&str> = text.lines().take(14).collect();
        assert_eq!(
            lines,
            vec![
                "---",
                "author: ChaneyChan",
                "pubDatetime: 2024-05-01T08:30:00.000Z",
                "modDatetime: 2024-05-01T08:30:00.000Z",
                "title: Rust所有权模型深度解析 - 生产实践总结",
                "slug: rust所有权模型深度解析",
                "featured: true",
                "draft: false",
                "tags:",
                "  - rust",
                "  - 系统编程",
                "  - 内存安全",
                "  - 性能优化",
                description_line.as_str(),
            ]
        );
    }

    #[test]
    fn toc_heading_precedes_body() {
        let doc = rust_practice();
        let text = format_article(&doc, "a", fixed_now());
        let expected_tail = format!("---\n\n## Table of contents\n\n{}", doc.body);
        assert!(text.ends_with(&expected_tail));
    }

    #[test]
    fn special_characters_are_not_escaped() {
        let mut doc = rust_practice();
        doc.title = "a: \"b\" #c".into();
        let text = format_article(&doc, "a", fixed_now());
        assert!(text.contains("\ntitle: a: \"b\" #c\n"));
    }

    #[test]
    fn parse_reads_back_what_format_wrote() {
        let doc = rust_practice();
        let text = format_article(&doc, "ChaneyChan", fixed_now());
        let fm = parse_front_matter(&text).unwrap();
        assert_eq!(fm.title, doc.title);
        assert_eq!(fm.slug, doc.slug);
        assert_eq!(fm.author, "ChaneyChan");
        assert_eq!(fm.pub_datetime, fm.mod_datetime);
        assert!(fm.featured);
        assert!(!fm.draft);
        assert_eq!(fm.tags, doc.tags);
        assert_eq!(fm.description, doc.description);
    }

    #[test]
    fn split_returns_body_after_block() {
        let (block, rest) = split_front_matter("---\ntitle: x\n---\n\nbody").unwrap();
        assert_eq!(block, "title: x");
        assert_eq!(rest, "\nbody");
    }

    #[test]
    fn split_handles_block_at_end_of_file() {
        let (block, rest) = split_front_matter("---\ntitle: x\n---").unwrap();
        assert_eq!(block, "title: x");
        assert_eq!(rest, "");
    }

    #[test]
    fn parse_without_block_is_error() {
        let err = parse_front_matter("# just markdown\n").unwrap_err();
        assert!(matches!(err, FrontMatterError::MissingBlock));
    }

    #[test]
    fn parse_missing_required_field_is_error() {
        let err = parse_front_matter("---\ntitle: x\n---\n").unwrap_err();
        assert!(matches!(err, FrontMatterError::Yaml(_)));
    }
}
