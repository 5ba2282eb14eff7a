//! CLI output formatting for every command.
//!
//! Each command has a `format_*` function returning `Vec<String>` and a
//! `print_*` wrapper that writes the lines to stdout. Format functions are
//! pure, so tests can assert on exact output without capturing stdout.
//!
//! ```text
//! $ blog-seed batch 3
//! Generated 3 articles
//!     001 JVM性能调优与内存管理 - 实战教程 (java)
//!         Path: /site/src/content/blog/java/jvm性能调优与内存管理.md
//!     002 异步编程与Tokio - 技术对比分析 (rust)
//!         Path: /site/src/content/blog/rust/异步编程与tokio.md
//!     ...
//!
//! $ blog-seed stats
//! Articles: 3
//!     java: 1 (1 featured, 0 drafts)
//!     rust: 1 (1 featured, 0 drafts)
//!     ...
//! ```

use crate::batch::BatchEntry;
use crate::catalog::{ARTICLE_TYPES, TOPICS};
use crate::stats::ArticleStats;
use std::path::Path;

/// Prefix for the single error line printed before exiting with status 1.
pub const ERROR_MARKER: &str = "\u{274c} error:";

fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

pub fn format_error(error: &dyn std::error::Error) -> String {
    format!("{} {}", ERROR_MARKER, error)
}

/// Error line for rejected command-line arguments.
///
/// `rendered` is the argument parser's own message; only its first line is
/// kept, without the parser's `error:` prefix.
pub fn format_argument_error(rendered: &str) -> String {
    let first = rendered.lines().next().unwrap_or_default().trim();
    let message = first.strip_prefix("error:").unwrap_or(first).trim_start();
    format!("{} {}", ERROR_MARKER, message)
}

pub fn format_validate_output(project_root: &Path) -> Vec<String> {
    vec![format!(
        "\u{2705} Project layout is valid: {}",
        project_root.display()
    )]
}

pub fn print_validate_output(project_root: &Path) {
    print_lines(format_validate_output(project_root));
}

pub fn format_generate_output(title: &str, path: &Path) -> Vec<String> {
    vec![
        format!("\u{1f4dd} Generated: {}", title),
        format!("{}Path: {}", indent(1), path.display()),
    ]
}

pub fn print_generate_output(title: &str, path: &Path) {
    print_lines(format_generate_output(title, path));
}

pub fn format_batch_output(entries: &[BatchEntry]) -> Vec<String> {
    let noun = if entries.len() == 1 { "article" } else { "articles" };
    let mut lines = vec![format!("Generated {} {}", entries.len(), noun)];
    for (i, entry) in entries.iter().enumerate() {
        lines.push(format!(
            "{}{} {} ({})",
            indent(1),
            format_index(i + 1),
            entry.title,
            entry.topic
        ));
        lines.push(format!("{}Path: {}", indent(2), entry.path.display()));
    }
    lines
}

pub fn print_batch_output(entries: &[BatchEntry]) {
    print_lines(format_batch_output(entries));
}

pub fn format_stats_output(stats: &ArticleStats) -> Vec<String> {
    let mut lines = vec![format!("Articles: {}", stats.total)];
    for topic in &stats.by_topic {
        lines.push(format!(
            "{}{}: {} ({} featured, {} drafts)",
            indent(1),
            topic.topic,
            topic.articles,
            topic.featured,
            topic.drafts
        ));
    }
    lines
}

pub fn print_stats_output(stats: &ArticleStats) {
    print_lines(format_stats_output(stats));
}

/// Usage text shown for an absent or unrecognized command.
pub fn usage_text() -> String {
    let topics: Vec<&str> = TOPICS.iter().map(|t| t.key).collect();
    let types: Vec<&str> = ARTICLE_TYPES.iter().map(|t| t.key).collect();
    format!(
        "\
\u{1f4dd} blog-seed - technical blog article generator

Usage:
  blog-seed validate                               Check the project layout
  blog-seed generate [topic] [type] [options]      Generate one article
  blog-seed batch [count]                          Generate several articles
  blog-seed stats                                  Show article counts
  blog-seed gen-config                             Print a stock blog-seed.toml

Arguments:
  topic:   {topics} (default: {default_topic})
  type:    {types} (default: {default_type})
  options: --featured | --draft | --category <N>

Examples:
  blog-seed generate java tutorial --featured
  blog-seed batch 10
  blog-seed generate rust practice --draft
",
        topics = topics.join(" | "),
        types = types.join(" | "),
        default_topic = TOPICS[0].key,
        default_type = ARTICLE_TYPES[0].key,
    )
}

pub fn print_usage() {
    print!("{}", usage_text());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::TopicStats;
    use std::path::PathBuf;

    fn entry(title: &str, topic: &str, path: &str) -> BatchEntry {
        BatchEntry {
            title: title.to_string(),
            path: PathBuf::from(path),
            topic: topic.to_string(),
            article_type: "tutorial".to_string(),
        }
    }

    #[test]
    fn batch_output_lists_each_entry_with_path() {
        let entries = vec![
            entry("A - 实战教程", "java", "/c/java/a.md"),
            entry("B - 技术对比分析", "rust", "/c/rust/b.md"),
        ];
        let lines = format_batch_output(&entries);
        assert_eq!(
            lines,
            vec![
                "Generated 2 articles",
                "    001 A - 实战教程 (java)",
                "        Path: /c/java/a.md",
                "    002 B - 技术对比分析 (rust)",
                "        Path: /c/rust/b.md",
            ]
        );
    }

    #[test]
    fn batch_output_singular_and_empty() {
        assert_eq!(format_batch_output(&[])[0], "Generated 0 articles");
        let one = [entry("A", "ai", "/a.md")];
        assert_eq!(format_batch_output(&one)[0], "Generated 1 article");
    }

    #[test]
    fn stats_output_has_total_and_topics() {
        let stats = ArticleStats {
            total: 3,
            by_topic: vec![
                TopicStats {
                    topic: "java".into(),
                    articles: 2,
                    featured: 1,
                    drafts: 0,
                },
                TopicStats {
                    topic: "rust".into(),
                    articles: 1,
                    featured: 0,
                    drafts: 1,
                },
            ],
        };
        assert_eq!(
            format_stats_output(&stats),
            vec![
                "Articles: 3",
                "    java: 2 (1 featured, 0 drafts)",
                "    rust: 1 (0 featured, 1 drafts)",
            ]
        );
    }

    #[test]
    fn generate_output_shows_path() {
        let lines = format_generate_output("T", Path::new("/c/java/t.md"));
        assert_eq!(lines[1], "    Path: /c/java/t.md");
    }

    #[test]
    fn error_line_has_marker() {
        let err = std::io::Error::other("boom");
        assert_eq!(format_error(&err), "\u{274c} error: boom");
    }

    #[test]
    fn argument_error_keeps_first_line_without_prefix() {
        let rendered = "error: invalid value 'abc' for '[COUNT]': invalid digit found in string\n\nFor more information, try '--help'.\n";
        assert_eq!(
            format_argument_error(rendered),
            "\u{274c} error: invalid value 'abc' for '[COUNT]': invalid digit found in string"
        );
        assert_eq!(format_argument_error(""), "\u{274c} error: ");
    }

    #[test]
    fn usage_lists_topics_and_types() {
        let usage = usage_text();
        assert!(usage.contains("java | rust | ai | database | devops (default: java)"));
        assert!(usage.contains("tutorial | comparison | practice (default: tutorial)"));
        assert!(usage.contains("blog-seed batch [count]"));
    }
}
