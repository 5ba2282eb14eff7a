//! Project layout validation and article counts.

use crate::catalog::TOPICS;
use crate::config::GeneratorConfig;
use crate::frontmatter::parse_front_matter;
use crate::writer::ARTICLE_EXTENSION;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("project layout incomplete, missing directories:\n{}", format_paths(.0))]
    MissingDirectories(Vec<PathBuf>),
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check that the content root and the workflow-config directory exist.
///
/// Every missing directory is reported, not just the first.
pub fn validate_project_layout(
    config: &GeneratorConfig,
    project_root: &Path,
) -> Result<(), LayoutError> {
    let required = [
        config.content_root(project_root),
        config.workflows_root(project_root),
    ];
    let missing: Vec<PathBuf> = required.into_iter().filter(|d| !d.is_dir()).collect();

    if missing.is_empty() {
        tracing::info!("project layout ok");
        Ok(())
    } else {
        Err(LayoutError::MissingDirectories(missing))
    }
}

/// Article counts for one topic directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicStats {
    pub topic: String,
    pub articles: usize,
    pub featured: usize,
    pub drafts: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleStats {
    pub total: usize,
    /// One entry per catalog topic, in catalog order.
    pub by_topic: Vec<TopicStats>,
}

/// Any file whose name ends in `.md`, including a bare `.md`.
fn is_article(path: &Path) -> bool {
    let suffix = format!(".{ARTICLE_EXTENSION}");
    path.file_name().is_some_and(|name| name.to_string_lossy().ends_with(&suffix))
}

fn topic_stats(content_root: &Path, topic: &str) -> TopicStats {
    let mut stats = TopicStats {
        topic: topic.to_string(),
        articles: 0,
        featured: 0,
        drafts: 0,
    };
    let dir = content_root.join(topic);
    if !dir.is_dir() {
        return stats;
    }

    let files = WalkDir::new(&dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_article(e.path()));

    for entry in files {
        stats.articles += 1;
        let parsed = fs::read_to_string(entry.path())
            .map_err(|e| e.to_string())
            .and_then(|text| parse_front_matter(&text).map_err(|e| e.to_string()));
        match parsed {
            Ok(fm) => {
                stats.featured += usize::from(fm.featured);
                stats.drafts += usize::from(fm.draft);
            }
            Err(error) => {
                tracing::warn!(path = %entry.path().display(), %error, "unreadable front-matter");
            }
        }
    }
    stats
}

/// Count articles per catalog topic under `content_root`.
///
/// A missing topic directory counts as zero.
pub fn get_stats(content_root: &Path) -> ArticleStats {
    let by_topic: Vec<TopicStats> = TOPICS
        .iter()
        .map(|t| topic_stats(content_root, t.key))
        .collect();
    let total = by_topic.iter().map(|t| t.articles).sum();
    ArticleStats { total, by_topic }
}
