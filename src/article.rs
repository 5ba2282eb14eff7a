//! Article assembly: catalog lookups + template filling.
//!
//! [`Assembler::assemble`] turns an [`ArticleRequest`] into an
//! [`ArticleDocument`]. Everything except the description is a pure function
//! of the request. The description is drawn from the caller's RNG so tests can
//! pin it with a seeded generator.

use crate::catalog::{self, ArticleTypeDefinition, PLACEHOLDER, TopicDefinition};
use crate::slug::slugify;
use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArticleError {
    #[error("unsupported topic: {0}")]
    UnknownTopic(String),
    #[error("unsupported article type: {0}")]
    UnknownType(String),
}

/// What to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRequest {
    pub topic: String,
    pub article_type: String,
    /// Index into the topic's categories. Out of range falls back to 0.
    pub category_index: usize,
    pub featured: bool,
    pub draft: bool,
}

impl ArticleRequest {
    pub fn new(topic: impl Into<String>, article_type: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            article_type: article_type.into(),
            category_index: 0,
            featured: false,
            draft: false,
        }
    }

    pub fn category(mut self, index: usize) -> Self {
        self.category_index = index;
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn draft(mut self, draft: bool) -> Self {
        self.draft = draft;
        self
    }
}

/// A fully assembled article, ready to be formatted and written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDocument {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub body: String,
    pub tags: Vec<String>,
    pub topic: String,
    pub article_type: String,
    pub featured: bool,
    pub draft: bool,
}

/// Builds articles from the static catalogs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Assembler;

impl Assembler {
    pub fn new() -> Self {
        Self
    }

    pub fn assemble<R: Rng + ?Sized>(
        &self,
        request: &ArticleRequest,
        rng: &mut R,
    ) -> Result<ArticleDocument, ArticleError> {
        let topic = catalog::find_topic(&request.topic)
            .ok_or_else(|| ArticleError::UnknownTopic(request.topic.clone()))?;
        let article_type = catalog::find_article_type(&request.article_type)
            .ok_or_else(|| ArticleError::UnknownType(request.article_type.clone()))?;

        let category = select_category(topic, request.category_index);
        tracing::debug!(
            topic = topic.key,
            article_type = article_type.key,
            category,
            "assembling article"
        );

        Ok(ArticleDocument {
            title: fill(article_type.title_pattern, category),
            slug: slugify(category),
            description: random_description(category, rng),
            body: build_body(topic, article_type, category),
            tags: topic.tags.iter().map(|t| t.to_string()).collect(),
            topic: topic.key.to_string(),
            article_type: article_type.key.to_string(),
            featured: request.featured,
            draft: request.draft,
        })
    }
}

/// Clamp-to-default: an index past the end selects the first category.
fn select_category(topic: &TopicDefinition, index: usize) -> &'static str {
    topic
        .categories
        .get(index)
        .or_else(|| topic.categories.first())
        .copied()
        .unwrap_or(topic.title)
}

fn fill(template: &str, category: &str) -> String {
    template.replace(PLACEHOLDER, category)
}

fn random_description<R: Rng + ?Sized>(category: &str, rng: &mut R) -> String {
    catalog::DESCRIPTION_TEMPLATES
        .choose(rng)
        .map(|t| fill(t, category))
        .unwrap_or_else(|| category.to_string())
}

fn build_body(
    topic: &TopicDefinition,
    article_type: &ArticleTypeDefinition,
    category: &str,
) -> String {
    let mut sections: Vec<String> = article_type
        .sections
        .iter()
        .map(|s| fill(s, category))
        .collect();
    sections.push(technical_details(topic.key, category));
    sections.join("\n\n")
}

/// The trailing `## 技术细节` section: fenced code sample and closing remark.
pub fn technical_details(topic: &str, category: &str) -> String {
    let sample = catalog::code_sample(topic);
    format!(
        "## 技术细节\n\n```{}\n{}\n```\n\n> 本文介绍了{}的核心概念和实践经验，更多详细内容请参考相关文档。",
        sample.language,
        fill(sample.template, category),
        category
    )
}
