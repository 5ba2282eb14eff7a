//! # blog-seed
//!
//! Generates placeholder technical blog articles for a static site. Each
//! article is a markdown file with a front-matter block, a set of templated
//! sections, and a topic-specific code sample.
//!
//! # Pipeline
//!
//! ```text
//! ArticleRequest ──assemble──▶ ArticleDocument ──format──▶ text ──write──▶ <content>/<topic>/<slug>.md
//!   (topic, type,               (title, slug,                 front-matter
//!    category, flags)            description, body)           + body
//! ```
//!
//! Randomness enters at two points only: the description phrase and, in batch
//! mode, the category. Both draw from a caller-supplied [`rand::Rng`], so a
//! seeded generator makes a whole run reproducible.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Static topic, article-type, and code-sample tables |
//! | [`slug`] | Category phrase → filesystem-safe slug |
//! | [`article`] | Assembles an `ArticleDocument` from a request |
//! | [`frontmatter`] | Formats (and reads back) the front-matter block |
//! | [`writer`] | Writes documents to `<content_root>/<topic>/<slug>.md` |
//! | [`batch`] | Round-robin generation of many articles |
//! | [`stats`] | Project layout validation and per-topic counts |
//! | [`config`] | `blog-seed.toml` loading, merging, and validation |
//! | [`output`] | CLI output formatting |

pub mod article;
pub mod batch;
pub mod catalog;
pub mod config;
pub mod frontmatter;
pub mod output;
pub mod slug;
pub mod stats;
pub mod writer;

#[cfg(test)]
pub(crate) mod test_helpers;

/// Initialize tracing to stderr with the given verbosity.
///
/// 0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE. `RUST_LOG` directives are
/// honored on top of the level.
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
