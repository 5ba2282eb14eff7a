//! Slug derivation for article filenames and URLs.
//!
//! A slug is built from the category phrase an article was generated for:
//!
//! 1. Lowercase the input.
//! 2. Drop every character that is not a CJK ideograph (U+4E00..=U+9FA5),
//!    an ASCII letter, an ASCII digit, or whitespace.
//! 3. Collapse each whitespace run into a single `-`.
//! 4. Keep at most [`MAX_SLUG_CHARS`] characters.
//!
//! Examples:
//! - `"Rust所有权模型深度解析"` → `"rust所有权模型深度解析"`
//! - `"Spring Boot高级特性"` → `"spring-boot高级特性"`
//! - `"CI/CD流水线建设"` → `"cicd流水线建设"`
//!
//! Leading or trailing whitespace still yields a leading or trailing `-`;
//! slugs are derived from catalog phrases, which never carry it.

/// Upper bound on slug length, counted in characters.
pub const MAX_SLUG_CHARS: usize = 50;

fn is_cjk_ideograph(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

fn is_kept(c: char) -> bool {
    is_cjk_ideograph(c) || c.is_ascii_alphanumeric() || c.is_whitespace()
}

/// Derive a filesystem- and URL-safe slug from a category phrase.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut in_whitespace = false;

    for c in input.to_lowercase().chars().filter(|c| is_kept(*c)) {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.push(c);
            in_whitespace = false;
        }
    }

    slug.chars().take(MAX_SLUG_CHARS).collect()
}
