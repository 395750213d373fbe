//! Article Builder - derives slug, title and timestamp for generated content

use chrono::Utc;
use regex::Regex;
use std::sync::LazyLock;

use crate::models::NewArticle;

/// Title used when generated content has no top-level heading
pub const DEFAULT_TITLE: &str = "Generated Article";

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

// First line of the form `# Title`; CRLF-aware.
static TOP_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^#\s+(.+)$").unwrap());

/// Lowercase `title` and collapse every run of characters outside `[a-z0-9]`
/// into a single `-`.
///
/// Leading and trailing hyphens are kept, so `"Hello, World!"` becomes
/// `"hello-world-"`. Non-ASCII letters survive lowercasing but then fall
/// outside the allowed set.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    NON_SLUG_CHARS.replace_all(&lowered, "-").into_owned()
}

/// Text of the first `# ` heading in `content`, if any.
pub fn extract_title(content: &str) -> Option<&str> {
    TOP_HEADING
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Build an article for the batch flow: the caller's title is authoritative.
pub fn build(title: &str, details: &str, content: String) -> NewArticle {
    NewArticle {
        title: title.to_string(),
        slug: slugify(title),
        details: details.to_string(),
        content,
        created_at: Utc::now(),
    }
}

/// Build an article for the single-prompt flow: the title comes from the
/// generated content and the prompt is kept as details.
pub fn build_from_prompt(prompt: &str, content: String) -> NewArticle {
    let title = extract_title(&content).unwrap_or(DEFAULT_TITLE).to_string();
    NewArticle {
        slug: slugify(&title),
        title,
        details: prompt.to_string(),
        content,
        created_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_examples() {
        assert_eq!(slugify("Hello, World! 2024"), "hello-world-2024");
        assert_eq!(slugify("Hello, World!"), "hello-world-");
        assert_eq!(slugify("  Leading space"), "-leading-space");
        assert_eq!(slugify("already-a-slug"), "already-a-slug");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_slugify_is_deterministic() {
        let title = "Async Rust: Pin & Unpin";
        assert_eq!(slugify(title), slugify(title));
        assert_eq!(slugify(title), "async-rust-pin-unpin");
    }

    #[test]
    fn test_slugify_non_ascii_collapses() {
        assert_eq!(slugify("Café Société"), "caf-soci-t-");
        assert_eq!(slugify("ÜBER"), "-ber");
    }

    #[test]
    fn test_extract_title_first_heading() {
        let content = "Intro line\n# First Title\n\n# Second Title\n";
        assert_eq!(extract_title(content), Some("First Title"));
    }

    #[test]
    fn test_extract_title_ignores_subheadings() {
        assert_eq!(extract_title("## Sub\n### Deeper"), None);
        assert_eq!(extract_title("#NoSpace"), None);
    }

    #[test]
    fn test_extract_title_handles_crlf() {
        assert_eq!(extract_title("# Windows Title\r\nbody"), Some("Windows Title"));
    }

    #[test]
    fn test_build_from_prompt_falls_back_to_default_title() {
        let article = build_from_prompt("write something", "no heading here".to_string());
        assert_eq!(article.title, DEFAULT_TITLE);
        assert_eq!(article.slug, "generated-article");
        assert_eq!(article.details, "write something");
    }

    #[test]
    fn test_build_uses_caller_title() {
        let article = build("Rust Traits", "", "# Something Else".to_string());
        assert_eq!(article.title, "Rust Traits");
        assert_eq!(article.slug, "rust-traits");
        assert_eq!(article.details, "");
    }
}
