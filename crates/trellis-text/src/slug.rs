//! Slug generation for URL path segments.
//!
//! # Example
//! ```
//! use trellis_text::slugify;
//!
//! assert_eq!(slugify("  Hello, World!  "), "hello-world");
//! assert_eq!(slugify("A--B"), "a-b");
//! assert_eq!(slugify(""), "");
//! ```

/// Turn arbitrary text into a URL-safe slug.
///
/// Lowercases, then collapses every run of characters outside `[a-z0-9_]`
/// (whitespace, punctuation, hyphens, anything non-ASCII) into a single
/// hyphen, then strips leading and trailing hyphens. Total: empty input
/// yields empty output, and the result is always a valid slug.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_separator = false;
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_separator && !out.is_empty() {
                out.push('-');
            }
            pending_separator = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    out
}

/// Whether `text` is already in slug form.
///
/// True exactly when `slugify` would return the input unchanged: only
/// `[a-z0-9_-]`, no leading, trailing, or doubled hyphens. The empty string
/// is a slug.
#[must_use]
pub fn is_slug(text: &str) -> bool {
    !text.starts_with('-')
        && !text.ends_with('-')
        && !text.contains("--")
        && text
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}

/// Slugify with accent folding.
///
/// Decomposes to NFKD and drops combining marks before slugifying, so
/// accented letters survive as their base letter ("Café" → "cafe") instead
/// of collapsing into a separator.
#[cfg(feature = "folding")]
#[must_use]
pub fn slugify_folded(text: &str) -> String {
    use unicode_normalization::UnicodeNormalization;

    let folded: String = text
        .nfkd()
        .filter(|ch| !unicode_normalization::char::is_combining_mark(*ch))
        .collect();
    slugify(&folded)
}
