//! Property-based invariant tests for slug generation.
//!
//! Verifies structural guarantees of `slugify`:
//!
//! 1. Output alphabet is `[a-z0-9_-]`
//! 2. No leading, trailing, or doubled hyphens
//! 3. slugify is idempotent
//! 4. Every output passes is_slug
//! 5. slugify is deterministic

use proptest::prelude::*;
use trellis_text::{is_slug, slugify};

// ═════════════════════════════════════════════════════════════════════════
// 1. Output alphabet is [a-z0-9_-]
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn output_alphabet_is_bounded(text in ".*") {
        let slug = slugify(&text);
        prop_assert!(
            slug.chars().all(|c| c.is_ascii_lowercase()
                || c.is_ascii_digit()
                || c == '_'
                || c == '-'),
            "`{}` contains a character outside the slug alphabet",
            slug
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. No leading, trailing, or doubled hyphens
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hyphens_are_single_and_interior(text in ".*") {
        let slug = slugify(&text);
        prop_assert!(!slug.starts_with('-'), "`{}` starts with a hyphen", slug);
        prop_assert!(!slug.ends_with('-'), "`{}` ends with a hyphen", slug);
        prop_assert!(!slug.contains("--"), "`{}` contains a doubled hyphen", slug);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. slugify is idempotent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn slugify_is_idempotent(text in ".*") {
        let once = slugify(&text);
        prop_assert_eq!(slugify(&once), once.clone());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Every output passes is_slug
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn outputs_are_slugs(text in ".*") {
        prop_assert!(is_slug(&slugify(&text)));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. slugify is deterministic
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn slugify_is_deterministic(text in ".*") {
        prop_assert_eq!(slugify(&text), slugify(&text));
    }
}
