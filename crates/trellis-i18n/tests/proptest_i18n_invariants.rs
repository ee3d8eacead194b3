//! Property-based invariant tests for the i18n subsystem.
//!
//! Verifies structural guarantees of route resolution and the message
//! catalog:
//!
//! 1.  Default-locale resolution never carries a locale prefix
//! 2.  Routes declared only for the default locale resolve for every locale
//! 3.  Resolved paths are always normalized
//! 4.  Fully-supplied substitution leaves no placeholder tokens
//! 5.  Unknown locales always fail with UnknownLocale
//! 6.  Unknown routes always fail with UnknownRoute
//! 7.  Interpolation with no placeholders is identity
//! 8.  Interpolation is not recursive
//! 9.  Missing args leave placeholder tokens intact
//! 10. Catalog: missing key always returns None
//! 11. format_count injects {count}
//! 12. Coverage percentages are bounded and consistent

use proptest::prelude::*;
use trellis_i18n::{Locale, LocaleTable, MessageCatalog, Messages, RouteError};

// ── Helpers ──────────────────────────────────────────────────────────

fn locale_codes() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-z]{2,3}", 2..5).prop_map(|codes| codes.into_iter().collect())
}

fn path_parts() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z0-9]{1,6}", 0..4)
}

fn build_table(codes: &[String], template: &str) -> LocaleTable {
    let mut builder = LocaleTable::builder(codes[0].clone());
    for code in codes {
        builder = builder.locale(Locale::new(code.clone(), code.to_uppercase()));
    }
    builder
        .route("page", [(codes[0].clone(), template.to_string())])
        .build()
        .expect("generated table is valid")
}

fn canonical(parts: &[String]) -> String {
    if parts.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", parts.join("/"))
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Default-locale resolution never carries a locale prefix
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn default_locale_is_unprefixed(codes in locale_codes(), parts in path_parts()) {
        let table = build_table(&codes, &format!("/{}", parts.join("/")));
        let resolved = table.resolve("page", &codes[0], &[]).unwrap();
        prop_assert_eq!(resolved, canonical(&parts));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Default-only routes resolve for every locale (fallback + prefix)
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fallback_serves_every_locale(codes in locale_codes(), parts in path_parts()) {
        let table = build_table(&codes, &format!("/{}", parts.join("/")));
        let base = canonical(&parts);
        for code in &codes[1..] {
            let resolved = table.resolve("page", code, &[]).unwrap();
            let expected = if base == "/" {
                format!("/{code}")
            } else {
                format!("/{code}{base}")
            };
            prop_assert_eq!(resolved, expected);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Resolved paths are always normalized
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resolved_paths_are_normalized(codes in locale_codes(), parts in path_parts()) {
        // Build the template with deliberately messy slashes.
        let template = format!("//{}//", parts.join("//"));
        let table = build_table(&codes, &template);
        for code in &codes {
            let resolved = table.resolve("page", code, &[]).unwrap();
            prop_assert!(resolved.starts_with('/'), "`{}` should be absolute", resolved);
            prop_assert!(!resolved.contains("//"), "`{}` has duplicate slashes", resolved);
            prop_assert!(
                resolved == "/" || !resolved.ends_with('/'),
                "`{}` has a trailing slash",
                resolved
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Fully-supplied substitution leaves no placeholder tokens
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn substitution_is_complete(
        codes in locale_codes(),
        id in "[a-z0-9]{1,8}",
        slug in "[a-z0-9-]{1,12}",
    ) {
        let table = build_table(&codes, "/[id]/memories/[slug]");
        for code in &codes {
            let resolved = table
                .resolve("page", code, &[("id", id.as_str()), ("slug", slug.as_str())])
                .unwrap();
            prop_assert!(!resolved.contains('['), "`{}` kept a placeholder", resolved);
            prop_assert!(!resolved.contains(']'), "`{}` kept a placeholder", resolved);
            prop_assert!(resolved.contains(id.as_str()));
            prop_assert!(resolved.contains(slug.as_str()));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Unknown locales always fail with UnknownLocale
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn unknown_locale_fails_typed(codes in locale_codes(), bogus in "[A-Z]{2,4}") {
        // Declared codes are lowercase; an uppercase code cannot collide.
        let table = build_table(&codes, "/page");
        prop_assert_eq!(
            table.resolve("page", &bogus, &[]),
            Err(RouteError::UnknownLocale { locale: bogus.clone() })
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Unknown routes always fail with UnknownRoute
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn unknown_route_fails_typed(codes in locale_codes(), bogus in "[A-Z]{2,8}") {
        let table = build_table(&codes, "/page");
        prop_assert_eq!(
            table.resolve(&bogus, &codes[0], &[]),
            Err(RouteError::UnknownRoute { route: bogus.clone() })
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Interpolation with no placeholders is identity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn interpolation_no_placeholders_identity(text in "[a-zA-Z0-9 .,!?]*") {
        let mut catalog = MessageCatalog::new("en");
        let mut en = Messages::new();
        en.insert("test", text.as_str());
        catalog.add_locale("en", en);
        let result = catalog.format("en", "test", &[]);
        prop_assert_eq!(result.as_deref(), Some(text.as_str()));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Interpolation is not recursive
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn interpolation_not_recursive() {
    let mut catalog = MessageCatalog::new("en");
    let mut en = Messages::new();
    en.insert("test", "Hello {name}!");
    catalog.add_locale("en", en);

    // A value that itself contains a placeholder must not be re-expanded.
    let result = catalog.format("en", "test", &[("name", "{name}")]);
    assert_eq!(result, Some("Hello {name}!".into()));

    let result = catalog.format("en", "test", &[("name", "{other}")]);
    assert_eq!(result, Some("Hello {other}!".into()));
}

// ═════════════════════════════════════════════════════════════════════════
// 9. Missing args leave placeholder tokens intact
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn missing_args_preserve_tokens(name in "[a-z]{1,10}") {
        let template = format!("Value: {{{name}}}");
        let mut catalog = MessageCatalog::new("en");
        let mut en = Messages::new();
        en.insert("test", template.as_str());
        catalog.add_locale("en", en);
        let result = catalog.format("en", "test", &[]);
        prop_assert_eq!(result, Some(template.clone()));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 10. Missing key returns None
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn missing_key_returns_none(key in "[a-z.]{1,20}") {
        let catalog = MessageCatalog::new("en");
        prop_assert_eq!(catalog.get("en", &key), None);
        prop_assert_eq!(catalog.format("en", &key, &[]), None);
        prop_assert_eq!(catalog.format_count("en", &key, 1, &[]), None);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 11. format_count injects {count}
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn format_count_injects_count(count in -1000i64..=1000) {
        let mut catalog = MessageCatalog::new("en");
        let mut en = Messages::new();
        en.insert("items", "{count} item | {count} items");
        catalog.add_locale("en", en);

        let text = catalog.format_count("en", "items", count, &[]).unwrap();
        prop_assert!(
            text.contains(&count.to_string()),
            "`{}` should contain count `{}`",
            text,
            count
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 12. Coverage percentages are bounded and consistent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn coverage_is_bounded(n_keys in 0usize..=10, n_locales in 1usize..=3) {
        let mut catalog = MessageCatalog::new("l0");
        for locale_index in 0..n_locales {
            let mut messages = Messages::new();
            // Each locale translates a subset of the keys.
            for key_index in 0..n_keys {
                if key_index % (locale_index + 1) == 0 {
                    messages.insert(format!("key_{key_index}"), format!("val_{key_index}"));
                }
            }
            catalog.add_locale(format!("l{locale_index}"), messages);
        }

        let report = catalog.coverage();
        for coverage in &report.locales {
            prop_assert!(
                (0.0..=100.0).contains(&coverage.coverage_percent),
                "coverage {} out of bounds for locale {}",
                coverage.coverage_percent,
                coverage.locale
            );
            prop_assert!(
                coverage.present + coverage.missing.len() == report.total_keys,
                "present ({}) + missing ({}) != total ({})",
                coverage.present,
                coverage.missing.len(),
                report.total_keys
            );
        }
    }
}
