//! Locale-aware route tables and path resolution.
//!
//! A [`LocaleTable`] declares the supported locales, one default locale, and
//! a table of logical routes: per route id, a path template per locale.
//! Resolution picks the requested locale's template (falling back to the
//! default locale's when no override exists), substitutes `[segment]`
//! placeholders, and applies the prefix rule: paths for the default locale
//! are unprefixed, every other locale gets a `/{locale}` prefix unless the
//! localized path is on the exclusion list.
//!
//! Tables are validated when built: every route must carry a template for
//! the default locale, overrides may only name declared locales, and
//! placeholders must be well-formed. After that the table is immutable and
//! resolution can only fail on unknown inputs or missing segment values.
//!
//! # Example
//!
//! ```
//! use trellis_i18n::{Locale, LocaleTable};
//!
//! let table = LocaleTable::builder("en")
//!     .locale(Locale::new("en", "English"))
//!     .locale(Locale::new("nl", "Nederlands"))
//!     .route("pricing", [("en", "/pricing"), ("nl", "/prijzen")])
//!     .route("memories", [
//!         ("en", "/[collectionId]/memories/[slug]"),
//!         ("nl", "/[collectionId]/herinneringen/[slug]"),
//!     ])
//!     .build()?;
//!
//! assert_eq!(table.resolve("pricing", "en", &[])?, "/pricing");
//! assert_eq!(table.resolve("pricing", "nl", &[])?, "/nl/prijzen");
//!
//! let path = table.resolve("memories", "nl", &[("collectionId", "42"), ("slug", "zomer")])?;
//! assert_eq!(path, "/nl/42/herinneringen/zomer");
//! # Ok::<(), trellis_i18n::RouteError>(())
//! ```

use ahash::{AHashMap, AHashSet};
use thiserror::Error;

use crate::locale::Locale;

/// Validation and resolution failures for locale route tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The route id is not present in the table.
    #[error("unknown route `{route}`")]
    UnknownRoute { route: String },

    /// The locale code is not among the declared locales.
    #[error("unknown locale `{locale}`")]
    UnknownLocale { locale: String },

    /// The same locale code was declared twice.
    #[error("locale `{locale}` is declared twice")]
    DuplicateLocale { locale: String },

    /// A route carries no template for the default locale.
    #[error("route `{route}` has no path for default locale `{locale}`")]
    MissingDefaultPath { route: String, locale: String },

    /// A template's `[segment]` placeholders are malformed.
    #[error("route `{route}` has a malformed template `{template}` for locale `{locale}`")]
    InvalidTemplate {
        route: String,
        locale: String,
        template: String,
    },

    /// A template placeholder has no value in the segment map.
    #[error("missing value for segment `{segment}` of route `{route}`")]
    MissingSegment { route: String, segment: String },
}

/// An immutable, validated locale and route table.
///
/// Built once at startup via [`LocaleTable::builder`]; read-only afterwards,
/// so it can be shared across threads without synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleTable {
    locales: Vec<Locale>,
    default_locale: String,
    routes: AHashMap<String, AHashMap<String, String>>,
    prefix_exclusions: AHashSet<String>,
}

impl LocaleTable {
    /// Start building a table with the given default locale.
    #[must_use]
    pub fn builder(default_locale: impl Into<String>) -> LocaleTableBuilder {
        LocaleTableBuilder {
            locales: Vec::new(),
            default_locale: default_locale.into(),
            routes: Vec::new(),
            prefix_exclusions: Vec::new(),
        }
    }

    /// Declared locales, in declaration order.
    #[must_use]
    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    /// The default locale's code.
    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Whether `code` is a declared locale.
    #[must_use]
    pub fn is_locale(&self, code: &str) -> bool {
        self.locales.iter().any(|l| l.code() == code)
    }

    /// Whether the table declares `route`.
    #[must_use]
    pub fn has_route(&self, route: &str) -> bool {
        self.routes.contains_key(route)
    }

    /// Declared route ids, in no particular order.
    pub fn route_ids(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// Resolve the canonical path of `route` for `locale`.
    ///
    /// `segments` supplies values for `[segment]` placeholders; entries the
    /// template never mentions are ignored. The result is a normalized
    /// absolute path: no duplicate slashes, no trailing slash except root.
    /// Either the whole path resolves or a typed error is returned; no
    /// partially substituted path ever escapes.
    pub fn resolve(
        &self,
        route: &str,
        locale: &str,
        segments: &[(&str, &str)],
    ) -> Result<String, RouteError> {
        let Some(paths) = self.routes.get(route) else {
            return Err(RouteError::UnknownRoute {
                route: route.to_string(),
            });
        };
        if !self.is_locale(locale) {
            return Err(RouteError::UnknownLocale {
                locale: locale.to_string(),
            });
        }

        let template = match paths.get(locale) {
            Some(template) => template,
            None => {
                tracing::debug!(route, locale, "no localized path; using default locale's");
                paths
                    .get(self.default_locale.as_str())
                    .ok_or_else(|| RouteError::MissingDefaultPath {
                        route: route.to_string(),
                        locale: self.default_locale.clone(),
                    })?
            }
        };

        let localized = normalize_path(&substitute(route, locale, template, segments)?);
        if locale == self.default_locale || self.prefix_exclusions.contains(localized.as_str()) {
            return Ok(localized);
        }
        Ok(normalize_path(&format!("/{locale}{localized}")))
    }

    /// Resolve `route` for every declared locale, in declaration order.
    ///
    /// Useful for alternate-link generation. Fails like [`Self::resolve`]
    /// would for the first failing locale.
    pub fn resolve_all(
        &self,
        route: &str,
        segments: &[(&str, &str)],
    ) -> Result<Vec<(String, String)>, RouteError> {
        self.locales
            .iter()
            .map(|locale| {
                self.resolve(route, locale.code(), segments)
                    .map(|path| (locale.code().to_string(), path))
            })
            .collect()
    }
}

/// Builder for [`LocaleTable`], validating eagerly at [`build`](Self::build).
pub struct LocaleTableBuilder {
    locales: Vec<Locale>,
    default_locale: String,
    routes: Vec<(String, Vec<(String, String)>)>,
    prefix_exclusions: Vec<String>,
}

impl LocaleTableBuilder {
    /// Declare a supported locale. Declaration order is preserved.
    #[must_use]
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locales.push(locale);
        self
    }

    /// Declare a route with its `(locale, path template)` pairs.
    ///
    /// Declaring the same route id again merges, with later templates
    /// replacing earlier ones per locale.
    #[must_use]
    pub fn route<I, L, T>(mut self, id: impl Into<String>, paths: I) -> Self
    where
        I: IntoIterator<Item = (L, T)>,
        L: Into<String>,
        T: Into<String>,
    {
        let paths = paths
            .into_iter()
            .map(|(locale, template)| (locale.into(), template.into()))
            .collect();
        self.routes.push((id.into(), paths));
        self
    }

    /// Exempt a localized path from the `/{locale}` prefix.
    ///
    /// Matching happens against the localized, unprefixed path after
    /// normalization, so list every locale's spelling of the flow.
    #[must_use]
    pub fn exclude_from_prefix(mut self, path: impl Into<String>) -> Self {
        self.prefix_exclusions.push(path.into());
        self
    }

    /// Validate the declaration and produce an immutable [`LocaleTable`].
    pub fn build(self) -> Result<LocaleTable, RouteError> {
        let mut seen = AHashSet::with_capacity(self.locales.len());
        for locale in &self.locales {
            if !seen.insert(locale.code()) {
                return Err(RouteError::DuplicateLocale {
                    locale: locale.code().to_string(),
                });
            }
        }
        drop(seen);

        if !self.locales.iter().any(|l| l.code() == self.default_locale) {
            return Err(RouteError::UnknownLocale {
                locale: self.default_locale,
            });
        }

        let mut routes: AHashMap<String, AHashMap<String, String>> =
            AHashMap::with_capacity(self.routes.len());
        for (id, paths) in self.routes {
            let entry = routes.entry(id.clone()).or_default();
            for (locale, template) in paths {
                if !self.locales.iter().any(|l| l.code() == locale) {
                    return Err(RouteError::UnknownLocale { locale });
                }
                validate_template(&id, &locale, &template)?;
                entry.insert(locale, template);
            }
        }
        for (id, paths) in &routes {
            if !paths.contains_key(self.default_locale.as_str()) {
                return Err(RouteError::MissingDefaultPath {
                    route: id.clone(),
                    locale: self.default_locale.clone(),
                });
            }
        }

        let prefix_exclusions = self
            .prefix_exclusions
            .into_iter()
            .map(|path| normalize_path(&path))
            .collect();

        Ok(LocaleTable {
            locales: self.locales,
            default_locale: self.default_locale,
            routes,
            prefix_exclusions,
        })
    }
}

/// Check that every `[segment]` placeholder is balanced and named.
fn validate_template(route: &str, locale: &str, template: &str) -> Result<(), RouteError> {
    let invalid = || RouteError::InvalidTemplate {
        route: route.to_string(),
        locale: locale.to_string(),
        template: template.to_string(),
    };
    let mut rest = template;
    loop {
        match (rest.find('['), rest.find(']')) {
            (None, None) => return Ok(()),
            (Some(open), Some(close)) if open < close => {
                let name = &rest[open + 1..close];
                if name.is_empty() || name.contains('[') {
                    return Err(invalid());
                }
                rest = &rest[close + 1..];
            }
            _ => return Err(invalid()),
        }
    }
}

/// Substitute `[segment]` placeholders from the segment map.
///
/// Values are inserted literally; no residual `[...]` token survives a
/// successful substitution. Unused segment entries are ignored.
fn substitute(
    route: &str,
    locale: &str,
    template: &str,
    segments: &[(&str, &str)],
) -> Result<String, RouteError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('[') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find(']') else {
            // Unreachable for templates that passed build-time validation.
            return Err(RouteError::InvalidTemplate {
                route: route.to_string(),
                locale: locale.to_string(),
                template: template.to_string(),
            });
        };
        let name = &after[..close];
        let Some((_, value)) = segments.iter().find(|(key, _)| *key == name) else {
            return Err(RouteError::MissingSegment {
                route: route.to_string(),
                segment: name.to_string(),
            });
        };
        out.push_str(value);
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Collapse duplicate slashes, force a leading slash, and drop any trailing
/// slash except on the root path.
fn normalize_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 1);
    for part in path.split('/').filter(|p| !p.is_empty()) {
        out.push('/');
        out.push_str(part);
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}
