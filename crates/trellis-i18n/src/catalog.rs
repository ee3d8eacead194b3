//! Message tables with locale fallback, interpolation, and plural forms.
//!
//! A [`MessageCatalog`] holds one [`Messages`] table per locale, keyed by
//! dotted message ids (`"account.billing.view_plans"`). Lookups try the
//! requested locale first and fall back to the default locale, so partially
//! translated locales stay usable while translation catches up; the
//! [`coverage`](MessageCatalog::coverage) report says how far behind each
//! locale is.
//!
//! Message text may contain `{name}` placeholders filled by
//! [`format`](MessageCatalog::format), and pipe-separated plural forms
//! (`"Profile | Profiles"`) selected by
//! [`format_count`](MessageCatalog::format_count).

use ahash::AHashMap;

/// One locale's message table: dotted key → message text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Messages {
    entries: AHashMap<String, String>,
}

impl Messages {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a message, replacing any earlier text under the same key.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    /// The raw message text under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of messages in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Message keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Messages {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut messages = Self::new();
        for (key, text) in iter {
            messages.insert(key, text);
        }
        messages
    }
}

/// Per-locale message tables with default-locale fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageCatalog {
    default_locale: String,
    locales: AHashMap<String, Messages>,
}

impl MessageCatalog {
    /// An empty catalog that falls back to `default_locale`.
    pub fn new(default_locale: impl Into<String>) -> Self {
        Self {
            default_locale: default_locale.into(),
            locales: AHashMap::new(),
        }
    }

    /// The fallback locale's code.
    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Add (or replace) a locale's message table.
    pub fn add_locale(&mut self, code: impl Into<String>, messages: Messages) {
        self.locales.insert(code.into(), messages);
    }

    /// Whether a table exists for `code`.
    #[must_use]
    pub fn has_locale(&self, code: &str) -> bool {
        self.locales.contains_key(code)
    }

    /// Raw message text: requested locale first, then the default locale.
    #[must_use]
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        if let Some(text) = self.locales.get(locale).and_then(|m| m.get(key)) {
            return Some(text);
        }
        if locale != self.default_locale {
            tracing::debug!(locale, key, "message missing; using default locale");
            return self
                .locales
                .get(self.default_locale.as_str())
                .and_then(|m| m.get(key));
        }
        None
    }

    /// Look up a message and fill `{name}` placeholders from `args`.
    ///
    /// Substitution is a single pass: values are inserted literally and never
    /// re-expanded. Placeholders with no matching arg are kept verbatim, so a
    /// missing value is visible instead of silently dropped.
    #[must_use]
    pub fn format(&self, locale: &str, key: &str, args: &[(&str, &str)]) -> Option<String> {
        self.get(locale, key).map(|text| interpolate(text, args))
    }

    /// Look up a pluralized message, select the form for `count`, and fill
    /// placeholders.
    ///
    /// Forms are pipe-separated: one form is used as-is; two forms are
    /// singular/plural with the singular at a count of one; three forms are
    /// zero/one/many. Negative
    /// counts select by absolute value. `{count}` is filled automatically
    /// unless `args` already supplies it.
    #[must_use]
    pub fn format_count(
        &self,
        locale: &str,
        key: &str,
        count: i64,
        args: &[(&str, &str)],
    ) -> Option<String> {
        let text = self.get(locale, key)?;
        let form = select_plural(text, count);
        let count_value = count.to_string();
        let mut all: Vec<(&str, &str)> = args.to_vec();
        all.push(("count", count_value.as_str()));
        Some(interpolate(form, &all))
    }

    /// Translation coverage of every locale against the default locale's
    /// key set. Locales and missing keys are reported in sorted order.
    #[must_use]
    pub fn coverage(&self) -> CoverageReport {
        let mut default_keys: Vec<&str> = self
            .locales
            .get(self.default_locale.as_str())
            .map(|m| m.keys().collect())
            .unwrap_or_default();
        default_keys.sort_unstable();
        let total_keys = default_keys.len();

        let mut locales: Vec<LocaleCoverage> = self
            .locales
            .iter()
            .map(|(code, messages)| {
                let missing: Vec<String> = default_keys
                    .iter()
                    .filter(|&&key| messages.get(key).is_none())
                    .map(|&key| key.to_string())
                    .collect();
                let present = total_keys - missing.len();
                let coverage_percent = if total_keys == 0 {
                    100.0
                } else {
                    present as f64 * 100.0 / total_keys as f64
                };
                LocaleCoverage {
                    locale: code.clone(),
                    present,
                    missing,
                    coverage_percent,
                }
            })
            .collect();
        locales.sort_by(|a, b| a.locale.cmp(&b.locale));

        CoverageReport {
            total_keys,
            locales,
        }
    }
}

/// Coverage of one locale against the default locale's key set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LocaleCoverage {
    /// Locale code.
    pub locale: String,
    /// How many of the default locale's keys this locale translates.
    pub present: usize,
    /// Default-locale keys with no translation here, sorted.
    pub missing: Vec<String>,
    /// `present` as a percentage of the total key count; 100 when the
    /// default locale declares no keys.
    pub coverage_percent: f64,
}

/// Catalog-wide coverage summary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CoverageReport {
    /// Size of the default locale's key set.
    pub total_keys: usize,
    /// Per-locale coverage, sorted by locale code.
    pub locales: Vec<LocaleCoverage>,
}

/// Fill `{name}` placeholders in a single left-to-right pass.
fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match args.iter().find(|(key, _)| *key == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Select a pipe-separated plural form for `count`.
fn select_plural(message: &str, count: i64) -> &str {
    let forms: Vec<&str> = message.split('|').map(str::trim).collect();
    let n = count.unsigned_abs();
    let index = match forms.len() {
        1 => 0,
        2 => usize::from(n != 1),
        _ => match n {
            0 => 0,
            1 => 1,
            _ => 2,
        },
    };
    forms[index]
}
