//! Locale identity.

use std::fmt;

/// One supported locale: a BCP 47-ish code and a human-readable name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Locale {
    code: String,
    name: String,
}

impl Locale {
    /// A locale with the given code (`"en"`, `"nl"`) and display name.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// The locale code used in tables and URL prefixes.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The display name ("English", "Nederlands").
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
