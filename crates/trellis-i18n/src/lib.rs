#![forbid(unsafe_code)]

//! Internationalization (i18n) foundation for Trellis.
//!
//! Locale-aware route resolution and message tables for the starter kit:
//! logical route ids map to per-locale path templates with `[segment]`
//! placeholders, and message catalogs resolve dotted keys with locale
//! fallback, `{name}` interpolation, and pipe-separated plural forms.
//!
//! # Role in Trellis
//! `trellis-i18n` isolates localization concerns so the view and routing
//! layers stay deterministic while supporting multiple languages. Tables are
//! built and validated once at startup and are read-only afterwards.
//!
//! # How it fits in the system
//! The routing layer calls [`LocaleTable::resolve`] to build navigable
//! links; the view layer calls [`MessageCatalog::format`] for user-facing
//! text. Neither depends on rendering or transport, keeping the layer
//! reusable and testable.

pub mod catalog;
pub mod locale;
pub mod routes;

pub use catalog::{CoverageReport, LocaleCoverage, MessageCatalog, Messages};
pub use locale::Locale;
pub use routes::{LocaleTable, LocaleTableBuilder, RouteError};
