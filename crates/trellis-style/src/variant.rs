//! Declarative variant axes and class-list resolution.
//!
//! A [`VariantSpec`] declares the style axes of a component (for a button:
//! `variant` and `size`), the closed option set of each axis, and a default
//! option per axis. Resolution takes a partial [`VariantRequest`] and
//! produces the final space-joined class list, with omitted axes filled in
//! from the declared defaults.
//!
//! Specs are validated when built and immutable afterwards, so a resolved
//! class list can only fail on an option key outside an axis's option set.
//!
//! # Example
//!
//! ```
//! use trellis_style::{VariantRequest, VariantSpec};
//!
//! let button = VariantSpec::builder()
//!     .base("inline-flex items-center")
//!     .axis("variant", [("default", "bg-primary"), ("outline", "border")])
//!     .axis("size", [("default", "h-12 px-6"), ("lg", "h-14 px-8")])
//!     .default_option("variant", "default")
//!     .default_option("size", "default")
//!     .build()?;
//!
//! assert_eq!(button.resolve_default(), "inline-flex items-center bg-primary h-12 px-6");
//!
//! let outline = button.resolve(&VariantRequest::new().with("variant", "outline"))?;
//! assert_eq!(outline, "inline-flex items-center border h-12 px-6");
//! # Ok::<(), trellis_style::VariantError>(())
//! ```

use ahash::AHashSet;
use thiserror::Error;

/// Validation and resolution failures for variant specs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariantError {
    /// An axis was declared with zero options; it could never resolve.
    #[error("axis `{axis}` declares no options")]
    EmptyAxis { axis: String },

    /// An axis was declared without a default option.
    #[error("axis `{axis}` has no default option")]
    MissingDefault { axis: String },

    /// A default names an axis that was never declared.
    #[error("unknown axis `{axis}`")]
    UnknownAxis { axis: String },

    /// An option key is not a member of its axis's option set.
    #[error("unknown option `{option}` for axis `{axis}`")]
    UnknownOption { axis: String, option: String },

    /// The same axis was declared twice.
    #[error("axis `{axis}` is declared twice")]
    DuplicateAxis { axis: String },

    /// The same option key was declared twice on one axis.
    #[error("option `{option}` is declared twice on axis `{axis}`")]
    DuplicateOption { axis: String, option: String },

    /// A registry lookup named a component that was never registered.
    #[error("unknown component `{name}`")]
    UnknownComponent { name: String },
}

/// One option of an axis: a key and the class fragment it contributes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
struct AxisOption {
    key: String,
    fragment: String,
}

/// A named style dimension with a closed option set and a default.
///
/// `default` indexes into `options`; the builder guarantees it is in range.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
struct Axis {
    name: String,
    options: Vec<AxisOption>,
    default: usize,
}

impl Axis {
    fn option(&self, key: &str) -> Option<&AxisOption> {
        self.options.iter().find(|o| o.key == key)
    }
}

/// An immutable, validated variant declaration for one component.
///
/// Axis declaration order is significant: fragments appear in the output in
/// the order their axes were declared, after the base fragments. Build one
/// with [`VariantSpec::builder`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VariantSpec {
    base: Vec<String>,
    axes: Vec<Axis>,
}

impl VariantSpec {
    /// Start building a spec.
    #[must_use]
    pub fn builder() -> VariantSpecBuilder {
        VariantSpecBuilder::new()
    }

    /// Axis names in declaration order.
    pub fn axis_names(&self) -> impl Iterator<Item = &str> {
        self.axes.iter().map(|a| a.name.as_str())
    }

    /// Option keys of `axis` in declaration order, or `None` for an
    /// undeclared axis.
    pub fn options(&self, axis: &str) -> Option<impl Iterator<Item = &str>> {
        self.axes
            .iter()
            .find(|a| a.name == axis)
            .map(|a| a.options.iter().map(|o| o.key.as_str()))
    }

    /// The declared default option key of `axis`.
    #[must_use]
    pub fn default_of(&self, axis: &str) -> Option<&str> {
        self.axes
            .iter()
            .find(|a| a.name == axis)
            .map(|a| a.options[a.default].key.as_str())
    }

    /// Resolve a request into the final class list.
    ///
    /// Axes omitted from the request use their declared default. A request
    /// entry for an axis this spec never declared is ignored (with a
    /// warning), matching the tolerance the route resolver extends to unused
    /// segment values. An option key outside its axis's option set fails with
    /// [`VariantError::UnknownOption`]; no partial class list is returned.
    pub fn resolve(&self, request: &VariantRequest) -> Result<String, VariantError> {
        for (axis, _) in request.entries() {
            if !self.axes.iter().any(|a| a.name == axis) {
                tracing::warn!(axis, "variant request names an undeclared axis; ignoring");
            }
        }

        let mut fragments: Vec<&str> = Vec::with_capacity(self.base.len() + self.axes.len());
        fragments.extend(self.base.iter().map(String::as_str));
        for axis in &self.axes {
            let option = match request.get(&axis.name) {
                Some(key) => {
                    let Some(option) = axis.option(key) else {
                        return Err(VariantError::UnknownOption {
                            axis: axis.name.clone(),
                            option: key.to_string(),
                        });
                    };
                    option
                }
                None => &axis.options[axis.default],
            };
            fragments.push(&option.fragment);
        }
        Ok(join_fragments(&fragments))
    }

    /// Resolve with every axis at its declared default.
    ///
    /// Equivalent to `resolve(&VariantRequest::new())`, but infallible: the
    /// builder already proved every default valid.
    #[must_use]
    pub fn resolve_default(&self) -> String {
        let mut fragments: Vec<&str> = Vec::with_capacity(self.base.len() + self.axes.len());
        fragments.extend(self.base.iter().map(String::as_str));
        for axis in &self.axes {
            fragments.push(&axis.options[axis.default].fragment);
        }
        join_fragments(&fragments)
    }
}

/// Join fragments with single spaces, skipping empty contributions.
fn join_fragments(fragments: &[&str]) -> String {
    let mut out = String::new();
    for fragment in fragments.iter().filter(|f| !f.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(fragment);
    }
    out
}

/// A partial axis-to-option mapping to resolve against a [`VariantSpec`].
///
/// Insertion order never affects resolution output; requesting the same axis
/// twice keeps the later option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VariantRequest {
    entries: Vec<(String, String)>,
}

impl VariantRequest {
    /// An empty request: every axis resolves to its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request `option` for `axis`, replacing any earlier entry for it.
    #[must_use]
    pub fn with(mut self, axis: impl Into<String>, option: impl Into<String>) -> Self {
        let axis = axis.into();
        let option = option.into();
        if let Some(entry) = self.entries.iter_mut().find(|(a, _)| *a == axis) {
            entry.1 = option;
        } else {
            self.entries.push((axis, option));
        }
        self
    }

    /// The requested option for `axis`, if any.
    #[must_use]
    pub fn get(&self, axis: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(a, _)| a == axis)
            .map(|(_, o)| o.as_str())
    }

    /// Whether no axis has been requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Requested `(axis, option)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(a, o)| (a.as_str(), o.as_str()))
    }
}

impl<A: Into<String>, O: Into<String>> FromIterator<(A, O)> for VariantRequest {
    fn from_iter<I: IntoIterator<Item = (A, O)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |request, (axis, option)| request.with(axis, option))
    }
}

struct PendingAxis {
    name: String,
    options: Vec<AxisOption>,
    default: Option<usize>,
}

/// Builder for [`VariantSpec`], validating eagerly at [`build`](Self::build).
#[derive(Default)]
pub struct VariantSpecBuilder {
    base: Vec<String>,
    axes: Vec<(String, Vec<AxisOption>)>,
    defaults: Vec<(String, String)>,
}

impl VariantSpecBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Append an axis-independent fragment, emitted before any axis fragment.
    #[must_use]
    pub fn base(mut self, fragment: impl Into<String>) -> Self {
        self.base.push(fragment.into());
        self
    }

    /// Declare an axis with its `(option key, fragment)` pairs.
    ///
    /// Axis declaration order fixes the output fragment order.
    #[must_use]
    pub fn axis<N, I, K, F>(mut self, name: N, options: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (K, F)>,
        K: Into<String>,
        F: Into<String>,
    {
        let options = options
            .into_iter()
            .map(|(key, fragment)| AxisOption {
                key: key.into(),
                fragment: fragment.into(),
            })
            .collect();
        self.axes.push((name.into(), options));
        self
    }

    /// Declare the default option of an axis. Declaring it again replaces
    /// the earlier choice.
    #[must_use]
    pub fn default_option(mut self, axis: impl Into<String>, option: impl Into<String>) -> Self {
        self.defaults.push((axis.into(), option.into()));
        self
    }

    /// Validate the declaration and produce an immutable [`VariantSpec`].
    ///
    /// Fails when an axis is empty or declared twice, when an option key is
    /// repeated within an axis, when a default names an unknown axis or
    /// option, or when an axis ends up without a default.
    pub fn build(self) -> Result<VariantSpec, VariantError> {
        let mut pending: Vec<PendingAxis> = Vec::with_capacity(self.axes.len());
        for (name, options) in self.axes {
            if pending.iter().any(|a| a.name == name) {
                return Err(VariantError::DuplicateAxis { axis: name });
            }
            if options.is_empty() {
                return Err(VariantError::EmptyAxis { axis: name });
            }
            let mut seen = AHashSet::with_capacity(options.len());
            for option in &options {
                if !seen.insert(option.key.as_str()) {
                    return Err(VariantError::DuplicateOption {
                        axis: name,
                        option: option.key.clone(),
                    });
                }
            }
            drop(seen);
            pending.push(PendingAxis {
                name,
                options,
                default: None,
            });
        }

        for (axis_name, option_key) in self.defaults {
            let Some(axis) = pending.iter_mut().find(|a| a.name == axis_name) else {
                return Err(VariantError::UnknownAxis { axis: axis_name });
            };
            let Some(index) = axis.options.iter().position(|o| o.key == option_key) else {
                return Err(VariantError::UnknownOption {
                    axis: axis_name,
                    option: option_key,
                });
            };
            axis.default = Some(index);
        }

        let mut axes = Vec::with_capacity(pending.len());
        for axis in pending {
            let Some(default) = axis.default else {
                return Err(VariantError::MissingDefault { axis: axis.name });
            };
            axes.push(Axis {
                name: axis.name,
                options: axis.options,
                default,
            });
        }

        Ok(VariantSpec {
            base: self.base,
            axes,
        })
    }
}
