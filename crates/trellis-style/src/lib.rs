#![forbid(unsafe_code)]

//! Variant and class-list resolution for Trellis.
//!
//! # Role in Trellis
//! `trellis-style` is the styling vocabulary of the starter kit: components
//! declare their variant axes once, and view code asks for the final class
//! list per render. Nothing here touches rendering or routing, so the crate
//! stays pure and independently testable.
//!
//! # This crate provides
//! - [`VariantSpec`] for declared axes, option sets, and per-axis defaults,
//!   validated eagerly when built.
//! - [`VariantRequest`] for partial axis-to-option selections.
//! - [`VariantRegistry`] for named specs across a component library.
//! - [`VariantError`] for the typed failure taxonomy.
//!
//! # How it fits in the system
//! The presentation layer resolves a request per render and passes the
//! returned string to whatever class attribute it is filling. Resolution is
//! deterministic and side-effect-free; specs can be shared across threads
//! without synchronization once built.

pub mod registry;
pub mod variant;

pub use registry::VariantRegistry;
pub use variant::{VariantError, VariantRequest, VariantSpec, VariantSpecBuilder};
