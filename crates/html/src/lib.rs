#![deny(missing_docs)]
//! Ikona HTML engine: replaces icon placeholders in a document with
//! rendered icon element trees, driven by an icon registry.

/// Parallel hydration of many documents.
pub mod batch;
/// The fatal error taxonomy.
pub mod error;
/// The hydration pass itself.
pub mod hydrate;
/// Definition-tree to markup rendering.
pub mod render;

pub use batch::{BatchInput, BatchOptions, BatchOutcome, BatchResult, BatchStats, hydrate_batch};
pub use error::HydrateError;
pub use hydrate::{
    DEFAULT_NAME_ATTR, DEPRECATED_NAME_ATTR, Hydrated, HydrateOptions, HydrateReport, KIND_CLASS,
    UnresolvedIcon, hydrate,
};
pub use render::render_icon;
