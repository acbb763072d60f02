#![deny(missing_docs)]
//! Ikona core: icon definitions, the icon registry, and the name,
//! class, and attribute merge helpers hydration is built on.

/// Insertion-ordered attribute maps with explicit precedence merging.
pub mod attrs;
/// Class attribute sources and order-preserving class merging.
pub mod class;
/// Icon definition trees and their dataset tuple encoding.
pub mod icon;
/// Icon name casing helpers.
pub mod name;
/// The icon registry and its lookup policy.
pub mod registry;

pub use attrs::{AttrMap, AttrValue};
pub use class::{ClassValue, merge_class_values};
pub use icon::IconDefinition;
pub use name::{to_kebab_case, to_pascal_case};
pub use registry::IconRegistry;
