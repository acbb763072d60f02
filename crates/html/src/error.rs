use lol_html::errors::{RewritingError, SelectorError};
use thiserror::Error;

/// Errors that abort a hydration pass.
///
/// These are caller misconfigurations or unusable documents; both stop
/// the whole pass before any output is produced. Per-element problems
/// (an unknown icon name) are never errors: they are logged, recorded
/// in the report, and the element is left untouched.
#[derive(Debug, Error)]
pub enum HydrateError {
    /// The supplied registry holds no icons.
    #[error("icon registry is empty: hydration requires at least one icon definition")]
    EmptyRegistry,
    /// The configured name attribute cannot form an attribute selector.
    #[error("invalid name attribute `{attr}`: {source}")]
    InvalidNameAttr {
        /// The attribute name as configured.
        attr: String,
        /// Selector parse failure.
        source: SelectorError,
    },
    /// The rewriter rejected the document.
    #[error("failed to rewrite document: {0}")]
    Rewrite(#[from] RewritingError),
}
