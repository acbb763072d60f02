use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::icon::IconDefinition;
use crate::name::to_pascal_case;

/// The icon registry: canonical icon names to their definitions.
///
/// Constructed once from the external dataset (a JSON object of
/// `name -> [tag, attrs, children]` entries) or from an iterator, and
/// treated as immutable for the rest of its life. Key insertion order
/// is irrelevant; lookups go through [`IconRegistry::resolve`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRegistry {
    icons: HashMap<String, IconDefinition>,
}

impl IconRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a registry from its JSON dataset form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Number of registered icons.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// True when no icons are registered.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Looks up a definition by its exact key.
    pub fn get(&self, name: &str) -> Option<&IconDefinition> {
        self.icons.get(name)
    }

    /// Resolves a human-typed name to a definition.
    ///
    /// Tries the exact key first so datasets keyed however the caller
    /// likes keep working, then falls back to the PascalCase canonical
    /// form (`circle-check` -> `CircleCheck`).
    pub fn resolve(&self, name: &str) -> Option<&IconDefinition> {
        self.icons
            .get(name)
            .or_else(|| self.icons.get(&to_pascal_case(name)))
    }

    /// Iterates the registered icon names in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(String::as_str)
    }
}

impl<K: Into<String>> FromIterator<(K, IconDefinition)> for IconRegistry {
    fn from_iter<I: IntoIterator<Item = (K, IconDefinition)>>(iter: I) -> Self {
        Self {
            icons: iter
                .into_iter()
                .map(|(name, def)| (name.into(), def))
                .collect(),
        }
    }
}
