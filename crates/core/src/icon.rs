use std::fmt;

use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::attrs::AttrMap;

/// One node of an icon's element tree.
///
/// The external dataset format is the tuple `[tag, attrs, children]`,
/// with each child recursively of the same shape. Definitions are built
/// once at registry-load time and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IconDefinition {
    /// Element tag name (`svg`, `path`, `circle`, ...).
    pub tag: String,
    /// Base attributes for this element.
    pub attrs: AttrMap,
    /// Child elements, in document order.
    pub children: Vec<IconDefinition>,
}

impl IconDefinition {
    /// Creates a childless definition node.
    pub fn new(tag: impl Into<String>, attrs: AttrMap) -> Self {
        Self {
            tag: tag.into(),
            attrs,
            children: Vec::new(),
        }
    }

    /// Creates a definition node with children.
    pub fn with_children(
        tag: impl Into<String>,
        attrs: AttrMap,
        children: Vec<IconDefinition>,
    ) -> Self {
        Self {
            tag: tag.into(),
            attrs,
            children,
        }
    }
}

impl Serialize for IconDefinition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Leaf nodes serialize as two-tuples, matching the upstream
        // dataset where childless entries omit the child list.
        let len = if self.children.is_empty() { 2 } else { 3 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.tag)?;
        seq.serialize_element(&self.attrs)?;
        if !self.children.is_empty() {
            seq.serialize_element(&self.children)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for IconDefinition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TupleVisitor;

        impl<'de> Visitor<'de> for TupleVisitor {
            type Value = IconDefinition;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an icon definition tuple [tag, attrs, children]")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<IconDefinition, A::Error> {
                let tag: String = seq
                    .next_element()?
                    .ok_or_else(|| serde::de::Error::invalid_length(0, &self))?;
                let attrs: AttrMap = seq.next_element()?.unwrap_or_default();
                let children: Vec<IconDefinition> = seq.next_element()?.unwrap_or_default();
                Ok(IconDefinition {
                    tag,
                    attrs,
                    children,
                })
            }
        }

        deserializer.deserialize_seq(TupleVisitor)
    }
}
