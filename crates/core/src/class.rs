/// A class attribute source.
///
/// Callers hand class lists around as a plain string, a list of tokens,
/// or nothing at all; the variants capture that shape once so the merge
/// logic never type-sniffs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClassValue {
    /// No classes.
    #[default]
    None,
    /// A single space-separated class string.
    Single(String),
    /// A list of class tokens (each item may itself hold spaces).
    Many(Vec<String>),
}

impl ClassValue {
    /// Iterates the individual class tokens of this source.
    ///
    /// `Single` strings and every `Many` item are split on ASCII
    /// whitespace, so `Single("a b")` and `Many(["a", "b"])` yield the
    /// same tokens.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        let items: &[String] = match self {
            ClassValue::None => &[],
            ClassValue::Single(s) => std::slice::from_ref(s),
            ClassValue::Many(items) => items,
        };
        items.iter().flat_map(|item| item.split_whitespace())
    }
}

impl From<&str> for ClassValue {
    fn from(value: &str) -> Self {
        ClassValue::Single(value.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(value: String) -> Self {
        ClassValue::Single(value)
    }
}

impl From<Option<String>> for ClassValue {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(s) => ClassValue::Single(s),
            None => ClassValue::None,
        }
    }
}

impl From<Vec<String>> for ClassValue {
    fn from(value: Vec<String>) -> Self {
        ClassValue::Many(value)
    }
}

impl From<&[&str]> for ClassValue {
    fn from(value: &[&str]) -> Self {
        ClassValue::Many(value.iter().map(|s| s.to_string()).collect())
    }
}

/// Combines class sources into one space-joined class string.
///
/// Tokens keep first-seen order and duplicates are dropped; the result
/// is empty when no source contributes a token.
pub fn merge_class_values(sources: &[ClassValue]) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for source in sources {
        for token in source.tokens() {
            if !seen.contains(&token) {
                seen.push(token);
            }
        }
    }
    seen.join(" ")
}
