/// Converts a human-typed icon name into the registry's canonical
/// PascalCase key.
///
/// Words are split on hyphens, underscores, and whitespace; each word's
/// first character is uppercased and the rest lowercased. Total over
/// arbitrary input: any string maps to some key.
///
/// # Examples
///
/// ```
/// use ikona_core::name::to_pascal_case;
///
/// assert_eq!(to_pascal_case("circle-check"), "CircleCheck");
/// assert_eq!(to_pascal_case("arrow_up"), "ArrowUp");
/// assert_eq!(to_pascal_case("alert triangle"), "AlertTriangle");
/// ```
pub fn to_pascal_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for word in name.split(|c: char| c == '-' || c == '_' || c.is_whitespace()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            for ch in chars {
                out.extend(ch.to_lowercase());
            }
        }
    }
    out
}

/// Converts a canonical PascalCase key into its kebab-case form, used
/// to derive per-icon class tokens.
///
/// A hyphen is inserted where an uppercase character follows a
/// lowercase character or digit; underscores and whitespace also become
/// hyphens.
///
/// # Examples
///
/// ```
/// use ikona_core::name::to_kebab_case;
///
/// assert_eq!(to_kebab_case("CircleCheck"), "circle-check");
/// assert_eq!(to_kebab_case("ArrowUp10"), "arrow-up10");
/// ```
pub fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_breaks = false;
    for ch in name.chars() {
        if ch == '_' || ch == '-' || ch.is_whitespace() {
            if !out.ends_with('-') {
                out.push('-');
            }
            prev_breaks = false;
            continue;
        }
        if ch.is_uppercase() {
            if prev_breaks && !out.ends_with('-') {
                out.push('-');
            }
            out.extend(ch.to_lowercase());
            prev_breaks = false;
        } else {
            out.push(ch);
            prev_breaks = ch.is_lowercase() || ch.is_ascii_digit();
        }
    }
    out
}
