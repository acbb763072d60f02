use std::fmt::Write;

use ikona_core::{AttrMap, IconDefinition};

/// Renders a definition tree into markup, with `root_attrs` standing in
/// for the root element's own attributes.
///
/// The hydrator merges the root attribute chain before calling this, so
/// only the root is substituted; children render with the attributes
/// their definitions carry. Childless elements self-close.
pub fn render_icon(def: &IconDefinition, root_attrs: &AttrMap) -> String {
    let mut out = String::new();
    write_element(&mut out, &def.tag, root_attrs, &def.children);
    out
}

fn write_element(out: &mut String, tag: &str, attrs: &AttrMap, children: &[IconDefinition]) {
    out.push('<');
    out.push_str(tag);
    for (name, value) in attrs.iter() {
        write!(
            out,
            " {}=\"{}\"",
            name,
            html_escape::encode_double_quoted_attribute(&value.to_string())
        )
        .ok();
    }
    if children.is_empty() {
        out.push_str("/>");
        return;
    }
    out.push('>');
    for child in children {
        write_element(out, &child.tag, &child.attrs, &child.children);
    }
    write!(out, "</{}>", tag).ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use ikona_core::AttrMap;

    #[test]
    fn renders_nested_tree_with_self_closing_leaves() {
        let def: IconDefinition = serde_json::from_str(
            r#"["svg", {"viewBox": "0 0 24 24"}, [
                ["path", {"d": "M9 12l2 2 4-4"}],
                ["circle", {"cx": 12, "cy": 12, "r": 10}]
            ]]"#,
        )
        .unwrap();

        let html = render_icon(&def, &def.attrs);
        assert_eq!(
            html,
            "<svg viewBox=\"0 0 24 24\"><path d=\"M9 12l2 2 4-4\"/><circle cx=\"12\" cy=\"12\" r=\"10\"/></svg>"
        );
    }

    #[test]
    fn root_attrs_replace_definition_attrs() {
        let def: IconDefinition = serde_json::from_str(r#"["svg", {"width": 24}]"#).unwrap();
        let root: AttrMap = [("width", "32"), ("class", "icon")].into_iter().collect();
        assert_eq!(render_icon(&def, &root), "<svg width=\"32\" class=\"icon\"/>");
    }

    #[test]
    fn escapes_attribute_values() {
        let def: IconDefinition = serde_json::from_str(r#"["svg", {}]"#).unwrap();
        let root: AttrMap = [("title", "say \"hi\" & bye")].into_iter().collect();
        assert_eq!(
            render_icon(&def, &root),
            "<svg title=\"say &quot;hi&quot; &amp; bye\"/>"
        );
    }

    #[test]
    fn integral_numeric_attrs_have_no_fraction() {
        let def: IconDefinition =
            serde_json::from_str(r#"["line", {"x1": 4, "y1": 6.5}]"#).unwrap();
        assert_eq!(render_icon(&def, &def.attrs), "<line x1=\"4\" y1=\"6.5\"/>");
    }
}
