use std::cell::RefCell;

use lol_html::html_content::{ContentType, Element};
use lol_html::{RewriteStrSettings, Selector, element, rewrite_str};
use serde::Serialize;

use ikona_core::{
    AttrMap, ClassValue, IconDefinition, IconRegistry, merge_class_values, to_kebab_case,
    to_pascal_case,
};

use crate::error::HydrateError;
use crate::render::render_icon;

/// Canonical placeholder attribute carrying the icon name.
pub const DEFAULT_NAME_ATTR: &str = "data-icon";
/// Legacy placeholder attribute, still honored with a one-time warning.
pub const DEPRECATED_NAME_ATTR: &str = "icon-name";
/// Class applied to every hydrated icon's root element.
pub const KIND_CLASS: &str = "icon";

/// Options accepted by [`hydrate`].
#[derive(Debug, Clone)]
pub struct HydrateOptions {
    /// Attribute that identifies placeholders and carries the icon
    /// name. Defaults to [`DEFAULT_NAME_ATTR`].
    pub name_attr: String,
    /// Caller attributes applied to every resolved icon's root element.
    /// Overridden by the placeholder's own attributes on collision.
    pub attrs: AttrMap,
    /// Library-default attributes, overridden by everything else.
    /// Datasets that ship a default attribute set plug it in here.
    pub defaults: AttrMap,
}

impl Default for HydrateOptions {
    fn default() -> Self {
        Self {
            name_attr: DEFAULT_NAME_ATTR.to_string(),
            attrs: AttrMap::new(),
            defaults: AttrMap::new(),
        }
    }
}

/// A placeholder whose name did not resolve to a registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnresolvedIcon {
    /// Tag name of the offending placeholder element.
    pub tag: String,
    /// The name exactly as written in the document.
    pub name: String,
    /// The canonical key the lookup fell back to.
    pub key: String,
}

/// Diagnostics collected over one hydration call.
///
/// The deprecation flag lives here rather than in module state so
/// repeated or concurrent calls stay independent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HydrateReport {
    /// Number of placeholders replaced, both passes combined.
    pub replaced: usize,
    /// Placeholders left untouched because their name is unknown.
    pub unresolved: Vec<UnresolvedIcon>,
    /// True when any element carried the deprecated name attribute.
    pub deprecated_attr_used: bool,
}

/// A hydrated document plus its diagnostics.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hydrated {
    /// The rewritten document.
    pub html: String,
    /// What happened along the way.
    pub report: HydrateReport,
}

/// Replaces every icon placeholder in `html` with its rendered icon.
///
/// Placeholders are identified purely by the presence of
/// `options.name_attr` (any tag qualifies). Each one is processed
/// independently: the name is resolved against the registry (exact key,
/// then PascalCase), the root attribute chain is merged with precedence
/// `defaults < definition < caller attrs < placeholder attrs` (`class`
/// is merged, not overridden), and the element is replaced in place. A
/// second pass honors the deprecated [`DEPRECATED_NAME_ATTR`], logging
/// one deprecation warning per call.
///
/// Unknown names warn and leave the placeholder untouched; an empty
/// registry or an unusable document aborts with no output at all.
///
/// # Examples
///
/// ```
/// use ikona_core::IconRegistry;
/// use ikona_html::{HydrateOptions, hydrate};
///
/// let registry = IconRegistry::from_json(
///     r#"{"CircleCheck": ["svg", {"viewBox": "0 0 24 24"}, [["path", {"d": "M9 12l2 2 4-4"}]]]}"#,
/// )?;
/// let out = hydrate(
///     r#"<i data-icon="circle-check" class="big"></i>"#,
///     &registry,
///     &HydrateOptions::default(),
/// )?;
/// assert_eq!(
///     out.html,
///     r#"<svg viewBox="0 0 24 24" data-icon="circle-check" class="icon icon-circle-check big"><path d="M9 12l2 2 4-4"/></svg>"#,
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn hydrate(
    html: &str,
    registry: &IconRegistry,
    options: &HydrateOptions,
) -> Result<Hydrated, HydrateError> {
    if registry.is_empty() {
        return Err(HydrateError::EmptyRegistry);
    }

    let report = RefCell::new(HydrateReport::default());

    let pass_one = run_pass(html, registry, options, &options.name_attr, false, &report)?;
    let output = if options.name_attr == DEPRECATED_NAME_ATTR {
        // The legacy attribute is already the canonical one.
        pass_one
    } else {
        run_pass(
            &pass_one,
            registry,
            options,
            DEPRECATED_NAME_ATTR,
            true,
            &report,
        )?
    };

    Ok(Hydrated {
        html: output,
        report: report.into_inner(),
    })
}

/// One selector-driven sweep over the document.
fn run_pass(
    html: &str,
    registry: &IconRegistry,
    options: &HydrateOptions,
    name_attr: &str,
    deprecated: bool,
    report: &RefCell<HydrateReport>,
) -> Result<String, HydrateError> {
    let selector = format!("[{name_attr}]");
    // Validate eagerly so a bad attribute surfaces as a configuration
    // error instead of a panic inside the rewriter setup.
    if let Err(source) = selector.parse::<Selector>() {
        return Err(HydrateError::InvalidNameAttr {
            attr: name_attr.to_string(),
            source,
        });
    }

    rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![element!(selector, move |el| {
                hydrate_element(el, registry, options, name_attr, deprecated, report);
                Ok(())
            })],
            ..RewriteStrSettings::default()
        },
    )
    .map_err(HydrateError::from)
}

fn hydrate_element(
    el: &mut Element,
    registry: &IconRegistry,
    options: &HydrateOptions,
    name_attr: &str,
    deprecated: bool,
    report: &RefCell<HydrateReport>,
) {
    // The selector guarantees presence; guard anyway.
    let Some(raw_name) = el.get_attribute(name_attr) else {
        return;
    };

    if deprecated {
        if el.has_attribute(&options.name_attr) {
            // The canonical pass already owns this element.
            return;
        }
        let mut report = report.borrow_mut();
        if !report.deprecated_attr_used {
            report.deprecated_attr_used = true;
            log::warn!(
                "the `{DEPRECATED_NAME_ATTR}` attribute is deprecated; rename it to `{}`",
                options.name_attr
            );
        }
    }

    let Some(def) = registry.resolve(&raw_name) else {
        let key = to_pascal_case(&raw_name);
        log::warn!(
            "unknown icon `{}` (resolved as `{}`) on <{}>; placeholder left as-is",
            raw_name,
            key,
            el.tag_name()
        );
        report.borrow_mut().unresolved.push(UnresolvedIcon {
            tag: el.tag_name(),
            name: raw_name,
            key,
        });
        return;
    };

    let mut placeholder_attrs = AttrMap::new();
    for attr in el.attributes() {
        // Raw values keep their character references; decode them so
        // rendering does not escape them a second time.
        let value = html_escape::decode_html_entities(&attr.value()).into_owned();
        placeholder_attrs.insert(attr.name(), value);
    }

    let root_attrs = merge_root_attrs(def, options, name_attr, &raw_name, &placeholder_attrs);
    let markup = render_icon(def, &root_attrs);
    el.replace(&markup, ContentType::Html);
    report.borrow_mut().replaced += 1;
}

/// Builds the root attribute chain for one resolved placeholder.
fn merge_root_attrs(
    def: &IconDefinition,
    options: &HydrateOptions,
    name_attr: &str,
    raw_name: &str,
    placeholder_attrs: &AttrMap,
) -> AttrMap {
    let mut named = AttrMap::new();
    named.insert(name_attr, raw_name);

    let mut attrs = AttrMap::merge(&[
        &options.defaults,
        &def.attrs,
        &named,
        &options.attrs,
        placeholder_attrs,
    ]);

    let icon_class = format!("{KIND_CLASS}-{}", to_kebab_case(&to_pascal_case(raw_name)));
    let class = merge_class_values(&[
        ClassValue::from(KIND_CLASS),
        ClassValue::Single(icon_class),
        class_source(&def.attrs),
        class_source(placeholder_attrs),
        class_source(&options.attrs),
    ]);
    if !class.is_empty() {
        attrs.insert("class", class);
    }
    attrs
}

fn class_source(attrs: &AttrMap) -> ClassValue {
    match attrs.get("class") {
        Some(value) => ClassValue::Single(value.to_string()),
        None => ClassValue::None,
    }
}
