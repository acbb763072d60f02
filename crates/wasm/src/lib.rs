#![deny(missing_docs)]
//! Browser bindings for ikona hydration.
//!
//! The dataset and the document both come from the JavaScript side; the
//! registry is a plain object of `name -> [tag, attrs, children]`
//! entries and options mirror [`ikona_html::HydrateOptions`] with
//! camelCase keys.

use ikona_core::{AttrMap, IconRegistry};
use ikona_html::HydrateOptions;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

/// Options accepted by the WASM `hydrate` entry point.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct WasmHydrateOptions {
    /// Placeholder attribute name (`data-icon` by default).
    #[serde(default, alias = "nameAttr")]
    pub name_attr: Option<String>,
    /// Extra attributes for every resolved icon's root element.
    #[serde(default)]
    pub attrs: Option<AttrMap>,
    /// Library-default attributes, lowest precedence.
    #[serde(default)]
    pub defaults: Option<AttrMap>,
}

fn parse_options(options: JsValue) -> Result<HydrateOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        return Ok(HydrateOptions::default());
    }
    let parsed: WasmHydrateOptions = serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))?;

    let mut out = HydrateOptions::default();
    if let Some(name_attr) = parsed.name_attr {
        out.name_attr = name_attr;
    }
    if let Some(attrs) = parsed.attrs {
        out.attrs = attrs;
    }
    if let Some(defaults) = parsed.defaults {
        out.defaults = defaults;
    }
    Ok(out)
}

/// Hydrates every icon placeholder in `html` against `registry`.
///
/// # Arguments
///
/// * `html` - The document markup
/// * `registry` - Icon dataset object: `name -> [tag, attrs, children]`
/// * `options` - Optional `{nameAttr, attrs, defaults}` object
///
/// # Returns
///
/// Returns `{html, report}` where `report` carries the replaced count,
/// unresolved placeholders, and the deprecated-attribute flag.
/// Configuration problems (empty registry, unusable name attribute)
/// throw.
///
/// # Example (JavaScript)
///
/// ```javascript
/// import { hydrate } from './ikona_wasm';
///
/// const registry = {
///   CircleCheck: ['svg', { viewBox: '0 0 24 24' }, [['path', { d: 'M9 12l2 2 4-4' }]]],
/// };
/// const { html, report } = hydrate(
///   '<i data-icon="circle-check"></i>',
///   registry,
///   { attrs: { 'aria-hidden': 'true' } }
/// );
/// ```
#[wasm_bindgen]
pub fn hydrate(html: &str, registry: JsValue, options: JsValue) -> Result<JsValue, JsError> {
    let registry: IconRegistry = serde_wasm_bindgen::from_value(registry)
        .map_err(|e| JsError::new(&format!("Invalid registry: {}", e)))?;
    let options = parse_options(options)?;

    let hydrated = ikona_html::hydrate(html, &registry, &options)
        .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&hydrated)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
