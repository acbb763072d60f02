#![cfg(target_arch = "wasm32")]

use serde::Deserialize;
use wasm_bindgen_test::*;

use ikona_wasm::hydrate;

#[derive(Deserialize, Debug)]
struct Hydrated {
    html: String,
    report: Report,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Report {
    replaced: usize,
    deprecated_attr_used: bool,
}

fn registry() -> wasm_bindgen::JsValue {
    serde_wasm_bindgen::to_value(&serde_json::json!({
        "CircleCheck": ["svg", {"viewBox": "0 0 24 24"}, [["path", {"d": "M9 12l2 2 4-4"}]]],
    }))
    .unwrap()
}

#[wasm_bindgen_test]
fn hydrates_placeholder() {
    let result = hydrate(
        "<i data-icon=\"circle-check\"></i>",
        registry(),
        wasm_bindgen::JsValue::UNDEFINED,
    )
    .expect("hydrate should succeed");
    let result: Hydrated = serde_wasm_bindgen::from_value(result).expect("deserialize result");

    assert!(result.html.contains("<svg"));
    assert!(result.html.contains("icon icon-circle-check"));
    assert_eq!(result.report.replaced, 1);
    assert!(!result.report.deprecated_attr_used);
}

#[wasm_bindgen_test]
fn empty_registry_throws() {
    let empty = serde_wasm_bindgen::to_value(&serde_json::json!({})).unwrap();
    let result = hydrate("<i data-icon=\"x\"></i>", empty, wasm_bindgen::JsValue::UNDEFINED);
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn options_rename_the_attribute() {
    let options = serde_wasm_bindgen::to_value(&serde_json::json!({"nameAttr": "data-glyph"}))
        .unwrap();
    let result = hydrate("<i data-glyph=\"circle-check\"></i>", registry(), options)
        .expect("hydrate should succeed");
    let result: Hydrated = serde_wasm_bindgen::from_value(result).expect("deserialize result");
    assert_eq!(result.report.replaced, 1);
}
