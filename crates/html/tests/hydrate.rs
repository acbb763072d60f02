use ikona_core::IconRegistry;
use ikona_html::{HydrateOptions, hydrate};
use once_cell::sync::Lazy;

static REGISTRY: Lazy<IconRegistry> = Lazy::new(|| {
    IconRegistry::from_json(
        r#"{
            "CircleCheck": ["svg", {"viewBox": "0 0 24 24"}, [["path", {"d": "M9 12l2 2 4-4"}]]],
            "ArrowUp": ["svg", {"viewBox": "0 0 24 24"}, [
                ["path", {"d": "m5 12 7-7 7 7"}],
                ["path", {"d": "M12 19V5"}]
            ]]
        }"#,
    )
    .expect("fixture registry parses")
});

#[test]
fn hydrates_a_full_document() {
    let input = "<html><body><h1>Status</h1><i data-icon=\"circle-check\" class=\"ok\"></i><span icon-name=\"arrow-up\"></span><i data-icon=\"mystery\"></i></body></html>";
    let out = hydrate(input, &REGISTRY, &HydrateOptions::default()).unwrap();

    insta::assert_snapshot!(
        out.html,
        @r#"<html><body><h1>Status</h1><svg viewBox="0 0 24 24" data-icon="circle-check" class="icon icon-circle-check ok"><path d="M9 12l2 2 4-4"/></svg><svg viewBox="0 0 24 24" icon-name="arrow-up" class="icon icon-arrow-up"><path d="m5 12 7-7 7 7"/><path d="M12 19V5"/></svg><i data-icon="mystery"></i></body></html>"#
    );

    assert_eq!(out.report.replaced, 2);
    assert!(out.report.deprecated_attr_used);
    assert_eq!(out.report.unresolved.len(), 1);
    assert_eq!(out.report.unresolved[0].key, "Mystery");
}

#[test]
fn second_pass_is_a_fixed_point() {
    let input = "<ul><li data-icon=\"arrow-up\"></li><li data-icon=\"circle-check\"></li></ul>";
    let once = hydrate(input, &REGISTRY, &HydrateOptions::default()).unwrap();
    let twice = hydrate(&once.html, &REGISTRY, &HydrateOptions::default()).unwrap();
    assert_eq!(once.html, twice.html);
    assert_eq!(twice.report.unresolved.len(), 0);
}

#[test]
fn caller_attrs_apply_to_every_icon() {
    let options = HydrateOptions {
        attrs: [("aria-hidden", "true")].into_iter().collect(),
        ..HydrateOptions::default()
    };
    let input = "<i data-icon=\"arrow-up\"></i><i data-icon=\"circle-check\"></i>";
    let out = hydrate(input, &REGISTRY, &options).unwrap();
    assert_eq!(out.html.matches("aria-hidden=\"true\"").count(), 2);
}
