use atomic_style::{merge, Fragment, NoopPrefixer, Options, Predefs, StyleSheet, StyleValue};
use proptest::prelude::*;
use serde_json::{json, Value};

fn readable_sheet() -> StyleSheet {
    StyleSheet::new(Options::default())
}

fn obfuscated_sheet() -> StyleSheet {
    StyleSheet::new(Options {
        obfuscate_class_names: true,
    })
}

#[test]
fn test_round_trip_resolve_after_create() {
    let sheet = readable_sheet();
    let style = Fragment::from(json!({ "color": "red", "fontSize": 12 }));
    sheet.create(style.clone());

    let resolved = sheet.resolve("x", &style);
    let classes: Vec<_> = resolved.class_name.split(' ').collect();

    assert_eq!(classes.len(), 3);
    assert_eq!(classes[0], "x");
    assert!(resolved.style.is_empty());
}

#[test]
fn test_idempotent_registration_renders_once() {
    let sheet = readable_sheet();
    let style = Fragment::from(json!({ "backgroundColor": "blue" }));
    sheet.create(style.clone());
    sheet.create(style);

    let css = sheet.render_to_string();
    assert_eq!(css.matches("background-color:blue").count(), 1);
}

#[test]
fn test_destroy_drops_generated_rules_only() {
    let sheet = readable_sheet();
    let fresh_css = sheet.render_to_string();

    sheet.create(Fragment::from(json!({ "color": "red" })));
    assert_ne!(sheet.render_to_string(), fresh_css);

    sheet.destroy();
    assert_eq!(sheet.render_to_string(), fresh_css);
    assert_eq!(sheet.class_name("color", &"red".into()), None);
}

#[test]
fn test_render_order_is_reset_predefined_rules() {
    let sheet = readable_sheet();
    sheet.create(Fragment::from(json!({ "opacity": 0.5 })));
    let css = sheet.render_to_string();
    let predefs = Predefs::default();

    let reset_at = css.find(&predefs.reset_css).unwrap();
    let predefined_at = css.find(&predefs.predefined_css).unwrap();
    let rule_at = css.find(".__style_opacity-0_2e5_n{opacity:0.5;}").unwrap();
    assert!(reset_at < predefined_at && predefined_at < rule_at);
}

#[test]
fn test_merge_precedence() {
    let merged = merge(&Fragment::from(json!([{ "a": 1 }, { "a": 2, "b": 3 }])));
    assert_eq!(Value::Object(merged), json!({ "a": 2, "b": 3 }));

    let merged = merge(&Fragment::from(json!([null, { "a": 1 }, [{ "b": 2 }]])));
    assert_eq!(Value::Object(merged), json!({ "a": 1, "b": 2 }));
}

#[test]
fn test_readable_names_identical_across_sheets() {
    let style = Fragment::from(json!({ "fontSize": 12, "fontFamily": "a b" }));
    let lookalikes = Fragment::from(json!([{ "fontSize": "12" }, { "fontFamily": "a_b" }]));
    let a = readable_sheet();
    let b = readable_sheet();
    a.create(style.clone());
    a.create(lookalikes.clone());
    b.create(lookalikes.clone());
    b.create(style.clone());

    assert_eq!(a.resolve("", &style), b.resolve("", &style));
    assert_eq!(a.resolve("", &lookalikes), b.resolve("", &lookalikes));
    assert_eq!(
        a.resolve("", &style).class_name,
        "__style_fontSize-12_n __style_fontFamily-a_20b"
    );
}

#[test]
fn test_composite_values_do_not_register_their_fields() {
    let sheet = readable_sheet();
    let fresh_css = sheet.render_to_string();
    sheet.create(Fragment::from(json!({ "shadowOffset": { "width": 1, "height": 2 } })));
    sheet.create(Fragment::from(json!({ "transform": [{ "scale": 2 }] })));

    assert_eq!(sheet.render_to_string(), fresh_css);
    let resolved = sheet.resolve("", &Fragment::from(json!({ "width": 1 })));
    assert_eq!(resolved.class_name, "");
    assert_eq!(resolved.style["width"], json!(1));
}

#[test]
fn test_obfuscated_names_stable_within_sheet() {
    let sheet = obfuscated_sheet();
    sheet.create(Fragment::from(json!({ "color": "red" })));
    let before = sheet.class_name("color", &"red".into()).unwrap();

    sheet.create(Fragment::from(json!({ "color": "blue", "margin": 2 })));
    let after = sheet.class_name("color", &"red".into()).unwrap();

    assert_eq!(before, after);
    assert_ne!(before, sheet.class_name("color", &"blue".into()).unwrap());
}

#[test]
fn test_named_sheet_entries_resolve() {
    let sheet = readable_sheet();
    let styles = sheet.create_sheet(Fragment::from(json!({
        "container": { "flexDirection": "row", "padding": 8 },
        "label": { "color": "gray" },
    })));

    let resolved = sheet.resolve(
        "",
        &Fragment::Sequence(vec![styles.field("container"), styles.field("label")]),
    );
    assert_eq!(
        resolved.class_name,
        "__style_flexDirection-row __style_padding-8_n __style_color-gray"
    );
    assert!(resolved.style.is_empty());
}

#[test]
fn test_unprefixed_sheet_residual_is_unchanged() {
    let sheet = StyleSheet::builder()
        .options(Options::default())
        .prefixer(NoopPrefixer)
        .build();
    let resolved = sheet.resolve("", &Fragment::from(json!({ "transform": "scale(2)" })));
    assert_eq!(Value::Object(resolved.style), json!({ "transform": "scale(2)" }));
}

fn primitive() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-z0-9]{1,5}".prop_map(Value::from),
        (0i64..100).prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
    ]
}

proptest! {
    #[test]
    fn unregistered_declarations_stay_inline(
        registered in prop::collection::btree_map("[a-m]{1,4}", primitive(), 0..8),
        queried in prop::collection::btree_map("[n-z]{1,4}", primitive(), 1..8),
    ) {
        let sheet = readable_sheet();
        sheet.create(Fragment::from(json!(registered)));

        let resolved = sheet.resolve("", &Fragment::from(json!(queried)));

        prop_assert_eq!(resolved.class_name, "");
        for (property, value) in &queried {
            prop_assert_eq!(&resolved.style[property.as_str()], value);
        }
    }

    #[test]
    fn registered_declarations_become_classes(
        registered in prop::collection::btree_map("[a-z]{1,6}", primitive(), 1..10),
    ) {
        let sheet = readable_sheet();
        let style = sheet.create(Fragment::from(json!(registered)));
        let resolved = sheet.resolve("", &style);

        prop_assert!(resolved.style.is_empty());
        prop_assert_eq!(resolved.class_name.split(' ').count(), registered.len());
        for (property, value) in &registered {
            let value = StyleValue::from_json(property, value).unwrap();
            prop_assert!(sheet.class_name(property, &value).is_some());
        }
    }
}
