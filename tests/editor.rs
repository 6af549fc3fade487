use apiform::editor::{
    DateTimeParts, EditOp, FieldEditor, FieldPath, Hierarchy, ReferenceOption, ReferencePicker,
    ReferenceSource, key_value, picker, translations,
};
use apiform::error::EditError;
use apiform::schema::SelectMode;
use apiform::value::Record;
use chrono::{NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

mod common;
use common::{nested_field, nested_fields, record};

fn apply(key: &str, current: Option<Value>, op: EditOp) -> Option<Value> {
    FieldEditor::apply(&nested_field(key), current.as_ref(), op).unwrap()
}

fn path(text: &str) -> FieldPath {
    text.parse().unwrap()
}

// --- Scalars ---

#[test]
fn test_number_input_parsing() {
    assert_eq!(apply("rank", None, EditOp::SetNumber("".into())), None);
    assert_eq!(apply("rank", None, EditOp::SetNumber("   ".into())), None);
    assert_eq!(apply("rank", None, EditOp::SetNumber("2".into())), Some(json!(2)));
    assert_eq!(apply("rank", None, EditOp::SetNumber("11.05".into())), Some(json!(11.05)));
    assert_eq!(apply("rank", None, EditOp::SetNumber("-3".into())), Some(json!(-3)));
    assert_eq!(apply("rank", Some(json!(4)), EditOp::SetNumber("abc".into())), None);
}

#[test]
fn test_integral_numbers_render_without_fraction() {
    let value = apply("rank", None, EditOp::SetNumber("2.0".into())).unwrap();
    assert_eq!(value.to_string(), "2");
}

#[test]
fn test_text_is_stored_verbatim() {
    assert_eq!(
        apply("name", None, EditOp::SetText("  spaced  ".into())),
        Some(json!("  spaced  "))
    );
}

#[test]
fn test_datetime_date_and_time_editing() {
    let with_date = apply("startsAt", None, EditOp::SetDate("2025-06-01".into()));
    assert_eq!(with_date, Some(json!("2025-06-01T00:00:00Z")));

    let with_time = apply("startsAt", with_date, EditOp::SetTime("23:59".into()));
    assert_eq!(with_time, Some(json!("2025-06-01T23:59:00Z")));

    let moved = apply("startsAt", with_time, EditOp::SetDate("2025-12-01".into()));
    assert_eq!(moved, Some(json!("2025-12-01T23:59:00Z")));
}

#[test]
fn test_datetime_without_date_is_unset() {
    assert_eq!(apply("startsAt", None, EditOp::SetTime("10:30".into())), None);
    assert_eq!(
        apply(
            "startsAt",
            Some(json!("2025-06-01T10:00:00Z")),
            EditOp::SetDate("".into())
        ),
        None
    );
}

#[test]
fn test_datetime_full_timestamp_input() {
    assert_eq!(
        apply("startsAt", None, EditOp::SetText("2025-12-01T23:59:59Z".into())),
        Some(json!("2025-12-01T23:59:59Z"))
    );
    assert_eq!(apply("startsAt", None, EditOp::SetText("next week".into())), None);
}

#[test]
fn test_datetime_parts() {
    let parts = DateTimeParts::parse("2025-06-01T08:15:30Z");
    assert_eq!(parts.date, NaiveDate::from_ymd_opt(2025, 6, 1));
    assert_eq!(parts.time, NaiveTime::from_hms_opt(8, 15, 30).unwrap());

    assert_eq!(DateTimeParts::parse("2025-06-01").time, NaiveTime::default());
    assert_eq!(DateTimeParts::parse("garbage"), DateTimeParts::default());
    assert_eq!(DateTimeParts::parse("2025-13-45T99:99:99Z"), DateTimeParts::default());

    // offsets are folded into UTC, fractions dropped
    assert_eq!(
        DateTimeParts::parse("2025-06-01T01:30:00.250+02:00").to_iso().as_deref(),
        Some("2025-05-31T23:30:00Z")
    );
}

#[test]
fn test_datetime_rejects_malformed_input() {
    let stamp = Some(json!("2025-06-01T00:00:00Z"));

    assert_eq!(apply("startsAt", None, EditOp::SetDate("June 1".into())), None);
    assert_eq!(
        apply("startsAt", stamp.clone(), EditOp::SetDate("2025-02-30".into())),
        stamp
    );
    assert_eq!(apply("startsAt", stamp.clone(), EditOp::SetTime("7".into())), stamp);
    assert_eq!(
        apply("startsAt", stamp.clone(), EditOp::SetTime("10:30:45.123".into())),
        stamp
    );
    assert_eq!(apply("startsAt", stamp.clone(), EditOp::SetTime("25:00".into())), stamp);
    assert_eq!(
        apply("startsAt", None, EditOp::SetText("2025-13-45T99:99:99Z".into())),
        None
    );

    // single-digit components are padded on the way out
    assert_eq!(
        apply("startsAt", stamp, EditOp::SetTime("7:05".into())),
        Some(json!("2025-06-01T07:05:00Z"))
    );
}

// --- Key-value maps ---

#[test]
fn test_key_value_entries() {
    let map = key_value::add_entry(None, "color", "blue");
    let map = key_value::add_entry(map.as_ref(), "size", "L");
    assert_eq!(map, Some(json!({ "color": "blue", "size": "L" })));

    // blank and duplicate keys are ignored
    assert_eq!(key_value::add_entry(map.as_ref(), "  ", "x"), map);
    assert_eq!(key_value::add_entry(map.as_ref(), "color", "red"), map);

    // keys are case-sensitive
    let map = key_value::add_entry(map.as_ref(), "Color", "red");
    assert_eq!(
        key_value::entries(map.as_ref()),
        vec![
            ("color".to_string(), "blue".to_string()),
            ("size".to_string(), "L".to_string()),
            ("Color".to_string(), "red".to_string()),
        ]
    );

    let map = key_value::update_entry(map.as_ref(), "size", "XL");
    let map = key_value::remove_entry(map.as_ref(), "color");
    assert_eq!(map, Some(json!({ "size": "XL", "Color": "red" })));
}

#[test]
fn test_key_value_missing_keys_leave_value_alone() {
    assert_eq!(key_value::add_entry(None, " ", "x"), None);
    assert_eq!(apply("additions", None, EditOp::RemoveEntry("x".into())), None);
    assert_eq!(
        apply("additions", None, EditOp::UpdateEntry {
            key: "x".into(),
            value: "1".into(),
        }),
        None
    );

    let map = json!({ "a": "1" });
    assert_eq!(
        apply("additions", Some(map.clone()), EditOp::RemoveEntry("b".into())),
        Some(map)
    );
}

#[test]
fn test_key_value_update_keeps_position() {
    let map = json!({ "a": "1", "b": "2", "c": "3" });
    let updated = apply("additions", Some(map), EditOp::UpdateEntry {
        key: "a".into(),
        value: "9".into(),
    })
    .unwrap();
    let keys: Vec<&String> = updated.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["a", "b", "c"]);
    assert_eq!(updated["a"], json!("9"));
}

// --- Translations ---

#[test]
fn test_translation_property_lifecycle() {
    let value = apply(
        "translations",
        None,
        EditOp::SetTranslation {
            locale: "en-US".into(),
            property: "name".into(),
            value: "Product".into(),
        },
    );
    assert_eq!(value, Some(json!({ "en-US": { "name": "Product" } })));

    let value = apply(
        "translations",
        value,
        EditOp::SetTranslation {
            locale: "sq".into(),
            property: "name".into(),
            value: "Produkt".into(),
        },
    );
    assert_eq!(
        translations::populated_locales(value.as_ref()),
        vec!["en-US", "sq"]
    );

    let value = apply(
        "translations",
        value,
        EditOp::SetTranslation {
            locale: "en-US".into(),
            property: "name".into(),
            value: "".into(),
        },
    );
    assert_eq!(value, Some(json!({ "sq": { "name": "Produkt" } })));

    let value = apply(
        "translations",
        value,
        EditOp::SetTranslation {
            locale: "sq".into(),
            property: "name".into(),
            value: "".into(),
        },
    );
    assert_eq!(value, None);
}

#[test]
fn test_translation_unknown_locale_is_ignored() {
    let current = json!({ "en-US": { "name": "Product" } });
    assert_eq!(
        translations::set_property(Some(&current), "de-DE", "name", "Produkt"),
        Some(current.clone())
    );
    assert_eq!(
        translations::set_property(Some(&current), "sq", "  ", "x"),
        Some(current)
    );
}

// --- Hierarchy ---

#[test]
fn test_hierarchy_single_branch_three_levels() {
    let value = apply("roots", None, EditOp::AddRoot);
    let value = apply("roots", value, EditOp::AddChild(vec![0]));
    let value = apply("roots", value, EditOp::AddChild(vec![0, 0]));

    let hierarchy = Hierarchy::from_value(value.as_ref());
    assert_eq!(hierarchy.roots.len(), 1);
    assert_eq!(hierarchy.depth(), 3);
    assert!(hierarchy.node(&[0, 0, 0]).is_some());

    let value = apply("roots", value, EditOp::RemoveNode(vec![0]));
    assert_eq!(value, Some(json!([])));
}

#[test]
fn test_hierarchy_wire_shape_and_rename() {
    let value = apply("roots", None, EditOp::AddRoot);
    let value = apply("roots", value, EditOp::AddChild(vec![0]));
    let value = apply(
        "roots",
        value,
        EditOp::RenameNode {
            path: vec![0],
            label: "cards".into(),
        },
    );
    let value = apply(
        "roots",
        value,
        EditOp::RenameNode {
            path: vec![0, 0],
            label: "credit-cards".into(),
        },
    );

    assert_eq!(
        value,
        Some(json!([
            { "category": "cards", "subCategories": [
                { "category": "credit-cards", "subCategories": [] }
            ] }
        ]))
    );
}

#[test]
fn test_hierarchy_stale_paths_are_noops() {
    let tree = Hierarchy::default().add_root().add_child(&[0]);
    assert_eq!(tree.clone().remove(&[3]), tree);
    assert_eq!(tree.clone().add_child(&[0, 5]), tree);
    assert_eq!(tree.clone().rename(&[1], "x"), tree);
    assert_eq!(tree.clone().remove(&[]), tree);
}

#[test]
fn test_hierarchy_stale_paths_leave_value_alone() {
    assert_eq!(apply("roots", None, EditOp::RemoveNode(vec![0])), None);
    assert_eq!(apply("roots", None, EditOp::AddChild(vec![0])), None);

    let stored = Some(json!([{ "category": "cards", "subCategories": null }]));
    assert_eq!(apply("roots", stored.clone(), EditOp::RemoveNode(vec![4])), stored);
}

#[test]
fn test_hierarchy_reads_loose_nodes() {
    let stored = json!([
        { "category": "cards", "subCategories": [{ "category": "gold" }] },
        { "category": "loans", "subCategories": null },
        { "category": 7, "note": "keep" }
    ]);

    let value = apply("roots", Some(stored), EditOp::AddRoot);
    assert_eq!(
        value,
        Some(json!([
            { "category": "cards", "subCategories": [
                { "category": "gold", "subCategories": [] }
            ] },
            { "category": "loans", "subCategories": [] },
            { "category": "", "subCategories": [], "note": "keep" },
            { "category": "", "subCategories": [] }
        ]))
    );

    let value = apply(
        "roots",
        value,
        EditOp::RenameNode {
            path: vec![2],
            label: "savings".into(),
        },
    );
    let node = Hierarchy::from_value(value.as_ref()).roots[2].clone();
    assert_eq!(node.category, "savings");
    assert_eq!(node.extra.get("note"), Some(&json!("keep")));
}

#[test]
fn test_hierarchy_remove_keeps_siblings() {
    let tree = Hierarchy::default()
        .add_root()
        .rename(&[0], "first")
        .add_root()
        .rename(&[1], "second")
        .add_root()
        .rename(&[2], "third")
        .remove(&[1]);
    let labels: Vec<&str> = tree.roots.iter().map(|n| n.category.as_str()).collect();
    assert_eq!(labels, vec!["first", "third"]);
}

// --- Reference picker ---

struct SavedCategories;

impl ReferenceSource for SavedCategories {
    fn reference_options(&self) -> Vec<ReferenceOption> {
        ["cards", "loans", "cards", "savings"]
            .into_iter()
            .enumerate()
            .map(|(i, key)| ReferenceOption {
                reference_key: key.to_string(),
                display_name: format!("{} #{}", key, i),
            })
            .collect()
    }
}

#[test]
fn test_single_select_toggle() {
    let selected = apply("primary", None, EditOp::Toggle("cards".into()));
    assert_eq!(selected, Some(json!(["cards"])));

    let cleared = apply("primary", selected.clone(), EditOp::Toggle("cards".into()));
    assert_eq!(cleared, Some(json!([])));

    let replaced = apply("primary", selected, EditOp::Toggle("loans".into()));
    assert_eq!(replaced, Some(json!(["loans"])));
}

#[test]
fn test_multi_select_keeps_selection_order() {
    let value = apply("categories", None, EditOp::Toggle("savings".into()));
    let value = apply("categories", value, EditOp::Toggle("cards".into()));
    let value = apply("categories", value, EditOp::Toggle("loans".into()));
    assert_eq!(value, Some(json!(["savings", "cards", "loans"])));

    let value = apply("categories", value, EditOp::Toggle("cards".into()));
    assert_eq!(value, Some(json!(["savings", "loans"])));
}

#[test]
fn test_picker_deduplicates_options() {
    let picker = ReferencePicker::from_source(&SavedCategories, SelectMode::Multiple);
    let keys: Vec<&str> = picker
        .options()
        .iter()
        .map(|o| o.reference_key.as_str())
        .collect();
    assert_eq!(keys, vec!["cards", "loans", "savings"]);
    assert_eq!(picker.options()[0].display_name, "cards #0");

    let current = picker.toggle(None, "loans");
    assert_eq!(picker.summary(Some(&current)), "1 of 3 selected");
    let selected: Vec<bool> = picker
        .entries(Some(&current))
        .into_iter()
        .map(|(_, on)| on)
        .collect();
    assert_eq!(selected, vec![false, true, false]);
    assert_eq!(picker::selection(Some(&current)), vec!["loans".to_string()]);
}

// --- Arrays ---

#[test]
fn test_array_append_remove_update() {
    let tags = apply("tags", None, EditOp::Append);
    assert_eq!(tags, Some(json!([""])));

    let tags = apply("tags", tags, EditOp::Append);
    let tags = apply("tags", tags, EditOp::UpdateAt {
        index: 1,
        value: json!("retail"),
    });
    assert_eq!(tags, Some(json!(["", "retail"])));

    let tags = apply("tags", tags, EditOp::RemoveAt(0));
    assert_eq!(tags, Some(json!(["retail"])));

    let groups = apply("linkGroups", None, EditOp::Append);
    assert_eq!(groups, Some(json!([{}])));
}

#[test]
fn test_array_stale_indices_are_noops() {
    let tags = Some(json!(["a", "b"]));
    assert_eq!(apply("tags", tags.clone(), EditOp::RemoveAt(5)), tags);
    assert_eq!(
        apply("tags", tags.clone(), EditOp::UpdateAt {
            index: 2,
            value: json!("c")
        }),
        tags
    );

    // an unset array stays unset
    assert_eq!(apply("tags", None, EditOp::RemoveAt(0)), None);
    assert_eq!(
        apply("linkGroups", None, EditOp::UpdateAt {
            index: 0,
            value: json!({})
        }),
        None
    );
}

// --- Records ---

#[test]
fn test_record_set_field_keeps_siblings() {
    let owner = Some(json!({ "team": "cards", "email": "a@b.c" }));
    let owner = apply("owner", owner, EditOp::SetField {
        key: "team".into(),
        value: Some(json!("loans")),
    });
    assert_eq!(owner, Some(json!({ "team": "loans", "email": "a@b.c" })));

    let err = FieldEditor::apply(
        &nested_field("owner"),
        owner.as_ref(),
        EditOp::SetField {
            key: "phone".into(),
            value: Some(json!("1")),
        },
    )
    .unwrap_err();
    assert_eq!(
        err,
        EditError::UnknownField {
            key: "phone".into(),
            parent: "owner".into()
        }
    );
}

#[test]
fn test_mismatched_operation_is_an_error() {
    let err = FieldEditor::apply(&nested_field("name"), None, EditOp::Toggle("x".into()))
        .unwrap_err();
    assert_eq!(
        err,
        EditError::UnsupportedOperation {
            field: "name".into(),
            kind: "text",
            operation: "toggle",
        }
    );
}

#[test]
fn test_replace_works_for_any_kind() {
    for key in ["name", "roots", "categories", "linkGroups", "owner"] {
        assert_eq!(
            apply(key, Some(json!("anything")), EditOp::Replace(None)),
            None
        );
        assert_eq!(
            apply(key, Some(json!("anything")), EditOp::Replace(Some(Value::Null))),
            None
        );
    }
}

#[test]
fn test_null_replacement_never_stored() {
    let root = record(json!({ "linkGroups": [{ "groupKey": "main" }], "owner": { "team": "cards" } }));

    let updated = FieldEditor::apply_at(
        &nested_fields(),
        &root,
        &path("owner"),
        EditOp::Replace(Some(Value::Null)),
    )
    .unwrap();
    assert!(!updated.contains_key("owner"));

    let updated = FieldEditor::apply_at(
        &nested_fields(),
        &root,
        &path("linkGroups[0]"),
        EditOp::Replace(Some(Value::Null)),
    )
    .unwrap();
    assert_eq!(updated["linkGroups"], json!([{}]));
}

// --- Path-addressed edits ---

#[test]
fn test_nested_edit_through_record_arrays() {
    let fields = nested_fields();
    let mut body = Record::new();
    for (p, op) in [
        ("linkGroups", EditOp::Append),
        ("linkGroups[0].groupKey", EditOp::SetText("documents".into())),
        ("linkGroups[0].links", EditOp::Append),
        ("linkGroups[0].links", EditOp::Append),
        ("linkGroups[0].links[1].name", EditOp::SetText("Terms".into())),
        ("name", EditOp::SetText("Mortgage".into())),
    ] {
        body = FieldEditor::apply_at(&fields, &body, &path(p), op).unwrap();
    }

    assert_eq!(
        body,
        record(json!({
            "linkGroups": [{
                "groupKey": "documents",
                "links": [{}, { "name": "Terms" }]
            }],
            "name": "Mortgage"
        }))
    );
}

#[test]
fn test_nested_edit_keeps_other_items_intact() {
    let fields = nested_fields();
    let body = record(json!({
        "name": "first",
        "linkGroups": [
            { "groupKey": "a", "links": [{ "name": "one" }] },
            { "groupKey": "b" }
        ]
    }));

    let updated = FieldEditor::apply_at(
        &fields,
        &body,
        &path("linkGroups[1].links"),
        EditOp::Append,
    )
    .unwrap();

    assert_eq!(updated["linkGroups"][0], body["linkGroups"][0]);
    assert_eq!(updated["linkGroups"][1], json!({ "groupKey": "b", "links": [{}] }));
    assert_eq!(updated["name"], json!("first"));
    // the input tree is untouched
    assert_eq!(body["linkGroups"][1], json!({ "groupKey": "b" }));
}

#[test]
fn test_nested_edit_on_stale_index_is_noop() {
    let fields = nested_fields();
    let body = record(json!({ "linkGroups": [{ "groupKey": "a" }] }));
    let updated = FieldEditor::apply_at(
        &fields,
        &body,
        &path("linkGroups[4].groupKey"),
        EditOp::SetText("x".into()),
    )
    .unwrap();
    assert_eq!(updated, body);
}

#[test]
fn test_scalar_array_item_edit() {
    let fields = nested_fields();
    let body = record(json!({ "tags": ["", "b"] }));
    let updated = FieldEditor::apply_at(&fields, &body, &path("tags[0]"), EditOp::SetText("a".into()))
        .unwrap();
    assert_eq!(updated["tags"], json!(["a", "b"]));
}

#[test]
fn test_record_field_edit_and_unset() {
    let fields = nested_fields();
    let body = FieldEditor::apply_at(
        &fields,
        &Record::new(),
        &path("owner.team"),
        EditOp::SetText("cards".into()),
    )
    .unwrap();
    assert_eq!(body, record(json!({ "owner": { "team": "cards" } })));

    let body = FieldEditor::apply_at(&fields, &body, &path("rank"), EditOp::SetNumber("".into()))
        .unwrap();
    assert!(!body.contains_key("rank"));
}

#[test]
fn test_path_errors() {
    let fields = nested_fields();
    let body = Record::new();

    let unknown = FieldEditor::apply_at(&fields, &body, &path("nope"), EditOp::Append).unwrap_err();
    assert!(matches!(unknown, EditError::UnknownField { ref key, .. } if key == "nope"));

    let descend = FieldEditor::apply_at(&fields, &body, &path("name.inner"), EditOp::Append)
        .unwrap_err();
    assert!(matches!(descend, EditError::InvalidPath { .. }));

    let record_item = FieldEditor::apply_at(
        &fields,
        &record(json!({ "linkGroups": [{}] })),
        &path("linkGroups[0]"),
        EditOp::SetText("x".into()),
    )
    .unwrap_err();
    assert!(matches!(record_item, EditError::InvalidPath { .. }));
}

#[test]
fn test_field_at_resolves_nested_schema() {
    let fields = nested_fields();
    let link_name = FieldEditor::field_at(&fields, &path("linkGroups[0].links[2].name")).unwrap();
    assert_eq!(link_name.label, "Name");
    assert_eq!(
        FieldEditor::field_at(&fields, &path("tags[3]")).unwrap().key,
        "tag"
    );
    assert_eq!(
        FieldEditor::field_at(&fields, &path("owner.email")).unwrap().key,
        "email"
    );
    assert!(FieldEditor::field_at(&fields, &path("linkGroups[0]")).is_none());
    assert!(FieldEditor::field_at(&fields, &path("name.x")).is_none());
}
