use apiform::normalize::{clean, clean_record};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

mod common;
use common::record;

#[test]
fn test_clean_drops_empty_containers() {
    assert_eq!(clean(&json!({})), None);
    assert_eq!(clean(&json!([])), None);
    assert_eq!(clean(&Value::Null), None);
    assert_eq!(clean(&json!({ "a": { "b": [] }, "c": [{}, ""] })), None);
}

#[test]
fn test_clean_keeps_zero_and_false() {
    assert_eq!(clean(&json!(0)), Some(json!(0)));
    assert_eq!(clean(&json!(false)), Some(json!(false)));
    assert_eq!(clean(&json!(0.0)), Some(json!(0.0)));
    assert_eq!(
        clean(&json!({ "rank": 0, "active": false })),
        Some(json!({ "rank": 0, "active": false }))
    );
}

#[test]
fn test_clean_trims_strings() {
    assert_eq!(clean(&json!("")), None);
    assert_eq!(clean(&json!("  ")), None);
    assert_eq!(clean(&json!("  x  ")), Some(json!("x")));
    assert_eq!(clean(&json!("\tline\n")), Some(json!("line")));
}

#[test]
fn test_clean_preserves_key_order() {
    let cleaned = clean(&json!({ "a": 1, "b": "   ", "c": "z" })).unwrap();
    let keys: Vec<&str> = cleaned
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["a", "c"]);

    let reversed = clean(&json!({ "z": 1, "m": 2, "a": 3 })).unwrap();
    let keys: Vec<&str> = reversed
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["z", "m", "a"]);
}

#[test]
fn test_clean_preserves_array_order() {
    assert_eq!(
        clean(&json!(["b", "", "a", null, " c "])),
        Some(json!(["b", "a", "c"]))
    );
    assert_eq!(
        clean(&json!([{ "name": "" }, { "name": "kept" }])),
        Some(json!([{ "name": "kept" }]))
    );
}

#[test]
fn test_clean_is_idempotent() {
    let trees = [
        json!({
            "name": "  Fixed-Term Mortgage ",
            "rank": 0,
            "categories": ["cards", ""],
            "linkGroups": [
                { "groupKey": "documents", "links": [{ "name": " Terms ", "url": "" }, {}] },
                {}
            ],
            "translations": { "en-US": { "name": "" }, "sq": { "name": "Produkt" } },
            "additions": {}
        }),
        json!([[], [[]], [""], ["  keep  "]]),
        json!("  "),
        json!(12.5),
    ];

    for tree in trees {
        let once = clean(&tree);
        let twice = once.as_ref().and_then(clean);
        assert_eq!(twice, once);
    }
}

#[test]
fn test_clean_nested_product_body() {
    let body = record(json!({
        "productKey": "mortgage",
        "linkGroups": [
            { "groupKey": "documents", "links": [{ "type": "PDF", "name": "", "additions": {} }] },
            { "groupKey": "", "links": [] }
        ],
        "translations": { "en-US": { "name": "Product", "description": "" } }
    }));

    assert_eq!(
        clean_record(&body),
        Some(record(json!({
            "productKey": "mortgage",
            "linkGroups": [
                { "groupKey": "documents", "links": [{ "type": "PDF" }] }
            ],
            "translations": { "en-US": { "name": "Product" } }
        })))
    );
}

#[test]
fn test_clean_record_of_blanks_is_absent() {
    assert_eq!(
        clean_record(&record(json!({ "name": "", "tags": [""] }))),
        None
    );
}
