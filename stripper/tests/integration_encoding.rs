//! Encoding behavior of the JSON entry points.
//!
//! Cleaning finishes before `serde_json` runs, and whatever the encoder
//! reports is handed back unchanged.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::json;
use stripper::{Clean, Error};

#[derive(Clean, Serialize)]
struct Order {
    id: u32,
    #[clean = "true"]
    card: String,
    items: Vec<&'static str>,
    #[clean = "true"]
    notes: Vec<String>,
    meta: HashMap<String, String>,
}

fn order() -> Order {
    Order {
        id: 17,
        card: "4111111111111111".into(),
        items: vec!["book", "pen"],
        notes: vec!["leave at door".into()],
        meta: HashMap::new(),
    }
}

#[test]
fn test_marshal_indent_with_prefix() {
    let mut order = order();
    let text = stripper::marshal_indent_string(&mut order, "//", "\t").unwrap();
    assert_eq!(
        text,
        "{\n\
         //\t\"id\": 17,\n\
         //\t\"card\": \"\",\n\
         //\t\"items\": [\n\
         //\t\t\"book\",\n\
         //\t\t\"pen\"\n\
         //\t],\n\
         //\t\"notes\": [],\n\
         //\t\"meta\": {}\n\
         //}"
    );
}

#[test]
fn test_marshal_indent_string_keeps_multibyte_prefix() {
    #[derive(Clean, Serialize)]
    struct Pin {
        #[clean = "true"]
        code: String,
        label: String,
    }

    let mut pin = Pin {
        code: "1234".into(),
        label: "café".into(),
    };
    let text = stripper::marshal_indent_string(&mut pin, "» ", "·").unwrap();
    assert_eq!(text, "{\n» ·\"code\": \"\",\n» ·\"label\": \"café\"\n» }");
    let bytes = stripper::marshal_indent(&mut pin, "» ", "·").unwrap();
    assert_eq!(text.as_bytes(), bytes.as_slice());
}

#[test]
fn test_marshal_indent_matches_serde_pretty_for_empty_prefix() {
    let mut a = order();
    let mut b = order();
    let ours = stripper::marshal_indent_string(&mut a, "", "  ").unwrap();
    b.card.clear();
    b.notes.clear();
    let theirs = serde_json::to_string_pretty(&b).unwrap();
    assert_eq!(ours, theirs);
}

#[test]
fn test_marshal_string_matches_bytes() {
    let mut a = order();
    let mut b = order();
    let bytes = stripper::marshal(&mut a).unwrap();
    let text = stripper::marshal_string(&mut b).unwrap();
    assert_eq!(bytes, text.into_bytes());
}

#[test]
fn test_to_value() {
    let mut order = order();
    let value = stripper::to_value(&mut order).unwrap();
    assert_eq!(
        value,
        json!({
            "id": 17,
            "card": "",
            "items": ["book", "pen"],
            "notes": [],
            "meta": {}
        })
    );
}

#[derive(Clean, Serialize)]
struct BadKeys {
    #[clean = "true"]
    token: String,
    lookup: HashMap<(u8, u8), u8>,
}

#[test]
fn test_encoder_error_is_passed_through() {
    let mut record = BadKeys {
        token: "sk_live_abc".into(),
        lookup: HashMap::from([((1, 2), 3)]),
    };

    let err = stripper::marshal(&mut record).unwrap_err();
    let Error::Encoding(inner) = &err else {
        panic!("expected an encoding error, got {err:?}");
    };
    assert_eq!(err.to_string(), inner.to_string());
    assert_eq!(err.to_string(), "key must be a string");

    // The walk completed before the encoder failed.
    assert!(record.token.is_empty());
}

#[test]
fn test_encoder_error_from_indent_and_value() {
    let mut record = BadKeys {
        token: "sk_live_abc".into(),
        lookup: HashMap::from([((1, 2), 3)]),
    };
    assert!(matches!(
        stripper::marshal_indent(&mut record, "", "  "),
        Err(Error::Encoding(_))
    ));
    assert!(matches!(
        stripper::to_value(&mut record),
        Err(Error::Encoding(_))
    ));
}

#[test]
fn test_flagged_value_never_reaches_output() {
    let mut order = order();
    let compact = stripper::marshal_string(&mut order).unwrap();
    let mut order = self::order();
    let pretty = stripper::marshal_indent_string(&mut order, "", "    ").unwrap();
    for text in [compact, pretty] {
        assert!(!text.contains("4111"));
        assert!(!text.contains("leave at door"));
    }
}
