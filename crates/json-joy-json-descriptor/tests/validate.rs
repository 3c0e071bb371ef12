//! Integration tests for validation and normalization.

use json_joy_json_descriptor::{
    array, boolean, null_, number, object, string, validate, Descriptor, Kind, Meta, Normalized,
    PathStep, UnknownKeys, ValidationError, ValidationResult, ValidatorOptions, ValueKind,
};
use serde_json::{json, Value};

fn errors(result: ValidationResult) -> Vec<ValidationError> {
    match result {
        Ok(n) => panic!("expected failure, got {n:?}"),
        Err(e) => e.into_vec(),
    }
}

fn path(steps: &[PathStep]) -> Vec<PathStep> {
    steps.to_vec()
}

/// The `SomeEntity` descriptor from the factory-style examples.
fn some_entity() -> Descriptor {
    object(
        [
            ("id", number(None)),
            ("displayName", string(None)),
            ("isDefault", boolean(None)),
            ("isPrivate", boolean(Some(Meta::OPTIONAL_NULLABLE))),
            ("info", object([("phone", string(None))], None).unwrap()),
            (
                "roles",
                array(
                    object(
                        [
                            ("id", number(None)),
                            ("displayName", string(None)),
                            ("isPrivate", boolean(Some(Meta::OPTIONAL_NULLABLE))),
                        ],
                        None,
                    )
                    .unwrap(),
                    None,
                ),
            ),
        ],
        None,
    )
    .unwrap()
}

// ── Concrete scenarios ───────────────────────────────────────────────────────

#[test]
fn optional_field_normalizes_to_absent() {
    let d = object(
        [("id", number(None)), ("name", string(Some(Meta::OPTIONAL)))],
        None,
    )
    .unwrap();
    let n = d.validate(&json!({"id": 5})).unwrap();
    assert_eq!(n.get("id"), Some(&Normalized::Number(5.into())));
    assert_eq!(n.get("name"), Some(&Normalized::Absent));
    assert_eq!(n.to_json(), Some(json!({"id": 5})));
}

#[test]
fn array_of_objects_reports_nested_path() {
    let d = array(object([("id", number(None))], None).unwrap(), None);
    let errs = errors(d.validate(&json!([{"id": 1}, {"id": "x"}])));
    assert_eq!(
        errs,
        vec![ValidationError::new(
            path(&[PathStep::Index(1), "id".into()]),
            Kind::Number,
            ValueKind::String
        )]
    );
}

#[test]
fn array_reports_per_index() {
    let d = array(number(None), None);
    let errs = errors(d.validate(&json!([1, "x", 3])));
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].path, vec![PathStep::Index(1)]);
    assert_eq!(errs[0].expected, Kind::Number);
    assert_eq!(errs[0].found, ValueKind::String);
}

#[test]
fn object_collects_every_missing_field() {
    let d = object([("first", string(None)), ("last", string(None))], None).unwrap();
    let errs = errors(d.validate(&json!({})));
    assert_eq!(
        errs,
        vec![
            ValidationError::new(path(&["first".into()]), Kind::String, ValueKind::Absent),
            ValidationError::new(path(&["last".into()]), Kind::String, ValueKind::Absent),
        ]
    );
}

#[test]
fn array_collects_every_bad_element() {
    let d = array(string(None), None);
    let errs = errors(d.validate(&json!([1, "ok", null, true])));
    let at: Vec<String> = errs.iter().map(ValidationError::pointer).collect();
    assert_eq!(at, vec!["/0", "/2", "/3"]);
    assert_eq!(errs[1].found, ValueKind::Null);
}

// ── Modifiers at the root ────────────────────────────────────────────────────

#[test]
fn absent_root() {
    for d in [
        null_(),
        boolean(None),
        number(None),
        string(None),
        array(number(None), None),
        object([("a", number(None))], None).unwrap(),
    ] {
        assert_eq!(
            d.clone().optional().validate_field(None),
            Ok(Normalized::Absent)
        );
        let errs = errors(d.validate_field(None));
        assert_eq!(
            errs,
            vec![ValidationError::new(vec![], d.kind(), ValueKind::Absent)]
        );
    }
}

#[test]
fn null_root() {
    for d in [
        boolean(None),
        number(None),
        string(None),
        array(number(None), None),
        object([("a", number(None))], None).unwrap(),
    ] {
        assert_eq!(
            d.clone().nullable().validate(&Value::Null),
            Ok(Normalized::Null)
        );
        let errs = errors(d.validate(&Value::Null));
        assert_eq!(
            errs,
            vec![ValidationError::new(vec![], d.kind(), ValueKind::Null)]
        );
    }
}

#[test]
fn kind_mismatch_reports_found_kind() {
    let d = object([("id", number(None))], None).unwrap();
    for (value, found) in [
        (json!([]), ValueKind::Array),
        (json!("x"), ValueKind::String),
        (json!(1), ValueKind::Number),
        (json!(true), ValueKind::Boolean),
    ] {
        let errs = errors(d.validate(&value));
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].expected, Kind::Object);
        assert_eq!(errs[0].found, found);
    }
}

// ── Full entity ──────────────────────────────────────────────────────────────

#[test]
fn some_entity_accepts_conforming_value() {
    let value = json!({
        "id": 1,
        "displayName": "Alice",
        "isDefault": false,
        "isPrivate": null,
        "info": {"phone": "555-0100"},
        "roles": [
            {"id": 10, "displayName": "admin"},
            {"id": 11, "displayName": "ops", "isPrivate": true}
        ]
    });
    let n = some_entity().validate(&value).unwrap();
    assert_eq!(n.to_json(), Some(value));
    let roles = n.get("roles").unwrap();
    assert_eq!(
        roles.index(0).and_then(|r| r.get("isPrivate")),
        Some(&Normalized::Absent)
    );
}

#[test]
fn some_entity_reports_everything_at_once() {
    let value = json!({
        "id": "1",
        "isDefault": 0,
        "info": {},
        "roles": [{"id": 10, "displayName": 7, "isPrivate": "no"}]
    });
    let errs = errors(some_entity().validate(&value));
    let report: Vec<String> = errs.iter().map(ToString::to_string).collect();
    assert_eq!(
        report,
        vec![
            "/id: expected number, found string",
            "/displayName: expected string, found absent",
            "/isDefault: expected boolean, found number",
            "/info/phone: expected string, found absent",
            "/roles/0/displayName: expected string, found number",
            "/roles/0/isPrivate: expected boolean, found string",
        ]
    );
}

#[test]
fn is_valid_short_circuits_to_bool() {
    let d = some_entity();
    assert!(!d.is_valid(&json!({})));
    assert!(d.is_valid(&json!({
        "id": 1, "displayName": "", "isDefault": true, "info": {"phone": ""}, "roles": []
    })));
}

// ── Unknown keys ─────────────────────────────────────────────────────────────

fn opts(unknown_keys: UnknownKeys) -> ValidatorOptions {
    ValidatorOptions {
        unknown_keys,
        ..Default::default()
    }
}

#[test]
fn unknown_keys_are_stripped_by_default() {
    let d = object([("id", number(None))], None).unwrap();
    let n = d.validate(&json!({"id": 1, "extra": [1, 2]})).unwrap();
    assert_eq!(n.to_json(), Some(json!({"id": 1})));
}

#[test]
fn unknown_keys_can_be_kept() {
    let d = object([("id", number(None))], None).unwrap();
    let value = json!({"extra": {"deep": null}, "id": 1});
    let n = d.validate_with(&value, &opts(UnknownKeys::Keep)).unwrap();
    assert_eq!(n.to_json(), Some(value));
}

#[test]
fn unknown_keys_can_be_rejected() {
    let d = object([("id", number(None))], None).unwrap();
    let errs = errors(d.validate_with(
        &json!({"x": true, "id": "1", "y": []}),
        &opts(UnknownKeys::Reject),
    ));
    assert_eq!(
        errs,
        vec![
            ValidationError::new(path(&["id".into()]), Kind::Number, ValueKind::String),
            ValidationError::new(path(&["x".into()]), ValueKind::Absent, ValueKind::Boolean),
            ValidationError::new(path(&["y".into()]), ValueKind::Absent, ValueKind::Array),
        ]
    );
    assert_eq!(errs[1].to_string(), "/x: expected absent, found boolean");
}

#[test]
fn rejecting_applies_to_nested_objects() {
    let d = array(object(Vec::<(&str, Descriptor)>::new(), None).unwrap(), None);
    let errs = errors(validate(
        Some(&json!([{}, {"a": 1}])),
        &d,
        &opts(UnknownKeys::Reject),
        &[],
    ));
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].pointer(), "/1/a");
}

// ── Reentrancy ───────────────────────────────────────────────────────────────

#[test]
fn shared_descriptor_across_threads() {
    let d = std::sync::Arc::new(some_entity());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let d = d.clone();
            std::thread::spawn(move || d.validate(&json!({"id": i})).is_err())
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap());
    }
}
