use anyhow::Result;
use oml_record::{Access, FieldValue, Record, RecordError};

/// Walks the construct / read / write cycle on a single record
#[test]
fn test_record_lifecycle() -> Result<()> {
    let mut record = Record::new(42, "hi", true);
    assert_eq!(record.field_a(), 42);

    record.set_field_b("bye");
    assert_eq!(record.field_b(), "bye");

    record.set_field_c(false);
    assert!(!record.field_c());

    assert_eq!(record.field_a(), 42);
    Ok(())
}

/// Constructed values read back unchanged across a spread of inputs
#[test]
fn test_construction_reads_back() -> Result<()> {
    let cases = [
        (0, "", false),
        (i64::MIN, "negative", true),
        (i64::MAX, "日本語 text", false),
        (-1, "line\nbreak", true),
    ];

    for (a, b, c) in cases {
        let record = Record::new(a, b, c);
        assert_eq!(record.field_a(), a);
        assert_eq!(record.field_b(), b);
        assert_eq!(record.field_c(), c);
    }
    Ok(())
}

/// Each write fully replaces the previous value and never touches field_a
#[test]
fn test_repeated_writes() -> Result<()> {
    let mut record = Record::new(7, "start", false);

    for (i, text) in ["one", "two", "a much longer third value", ""].iter().enumerate() {
        record.set_field_b(*text);
        record.set_field_c(i % 2 == 0);
        assert_eq!(record.field_b(), *text);
        assert_eq!(record.field_c(), i % 2 == 0);
        assert_eq!(record.field_a(), 7);
    }

    record.set("field_b", String::from("dynamic"))?;
    record.set("field_c", true)?;
    assert_eq!(record.field_a(), 7);
    Ok(())
}

/// field_a cannot be written through any path
#[test]
fn test_field_a_is_read_only() -> Result<()> {
    let mut record = Record::new(42, "hi", true);

    let err = record.set("field_a", 43i64).unwrap_err();
    assert_eq!(
        err,
        RecordError::ReadOnlyField {
            field: "field_a".to_string()
        }
    );
    assert_eq!(record.get("field_a")?, FieldValue::Integer(42));

    let schema_entry = Record::field("field_a").expect("field_a is declared");
    assert_eq!(schema_entry.access, Access::ReadOnly);
    Ok(())
}

/// A mistyped dynamic constructor argument yields no record
#[test]
fn test_mistyped_construction_fails() -> Result<()> {
    let result = Record::try_from_values("42".into(), "hi".into(), true.into());

    match result {
        Err(RecordError::TypeMismatch { field, expected, found }) => {
            assert_eq!(field, "field_a");
            assert_eq!(expected.to_string(), "integer");
            assert_eq!(found, "string");
        }
        other => panic!("expected a type mismatch, got {:?}", other),
    }
    Ok(())
}

/// Only the declared fields are addressable
#[test]
fn test_no_ad_hoc_fields() -> Result<()> {
    let mut record = Record::new(1, "x", false);

    assert!(matches!(
        record.set("field_d", "extra"),
        Err(RecordError::UnknownField { .. })
    ));
    assert!(matches!(
        record.get("fieldA"),
        Err(RecordError::UnknownField { .. })
    ));
    assert_eq!(record.values().len(), Record::SCHEMA.len());
    Ok(())
}
