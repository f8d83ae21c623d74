use pretty_assertions::assert_eq;

use chrono::{TimeZone, Utc};
use event_props::{EventPropertiesSection, PropertyRow, PropertyType, PropertyValue};
use serde_json::json;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[test]
fn string_payload_serializes_as_object() -> Result<()> {
    let mut section = EventPropertiesSection::new();
    section.add_property();
    section.add_property();

    let payload = section.collect().ok_or("expected payload")?;
    let value = serde_json::to_value(&payload)?;
    assert_eq!(value, json!({ "key1": "value1", "key0": "value0" }));
    Ok(())
}

#[test]
fn typed_payload_serializes_as_named_typed_list() -> Result<()> {
    let when = Utc.with_ymd_and_hms(2017, 5, 1, 12, 0, 0).unwrap();
    let mut section = EventPropertiesSection::new();
    for _ in 0..5 {
        section.add_property();
    }
    section.update(0, PropertyRow::new("s", PropertyValue::String("x".into())))?;
    section.update(1, PropertyRow::new("d", PropertyValue::Double(1.5)))?;
    section.update(2, PropertyRow::new("l", PropertyValue::Long(42)))?;
    section.update(3, PropertyRow::new("b", PropertyValue::Boolean(false)))?;
    section.update(4, PropertyRow::new("t", PropertyValue::DateTime(when)))?;

    let payload = section.collect().ok_or("expected payload")?;
    let value = serde_json::to_value(&payload)?;
    assert_eq!(
        value,
        json!([
            { "name": "s", "type": "string", "value": "x" },
            { "name": "d", "type": "double", "value": 1.5 },
            { "name": "l", "type": "long", "value": 42 },
            { "name": "b", "type": "boolean", "value": false },
            { "name": "t", "type": "dateTime", "value": "2017-05-01T12:00:00.000Z" },
        ])
    );
    Ok(())
}

#[test]
fn non_finite_text_never_serializes_as_null_double() -> Result<()> {
    for text in ["NaN", "inf", "-inf"] {
        let mut section = EventPropertiesSection::new();
        section.add_property();
        section.update(0, PropertyRow::new("d", PropertyValue::String(text.into())))?;
        section.set_type(0, PropertyType::Double)?;

        let payload = section.collect().ok_or("expected payload")?;
        let value = serde_json::to_value(&payload)?;
        assert_eq!(value, json!([{ "name": "d", "type": "double", "value": 0.0 }]));
    }
    Ok(())
}
