use crate::value::PropertyValue;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// A bag of event properties, each recorded with its native type.
/// Setting an existing key replaces its value (and type) in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventProperties {
    properties: IndexMap<String, PropertyValue>,
}

impl EventProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: PropertyValue) {
        self.properties.insert(key.into(), value);
    }

    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.set(key, PropertyValue::String(value.into()));
    }

    pub fn set_double(&mut self, key: impl Into<String>, value: f64) {
        self.set(key, PropertyValue::Double(value));
    }

    pub fn set_int64(&mut self, key: impl Into<String>, value: i64) {
        self.set(key, PropertyValue::Long(value));
    }

    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) {
        self.set(key, PropertyValue::Boolean(value));
    }

    pub fn set_date(&mut self, key: impl Into<String>, value: DateTime<Utc>) {
        self.set(key, PropertyValue::DateTime(value));
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[derive(Serialize)]
struct WireProperty<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    value: &'a PropertyValue,
}

// Wire form: [{"name": .., "type": "string"|"double"|"long"|"boolean"|"dateTime", "value": ..}]
impl Serialize for EventProperties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.properties.iter().map(|(name, value)| WireProperty {
            name: name.as_str(),
            kind: value.ty().wire_name(),
            value,
        }))
    }
}

/// What gets attached to a tracked event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EventPayload {
    /// Every property was a string.
    Strings(IndexMap<String, String>),
    /// At least one property had a non-string type.
    Typed(EventProperties),
}

impl EventPayload {
    pub fn as_strings(&self) -> Option<&IndexMap<String, String>> {
        match self {
            EventPayload::Strings(map) => Some(map),
            EventPayload::Typed(_) => None,
        }
    }

    pub fn as_typed(&self) -> Option<&EventProperties> {
        match self {
            EventPayload::Strings(_) => None,
            EventPayload::Typed(props) => Some(props),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            EventPayload::Strings(map) => map.len(),
            EventPayload::Typed(props) => props.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_json_pretty(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
