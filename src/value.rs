use crate::statics;
use anyhow::{Context, bail};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

/// The type tag shown in a property cell's type picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertyType {
    #[default]
    String,
    Double,
    Long,
    Boolean,
    DateTime,
}

impl PropertyType {
    pub const ALL: [PropertyType; 5] = [
        PropertyType::String,
        PropertyType::Double,
        PropertyType::Long,
        PropertyType::Boolean,
        PropertyType::DateTime,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PropertyType::String => statics::EN_TYPE_STRING,
            PropertyType::Double => statics::EN_TYPE_DOUBLE,
            PropertyType::Long => statics::EN_TYPE_LONG,
            PropertyType::Boolean => statics::EN_TYPE_BOOLEAN,
            PropertyType::DateTime => statics::EN_TYPE_DATE_TIME,
        }
    }

    /// Name used for the `type` field of a typed property on the wire.
    pub fn wire_name(self) -> &'static str {
        match self {
            PropertyType::String => statics::WIRE_TYPE_STRING,
            PropertyType::Double => statics::WIRE_TYPE_DOUBLE,
            PropertyType::Long => statics::WIRE_TYPE_LONG,
            PropertyType::Boolean => statics::WIRE_TYPE_BOOLEAN,
            PropertyType::DateTime => statics::WIRE_TYPE_DATE_TIME,
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A property value tagged with its type. The tag and the payload can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    String(String),
    Double(f64),
    Long(i64),
    Boolean(bool),
    DateTime(DateTime<Utc>),
}

impl PropertyValue {
    pub fn ty(&self) -> PropertyType {
        match self {
            PropertyValue::String(_) => PropertyType::String,
            PropertyValue::Double(_) => PropertyType::Double,
            PropertyValue::Long(_) => PropertyType::Long,
            PropertyValue::Boolean(_) => PropertyType::Boolean,
            PropertyValue::DateTime(_) => PropertyType::DateTime,
        }
    }

    /// Fresh value for a type picked with nothing to convert from.
    pub fn default_for(ty: PropertyType) -> PropertyValue {
        match ty {
            PropertyType::String => PropertyValue::String(String::new()),
            PropertyType::Double => PropertyValue::Double(0.0),
            PropertyType::Long => PropertyValue::Long(0),
            PropertyType::Boolean => PropertyValue::Boolean(false),
            PropertyType::DateTime => PropertyValue::DateTime(Utc::now()),
        }
    }

    /// Parse user-entered text as a value of the given type.
    pub fn parse_as(ty: PropertyType, text: &str) -> anyhow::Result<PropertyValue> {
        let trimmed = text.trim();
        let value = match ty {
            PropertyType::String => PropertyValue::String(text.to_string()),
            PropertyType::Double => {
                let v = trimmed
                    .parse::<f64>()
                    .with_context(|| format!("parsing {text:?} as {ty}"))?;
                if !v.is_finite() {
                    bail!("parsing {text:?} as {ty}: not a finite number");
                }
                PropertyValue::Double(v)
            }
            PropertyType::Long => PropertyValue::Long(
                trimmed
                    .parse::<i64>()
                    .with_context(|| format!("parsing {text:?} as {ty}"))?,
            ),
            PropertyType::Boolean => {
                let lower = trimmed.to_ascii_lowercase();
                match lower.as_str() {
                    "true" | "1" | "yes" | "y" => PropertyValue::Boolean(true),
                    "false" | "0" | "no" | "n" => PropertyValue::Boolean(false),
                    _ => bail!("parsing {text:?} as {ty}: not a boolean"),
                }
            }
            PropertyType::DateTime => PropertyValue::DateTime(
                DateTime::parse_from_rfc3339(trimmed)
                    .with_context(|| format!("parsing {text:?} as {ty}"))?
                    .with_timezone(&Utc),
            ),
        };
        Ok(value)
    }

    /// Convert to another type, keeping as much of the current content as makes sense.
    /// Falls back to [`PropertyValue::default_for`] when nothing carries over.
    pub fn coerce_to(&self, ty: PropertyType) -> PropertyValue {
        if self.ty() == ty {
            return self.clone();
        }
        match (self, ty) {
            (PropertyValue::String(s), _) => {
                Self::parse_as(ty, s).unwrap_or_else(|_| Self::default_for(ty))
            }
            (_, PropertyType::String) => PropertyValue::String(self.to_string()),

            (PropertyValue::Long(v), PropertyType::Double) => PropertyValue::Double(*v as f64),
            (PropertyValue::Boolean(b), PropertyType::Double) => {
                PropertyValue::Double(if *b { 1.0 } else { 0.0 })
            }
            (PropertyValue::DateTime(dt), PropertyType::Double) => {
                PropertyValue::Double(dt.timestamp() as f64)
            }

            (PropertyValue::Double(v), PropertyType::Long) => {
                PropertyValue::Long(if v.is_finite() { *v as i64 } else { 0 })
            }
            (PropertyValue::Boolean(b), PropertyType::Long) => PropertyValue::Long(i64::from(*b)),
            (PropertyValue::DateTime(dt), PropertyType::Long) => {
                PropertyValue::Long(dt.timestamp())
            }

            (PropertyValue::Double(v), PropertyType::Boolean) => PropertyValue::Boolean(*v != 0.0),
            (PropertyValue::Long(v), PropertyType::Boolean) => PropertyValue::Boolean(*v != 0),

            (PropertyValue::Long(v), PropertyType::DateTime) => DateTime::from_timestamp(*v, 0)
                .map(PropertyValue::DateTime)
                .unwrap_or_else(|| Self::default_for(ty)),
            (PropertyValue::Double(v), PropertyType::DateTime) if v.is_finite() => {
                DateTime::from_timestamp(*v as i64, 0)
                    .map(PropertyValue::DateTime)
                    .unwrap_or_else(|| Self::default_for(ty))
            }

            _ => Self::default_for(ty),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::String(s) => f.write_str(s),
            PropertyValue::Double(v) => {
                let mut buf = ryu::Buffer::new();
                f.write_str(buf.format(*v))
            }
            PropertyValue::Long(v) => write!(f, "{v}"),
            PropertyValue::Boolean(b) => write!(f, "{b}"),
            PropertyValue::DateTime(dt) => f.write_str(&format_date_time(dt)),
        }
    }
}

/// ISO-8601 UTC with millisecond precision, e.g. `2017-05-01T12:00:00.000Z`.
pub fn format_date_time(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropertyValue::String(s) => serializer.serialize_str(s),
            PropertyValue::Double(v) => serializer.serialize_f64(*v),
            PropertyValue::Long(v) => serializer.serialize_i64(*v),
            PropertyValue::Boolean(b) => serializer.serialize_bool(*b),
            PropertyValue::DateTime(dt) => serializer.serialize_str(&format_date_time(dt)),
        }
    }
}
