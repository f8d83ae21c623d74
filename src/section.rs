use crate::properties::{EventPayload, EventProperties};
use crate::statics;
use crate::value::{PropertyType, PropertyValue};
use indexmap::IndexMap;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionError {
    #[error("property row {index} out of range ({count} properties)")]
    RowOutOfRange { index: usize, count: usize },
    #[error("table row {row} is not a property row (properties start at row {offset})")]
    NotAPropertyRow { row: usize, offset: usize },
}

/// One editable key/value pair. The type is carried by the value.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRow {
    pub key: String,
    pub value: PropertyValue,
}

impl PropertyRow {
    pub fn new(key: impl Into<String>, value: PropertyValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// The row inserted when the list already holds `n` properties.
    pub fn placeholder(n: usize) -> Self {
        Self::new(
            format!("{}{n}", statics::DEFAULT_KEY_PREFIX),
            PropertyValue::String(format!("{}{n}", statics::DEFAULT_VALUE_PREFIX)),
        )
    }

    pub fn ty(&self) -> PropertyType {
        self.value.ty()
    }
}

/// The ordered list of event properties being edited.
/// Indices are local: 0 is the first property, regardless of where the host draws it.
#[derive(Debug, Clone, Default)]
pub struct EventPropertiesSection {
    rows: Vec<PropertyRow>,
}

impl EventPropertiesSection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[PropertyRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&PropertyRow> {
        self.rows.get(index)
    }

    /// Prepend a default string property named after the current count.
    pub fn add_property(&mut self) {
        let row = PropertyRow::placeholder(self.row_count());
        debug!(key = %row.key, "adding event property");
        self.rows.insert(0, row);
    }

    pub fn remove_property(&mut self, index: usize) -> Result<PropertyRow, SectionError> {
        self.check_index(index)?;
        let removed = self.rows.remove(index);
        debug!(index, key = %removed.key, "removed event property");
        Ok(removed)
    }

    /// Replace the row at `index` with the state reported by its cell.
    pub fn update(&mut self, index: usize, row: PropertyRow) -> Result<(), SectionError> {
        self.check_index(index)?;
        debug!(index, key = %row.key, ty = %row.ty(), "updated event property");
        self.rows[index] = row;
        Ok(())
    }

    /// Change a row's type, converting its current value.
    pub fn set_type(&mut self, index: usize, ty: PropertyType) -> Result<(), SectionError> {
        self.check_index(index)?;
        let row = &mut self.rows[index];
        row.value = row.value.coerce_to(ty);
        debug!(index, key = %row.key, %ty, "changed event property type");
        Ok(())
    }

    /// Build the payload for a tracked event.
    ///
    /// Returns `None` when there are no properties, a plain string map when every row
    /// is a string, and a typed bag (string rows included) otherwise. Rows are visited
    /// in list order, so for duplicate keys the row nearest the end of the list wins.
    pub fn collect(&self) -> Option<EventPayload> {
        if self.rows.is_empty() {
            return None;
        }

        let mut only_strings = true;
        let mut strings = IndexMap::new();
        let mut typed = EventProperties::new();
        for row in &self.rows {
            match &row.value {
                PropertyValue::String(s) => {
                    typed.set_string(&row.key, s);
                    strings.insert(row.key.clone(), s.clone());
                }
                PropertyValue::Double(v) => {
                    typed.set_double(&row.key, *v);
                    only_strings = false;
                }
                PropertyValue::Long(v) => {
                    typed.set_int64(&row.key, *v);
                    only_strings = false;
                }
                PropertyValue::Boolean(b) => {
                    typed.set_bool(&row.key, *b);
                    only_strings = false;
                }
                PropertyValue::DateTime(dt) => {
                    typed.set_date(&row.key, *dt);
                    only_strings = false;
                }
            }
        }

        if only_strings {
            Some(EventPayload::Strings(strings))
        } else {
            Some(EventPayload::Typed(typed))
        }
    }

    fn check_index(&self, index: usize) -> Result<(), SectionError> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(SectionError::RowOutOfRange {
                index,
                count: self.rows.len(),
            })
        }
    }
}
