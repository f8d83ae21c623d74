//! Table-host side of the property editor.
//!
//! The host draws one table whose first `offset` rows belong to something else (the
//! "Add property" row by default). Global row numbers are translated to local property
//! indices here and nowhere else.

use crate::properties::EventPayload;
use crate::section::{EventPropertiesSection, PropertyRow, SectionError};
use crate::statics;

/// A view that can display and edit one property row.
pub trait CellView {
    /// Show `state` for table row `row`. Returns the new state if the user edited it.
    fn show(&mut self, row: usize, state: &PropertyRow) -> Option<PropertyRow>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// A row before the properties (e.g. the insert row).
    Leading,
    /// A property row, with its local index.
    Property(usize),
    /// Past the last property row.
    Outside,
}

#[derive(Debug, Clone)]
pub struct PropertiesTableSection {
    offset: usize,
    editor: EventPropertiesSection,
}

impl Default for PropertiesTableSection {
    fn default() -> Self {
        Self::with_offset(statics::PROPERTY_CELL_OFFSET)
    }
}

impl PropertiesTableSection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(offset: usize) -> Self {
        Self {
            offset,
            editor: EventPropertiesSection::new(),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn editor(&self) -> &EventPropertiesSection {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EventPropertiesSection {
        &mut self.editor
    }

    pub fn number_of_rows(&self) -> usize {
        self.offset + self.editor.row_count()
    }

    pub fn row_kind(&self, row: usize) -> RowKind {
        if row < self.offset {
            RowKind::Leading
        } else if row - self.offset < self.editor.row_count() {
            RowKind::Property(row - self.offset)
        } else {
            RowKind::Outside
        }
    }

    pub fn local_index(&self, row: usize) -> Result<usize, SectionError> {
        match self.row_kind(row) {
            RowKind::Property(index) => Ok(index),
            RowKind::Leading => Err(SectionError::NotAPropertyRow {
                row,
                offset: self.offset,
            }),
            RowKind::Outside => Err(SectionError::RowOutOfRange {
                index: row - self.offset,
                count: self.editor.row_count(),
            }),
        }
    }

    /// Draw the property at table row `row` and apply whatever the cell reports.
    /// Returns whether the row changed.
    pub fn render_row<V: CellView + ?Sized>(
        &mut self,
        row: usize,
        view: &mut V,
    ) -> Result<bool, SectionError> {
        let index = self.local_index(row)?;
        let Some(state) = self.editor.row(index) else {
            return Err(SectionError::RowOutOfRange {
                index,
                count: self.editor.row_count(),
            });
        };
        let Some(edited) = view.show(row, state).filter(|edited| edited != state) else {
            return Ok(false);
        };
        self.editor.update(index, edited)?;
        Ok(true)
    }

    /// Add a property. Returns the table row it now occupies.
    pub fn insert_row(&mut self) -> usize {
        self.editor.add_property();
        self.offset
    }

    pub fn delete_row(&mut self, row: usize) -> Result<PropertyRow, SectionError> {
        let index = self.local_index(row)?;
        self.editor.remove_property(index)
    }

    pub fn collect(&self) -> Option<EventPayload> {
        self.editor.collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{CellView, PropertiesTableSection, RowKind};
    use crate::section::{PropertyRow, SectionError};
    use crate::value::PropertyValue;

    struct Untouched;

    impl CellView for Untouched {
        fn show(&mut self, _row: usize, _state: &PropertyRow) -> Option<PropertyRow> {
            None
        }
    }

    #[test]
    fn default_offset_reserves_insert_row() {
        let mut table = PropertiesTableSection::new();
        assert_eq!(table.offset(), 1);
        assert_eq!(table.number_of_rows(), 1);
        assert_eq!(table.row_kind(0), RowKind::Leading);

        assert_eq!(table.insert_row(), 1);
        assert_eq!(table.number_of_rows(), 2);
        assert_eq!(table.row_kind(1), RowKind::Property(0));
        assert_eq!(table.row_kind(2), RowKind::Outside);
    }

    #[test]
    fn leading_rows_are_not_properties() {
        let mut table = PropertiesTableSection::with_offset(2);
        table.insert_row();
        assert_eq!(
            table.render_row(1, &mut Untouched),
            Err(SectionError::NotAPropertyRow { row: 1, offset: 2 })
        );
        assert_eq!(table.render_row(2, &mut Untouched), Ok(false));
    }

    #[test]
    fn rendering_same_state_reports_no_change() {
        struct Echo;
        impl CellView for Echo {
            fn show(&mut self, _row: usize, state: &PropertyRow) -> Option<PropertyRow> {
                Some(state.clone())
            }
        }

        let mut table = PropertiesTableSection::new();
        table.insert_row();
        assert_eq!(table.render_row(1, &mut Echo), Ok(false));
        assert_eq!(
            table.editor().row(0).map(|r| r.value.clone()),
            Some(PropertyValue::String("value0".into()))
        );
    }
}
