use pretty_assertions::assert_eq;

use event_props::{
    CellView, PropertiesTableSection, PropertyRow, PropertyType, PropertyValue, RowKind,
    SectionError,
};

/// Cell that records which rows it was shown and applies a scripted edit.
struct ScriptedCell {
    shown: Vec<(usize, String)>,
    edit: Option<PropertyRow>,
}

impl ScriptedCell {
    fn new(edit: Option<PropertyRow>) -> Self {
        Self {
            shown: Vec::new(),
            edit,
        }
    }
}

impl CellView for ScriptedCell {
    fn show(&mut self, row: usize, state: &PropertyRow) -> Option<PropertyRow> {
        self.shown.push((row, state.key.clone()));
        self.edit.take()
    }
}

#[test]
fn rows_are_offset_by_leading_rows() {
    let mut table = PropertiesTableSection::with_offset(3);
    table.insert_row();
    table.insert_row();

    assert_eq!(table.number_of_rows(), 5);
    assert_eq!(table.row_kind(2), RowKind::Leading);
    assert_eq!(table.local_index(3), Ok(0));
    assert_eq!(table.local_index(4), Ok(1));
    assert_eq!(
        table.local_index(5),
        Err(SectionError::RowOutOfRange { index: 2, count: 2 })
    );
}

#[test]
fn render_row_binds_corrected_index_and_applies_edit() {
    let mut table = PropertiesTableSection::new();
    table.insert_row();
    table.insert_row();

    let mut cell = ScriptedCell::new(Some(PropertyRow::new("count", PropertyValue::Long(3))));
    assert_eq!(table.render_row(2, &mut cell), Ok(true));
    assert_eq!(cell.shown, vec![(2, "key0".to_string())]);

    let edited = table.editor().row(1).unwrap();
    assert_eq!(edited.key, "count");
    assert_eq!(edited.ty(), PropertyType::Long);
    assert_eq!(table.editor().row(0).unwrap().key, "key1");
}

#[test]
fn render_row_without_edit_leaves_state() {
    let mut table = PropertiesTableSection::new();
    table.insert_row();
    let mut cell = ScriptedCell::new(None);
    assert_eq!(table.render_row(1, &mut cell), Ok(false));
    assert_eq!(table.editor().row(0).unwrap().key, "key0");
}

#[test]
fn delete_row_uses_corrected_index() {
    let mut table = PropertiesTableSection::new();
    table.insert_row();
    table.insert_row();
    table.insert_row();

    let removed = table.delete_row(2).unwrap();
    assert_eq!(removed.key, "key1");
    assert_eq!(table.number_of_rows(), 3);

    assert_eq!(
        table.delete_row(0),
        Err(SectionError::NotAPropertyRow { row: 0, offset: 1 })
    );
    assert_eq!(table.number_of_rows(), 3);
}

#[test]
fn collect_through_host_matches_editor() {
    let mut table = PropertiesTableSection::new();
    assert!(table.collect().is_none());
    table.insert_row();
    table.editor_mut().set_type(0, PropertyType::Double).unwrap();
    let payload = table.collect().unwrap();
    assert_eq!(
        payload.as_typed().and_then(|p| p.get("key0")),
        Some(&PropertyValue::Double(0.0))
    );
}
