use crate::properties::EventPayload;
use crate::section::PropertyRow;
use crate::statics;
use crate::table::{CellView, PropertiesTableSection, RowKind};
use crate::value::{PropertyType, PropertyValue, format_date_time};
use chrono::{DateTime, Utc};
use eframe::egui;
use egui_extras::{Column, TableBuilder, TableRow};
use tracing::{debug, info, warn};

pub fn run_gui() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 640.0]),
        ..Default::default()
    };
    let title = format!("{} {}", statics::EN_APP_TITLE, env!("CARGO_PKG_VERSION"));
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(EventPropertiesApp::new()))),
    )
}

/// Demo screen: an event name, a table of typed properties, and a "track" action
/// that shows the payload the properties collapse into.
struct EventPropertiesApp {
    event_name: String,
    table: PropertiesTableSection,
    status: String,
    last_error: Option<String>,
    last_payload: Option<String>,
}

impl EventPropertiesApp {
    fn new() -> Self {
        Self {
            event_name: statics::EN_DEFAULT_EVENT_NAME.to_string(),
            table: PropertiesTableSection::new(),
            status: String::new(),
            last_error: None,
            last_payload: None,
        }
    }

    fn track_event(&mut self) {
        let name = self.event_name.trim().to_string();
        let payload = self.table.collect();
        self.status = tracked_status(&name, payload.as_ref());

        let Some(payload) = payload else {
            info!(event = %name, "tracking event without properties");
            self.last_payload = None;
            self.last_error = None;
            return;
        };

        info!(
            event = %name,
            properties = payload.len(),
            typed = payload.as_typed().is_some(),
            "tracking event"
        );
        match payload.to_json_pretty() {
            Ok(json) => {
                self.last_payload = Some(json);
                self.last_error = None;
            }
            Err(e) => {
                self.last_error = Some(format!("Failed to render payload: {e:#}"));
            }
        }
    }

    fn render_properties_table(&mut self, ui: &mut egui::Ui) {
        let row_h = ui.text_style_height(&egui::TextStyle::Body) + 10.0;
        let row_count = self.table.number_of_rows();
        let table = &mut self.table;

        let mut add_clicked = false;
        let mut delete_row: Option<usize> = None;
        let mut render_error = None;

        ui.push_id("event_properties_table", |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::initial(200.0).resizable(true))
                .column(Column::initial(120.0).resizable(false))
                .column(Column::remainder().resizable(true))
                .column(Column::initial(70.0).resizable(false))
                .header(row_h, |mut header| {
                    header.col(|ui| {
                        ui.strong(statics::EN_COL_KEY);
                    });
                    header.col(|ui| {
                        ui.strong(statics::EN_COL_TYPE);
                    });
                    header.col(|ui| {
                        ui.strong(statics::EN_COL_VALUE);
                    });
                    header.col(|ui| {
                        ui.strong("");
                    });
                })
                .body(|mut body| {
                    for row in 0..row_count {
                        body.row(row_h, |mut table_row| match table.row_kind(row) {
                            RowKind::Leading => {
                                table_row.col(|ui| {
                                    if ui.button(statics::EN_BTN_ADD_PROPERTY).clicked() {
                                        add_clicked = true;
                                    }
                                });
                            }
                            RowKind::Property(_) => {
                                let mut cell = PropertyCell {
                                    row: &mut table_row,
                                    delete_requested: false,
                                };
                                if let Err(e) = table.render_row(row, &mut cell) {
                                    render_error = Some(e);
                                }
                                if cell.delete_requested {
                                    delete_row = Some(row);
                                }
                            }
                            RowKind::Outside => {}
                        });
                    }
                });
        });

        if let Some(e) = render_error {
            warn!(error = %e, "could not render property row");
            self.last_error = Some(e.to_string());
        }

        if add_clicked {
            let row = self.table.insert_row();
            debug!(row, "inserted property row");
        }

        if let Some(row) = delete_row {
            match self.table.delete_row(row) {
                Ok(_) => self.last_error = None,
                Err(e) => self.last_error = Some(format!("Failed to delete property: {e}")),
            }
        }
    }
}

fn tracked_status(event_name: &str, payload: Option<&EventPayload>) -> String {
    match payload {
        None => format!(
            "{} {event_name}. {}",
            statics::EN_PREFIX_TRACKED,
            statics::EN_STATUS_NO_PROPERTIES
        ),
        Some(EventPayload::Strings(map)) => format!(
            "{} {event_name} with {} string properties.",
            statics::EN_PREFIX_TRACKED,
            map.len()
        ),
        Some(EventPayload::Typed(props)) => format!(
            "{} {event_name} with {} typed properties.",
            statics::EN_PREFIX_TRACKED,
            props.len()
        ),
    }
}

/// One property drawn across a table row: key, type, value, delete.
struct PropertyCell<'r, 'a, 'b> {
    row: &'r mut TableRow<'a, 'b>,
    delete_requested: bool,
}

impl CellView for PropertyCell<'_, '_, '_> {
    fn show(&mut self, row: usize, state: &PropertyRow) -> Option<PropertyRow> {
        let mut edited = state.clone();
        let mut changed = false;
        let mut delete = false;

        self.row.col(|ui| {
            changed |= ui
                .add(egui::TextEdit::singleline(&mut edited.key).desired_width(ui.available_width()))
                .changed();
        });

        self.row.col(|ui| {
            let current = edited.ty();
            let mut picked = current;
            egui::ComboBox::from_id_salt(("property_type", row))
                .selected_text(picked.label())
                .show_ui(ui, |ui| {
                    for ty in PropertyType::ALL {
                        ui.selectable_value(&mut picked, ty, ty.label());
                    }
                });
            if picked != current {
                edited.value = edited.value.coerce_to(picked);
                changed = true;
            }
        });

        self.row.col(|ui| {
            changed |= value_editor(ui, &mut edited.value);
        });

        self.row.col(|ui| {
            if ui.small_button(statics::EN_BTN_DELETE).clicked() {
                delete = true;
            }
        });

        self.delete_requested = delete;
        changed.then_some(edited)
    }
}

fn value_editor(ui: &mut egui::Ui, value: &mut PropertyValue) -> bool {
    match value {
        PropertyValue::String(s) => ui
            .add(egui::TextEdit::singleline(s).desired_width(ui.available_width()))
            .changed(),
        PropertyValue::Double(x) => ui
            .add(
                egui::DragValue::new(x)
                    .speed(0.1)
                    .range(f64::MIN..=f64::MAX),
            )
            .changed(),
        PropertyValue::Long(x) => ui.add(egui::DragValue::new(x).speed(1)).changed(),
        PropertyValue::Boolean(b) => ui.checkbox(b, "").changed(),
        PropertyValue::DateTime(dt) => date_time_editor(ui, dt),
    }
}

fn date_time_editor(ui: &mut egui::Ui, dt: &mut DateTime<Utc>) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        let mut secs = dt.timestamp();
        let resp = ui.add(egui::DragValue::new(&mut secs).speed(60));
        ui.label(statics::EN_LABEL_UNIX_SECONDS);
        if resp.changed() {
            // Out-of-range timestamps are ignored; the drag just stops there.
            if let Some(next) = DateTime::from_timestamp(secs, 0) {
                *dt = next;
                changed = true;
            }
        }
        if ui.small_button(statics::EN_BTN_NOW).clicked() {
            *dt = Utc::now();
            changed = true;
        }
        ui.monospace(format_date_time(dt));
    });
    changed
}

impl eframe::App for EventPropertiesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(statics::EN_LABEL_EVENT_NAME);
                ui.add(
                    egui::TextEdit::singleline(&mut self.event_name)
                        .hint_text(statics::EN_HINT_EVENT_NAME),
                );
                if ui.button(statics::EN_BTN_TRACK_EVENT).clicked() {
                    self.track_event();
                }
            });
        });

        if let Some(err) = self.last_error.clone() {
            egui::TopBottomPanel::top("error_bar").show(ctx, |ui| {
                ui.colored_label(egui::Color32::RED, err);
            });
        }

        egui::TopBottomPanel::bottom("bottom_status").show(ctx, |ui| {
            ui.label(self.status.as_str());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(statics::EN_HEADING_PROPERTIES);
            self.render_properties_table(ui);

            if let Some(payload) = &self.last_payload {
                ui.separator();
                ui.label(statics::EN_HEADING_PAYLOAD);
                let mut preview = payload.clone();
                ui.add_enabled(
                    false,
                    egui::TextEdit::multiline(&mut preview)
                        .font(egui::TextStyle::Monospace)
                        .desired_rows(8),
                );
            }
        });
    }
}
