//! Typed analytics event property editor.
//! Keeps an ordered list of typed key/value rows for a table host and collapses them
//! into either a plain string map or a typed property bag when an event is tracked.

mod gui;
mod properties;
mod section;
pub mod statics;
mod table;
mod value;

pub use gui::run_gui;
pub use properties::{EventPayload, EventProperties};
pub use section::{EventPropertiesSection, PropertyRow, SectionError};
pub use table::{CellView, PropertiesTableSection, RowKind};
pub use value::{PropertyType, PropertyValue, format_date_time};
