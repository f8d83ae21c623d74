// Central place for UI strings and other non-localized constants.
// Keep these out of gui.rs to reduce duplication and make tweaks safer.

// English UI strings (EN_ prefix to make future localization easier)
pub const EN_APP_TITLE: &str = "Event Properties";

pub const EN_LABEL_EVENT_NAME: &str = "Event name:";
pub const EN_HINT_EVENT_NAME: &str = "e.g. myEvent";
pub const EN_DEFAULT_EVENT_NAME: &str = "myEvent";

pub const EN_BTN_TRACK_EVENT: &str = "Track event";
pub const EN_BTN_ADD_PROPERTY: &str = "Add property";
pub const EN_BTN_DELETE: &str = "Delete";
pub const EN_BTN_NOW: &str = "Now";

pub const EN_HEADING_PROPERTIES: &str = "Properties";
pub const EN_HEADING_PAYLOAD: &str = "Last tracked payload";

pub const EN_COL_KEY: &str = "Key";
pub const EN_COL_TYPE: &str = "Type";
pub const EN_COL_VALUE: &str = "Value";

pub const EN_STATUS_NO_PROPERTIES: &str = "No properties attached.";
pub const EN_PREFIX_TRACKED: &str = "Tracked";
pub const EN_LABEL_UNIX_SECONDS: &str = "unix s";

pub const EN_TYPE_STRING: &str = "String";
pub const EN_TYPE_DOUBLE: &str = "Double";
pub const EN_TYPE_LONG: &str = "Long";
pub const EN_TYPE_BOOLEAN: &str = "Boolean";
pub const EN_TYPE_DATE_TIME: &str = "DateTime";

// Defaults for newly added properties: "key{n}" / "value{n}".
pub const DEFAULT_KEY_PREFIX: &str = "key";
pub const DEFAULT_VALUE_PREFIX: &str = "value";

// Rows drawn before the first property (the "Add property" row).
pub const PROPERTY_CELL_OFFSET: usize = 1;

// Typed property wire names.
pub const WIRE_TYPE_STRING: &str = "string";
pub const WIRE_TYPE_DOUBLE: &str = "double";
pub const WIRE_TYPE_LONG: &str = "long";
pub const WIRE_TYPE_BOOLEAN: &str = "boolean";
pub const WIRE_TYPE_DATE_TIME: &str = "dateTime";
