//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Graph identifiers
pub const FIELD_ELEMENT: &str = "element";
pub const FIELD_INSTANCE: &str = "instance";
pub const FIELD_ENTITY: &str = "entity";
pub const FIELD_PROPERTY_ID: &str = "property_id";
pub const FIELD_RELATION_ID: &str = "relation_id";

// Outcome sizes
pub const FIELD_DELETED_COUNT: &str = "deleted_count";
pub const FIELD_LINKS_REMOVED: &str = "links_removed";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
