//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names consistent between the engine, the
//! HTTP boundary and the test capture layer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TRACE_ID: &str = "trace_id";

// Selection sizes
pub const FIELD_PROTOCOL_COUNT: &str = "protocol_count";
pub const FIELD_CANDIDATE_COUNT: &str = "candidate_count";
pub const FIELD_SURVIVOR_COUNT: &str = "survivor_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Correlation headers
pub const HEADER_REQUEST_ID: &str = "x-request-id";
pub const HEADER_TRACE_ID: &str = "x-trace-id";
