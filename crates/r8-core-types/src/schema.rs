//! Canonical schema constants for structured logging
//!
//! Every log line emitted through the `log_op_*` macros uses these keys,
//! so downstream queries can rely on them.

pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Operation payload sizes
pub const FIELD_INPUT_LEN: &str = "input_len";
pub const FIELD_GROUP_COUNT: &str = "group_count";
pub const FIELD_CHANGE_COUNT: &str = "change_count";
pub const FIELD_ROW_ID: &str = "row_id";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_error_keys_are_flat() {
        // tracing field names cannot contain '.' when passed as identifiers
        assert!(!FIELD_ERR_KIND.contains('.'));
        assert!(!FIELD_ERR_CODE.contains('.'));
    }
}
