//! JSON envelopes for `--json` output.
//!
//! Every payload is wrapped as `{success: true, <key>: data}` and failures as
//! `{success: false, error: message}`, so scripts can branch on one field.

use serde_json::{json, Value};

/// Wrap a command result under `key`.
pub fn wrap_response(key: &str, result: Value) -> Value {
    json!({
        "success": true,
        key: result,
    })
}

/// Wrap an error for JSON consumers.
pub fn wrap_error(error: &anyhow::Error) -> Value {
    json!({
        "success": false,
        "error": format!("{error:#}"),
    })
}
