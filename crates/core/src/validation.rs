//! Validation of Practicum API responses
//!
//! Every failure is logged here before it is handed back to the caller.

use serde_json::Value;
use tracing::error;

use crate::error::{ValidationError, ValidationResult};
use crate::models::Homework;

/// Extract the `homeworks` list from a parsed response body
///
/// The list is returned as-is: order preserved, nothing deduplicated.
pub fn check_response(body: &Value) -> ValidationResult<Vec<Value>> {
    let Some(homeworks) = body.get("homeworks") else {
        error!("Invalid key: response has no 'homeworks' field");
        return Err(ValidationError::MissingKey("homeworks"));
    };

    match homeworks {
        Value::Array(list) => Ok(list.clone()),
        other => {
            error!("Malformed data: 'homeworks' is not a list: {}", other);
            Err(ValidationError::MalformedHomeworks)
        }
    }
}

/// Parse a single homework record, logging why it was rejected
pub fn parse_homework(record: &Value) -> ValidationResult<Homework> {
    Homework::try_from(record).inspect_err(|e| {
        error!("Cannot parse homework status: {}", e);
    })
}

/// Format the notification text for a single homework record
pub fn parse_status(record: &Value) -> ValidationResult<String> {
    parse_homework(record).map(|homework| homework.status_message())
}

/// Server-reported timestamp to use as the next cursor
pub fn current_date(body: &Value) -> Option<i64> {
    body.get("current_date").and_then(Value::as_i64)
}
