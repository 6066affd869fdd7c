use serde_json::{Map, Value};

/// Fields the backend may carry a human-readable error message in, by priority.
pub const ERROR_MESSAGE_FIELDS: [&str; 3] = ["hata", "message", "error"];

/// Return the first of `fields` holding a non-empty string in a JSON object.
///
/// The backend is inconsistent about field naming, so payloads are checked in a
/// fixed priority order rather than deserialized into a single struct.
pub fn first_str_field<'a>(value: &'a Value, fields: &[&str]) -> Option<&'a str> {
    first_str_in(value.as_object()?, fields)
}

pub fn first_str_in<'a>(object: &'a Map<String, Value>, fields: &[&str]) -> Option<&'a str> {
    fields.iter().find_map(|field| {
        object
            .get(*field)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    })
}

/// Extract the display message from an error response body.
pub fn error_message(body: &Value) -> Option<&str> {
    first_str_field(body, &ERROR_MESSAGE_FIELDS)
}
