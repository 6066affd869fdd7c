//! Readers for loosely typed backend payloads rendered as-is by the pages.

use serde_json::Value;

/// First of `fields` holding a non-empty string or a number, as display text.
pub fn field_text(value: &Value, fields: &[&str]) -> Option<String> {
    fields.iter().find_map(|field| match value.get(*field) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Text at a nested path such as `["takim", "ad"]`.
pub fn path_text(value: &Value, path: &[&str]) -> Option<String> {
    let (last, parents) = path.split_last()?;
    let parent = parents
        .iter()
        .try_fold(value, |current, key| current.get(*key))?;

    field_text(parent, &[last])
}

/// Elements of a JSON array; anything else reads as empty.
pub fn list(value: &Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items.clone(),
        _ => Vec::new(),
    }
}

/// Numeric id under `id` or any of `fields`.
pub fn id_of(value: &Value, fields: &[&str]) -> Option<i64> {
    std::iter::once("id")
        .chain(fields.iter().copied())
        .find_map(|field| value.get(field).and_then(Value::as_i64))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    /// Expect the first non-empty string or number to win
    fn field_text_fallbacks() {
        let value = json!({ "message": "", "mesaj": "Harika maç", "skor": 3 });

        assert_eq!(
            field_text(&value, &["message", "mesaj"]).as_deref(),
            Some("Harika maç")
        );
        assert_eq!(field_text(&value, &["skor"]).as_deref(), Some("3"));
        assert_eq!(field_text(&value, &["yok"]), None);
    }

    #[test]
    /// Expect nested paths to resolve through objects
    fn path_text_resolves_nested() {
        let value = json!({ "takim": { "ad": "Trabzonspor" } });

        assert_eq!(
            path_text(&value, &["takim", "ad"]).as_deref(),
            Some("Trabzonspor")
        );
        assert_eq!(path_text(&value, &["oyuncu", "ad"]), None);
    }

    #[test]
    /// Expect non-arrays to read as empty lists
    fn list_of_non_array() {
        assert!(list(&json!({ "a": 1 })).is_empty());
        assert_eq!(list(&json!([1, 2])).len(), 2);
    }

    #[test]
    /// Expect the id to fall back to alternative fields
    fn id_fallbacks() {
        assert_eq!(id_of(&json!({ "yorum_id": 5 }), &["yorum_id"]), Some(5));
        assert_eq!(id_of(&json!({ "id": 1, "yorum_id": 5 }), &["yorum_id"]), Some(1));
        assert_eq!(id_of(&json!({}), &[]), None);
    }
}
