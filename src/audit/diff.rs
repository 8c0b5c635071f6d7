//! Field-level diff between two serialized expenses

use serde_json::Value;

/// Summarize the top-level fields that differ between two JSON objects
///
/// Returns `None` when nothing changed. Non-object values are compared whole.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let changes: Vec<String> = match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut keys: Vec<&String> = before_obj.keys().chain(after_obj.keys()).collect();
            keys.sort();
            keys.dedup();

            keys.into_iter()
                .filter_map(|key| match (before_obj.get(key), after_obj.get(key)) {
                    (Some(b), Some(a)) if b == a => None,
                    (b, a) => Some(format!(
                        "{}: {} -> {}",
                        key,
                        b.map(format_value).unwrap_or_else(|| "(none)".into()),
                        a.map(format_value).unwrap_or_else(|| "(none)".into())
                    )),
                })
                .collect()
        }
        _ if before != after => vec![format!("{} -> {}", format_value(before), format_value(after))],
        _ => Vec::new(),
    };

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) if s.chars().count() > 40 => {
            let head: String = s.chars().take(37).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        other => other.to_string(),
    }
}
