use crate::domain::model::{Entity, RawRecord, UNKNOWN_NAME};
use serde_json::Value;

/// Walks `path` through nested objects. Any missing key or non-object step yields `None`.
pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(value, |current, key| current.as_object()?.get(*key))
}

/// Display text for a field value; `null` counts as absent.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn text_at(value: &Value, path: &[&str]) -> Option<String> {
    lookup(value, path).and_then(value_text)
}

/// Maps one raw record onto an [`Entity`]. Never fails.
pub fn normalize(record: &RawRecord) -> Entity {
    let data = &record.data;

    let name = text_at(data, &["name"]).unwrap_or_else(|| UNKNOWN_NAME.to_string());
    let diet = text_at(data, &["characteristics", "diet"]);
    // Only the first location is ever shown.
    let location = lookup(data, &["locations"])
        .and_then(Value::as_array)
        .and_then(|locations| locations.first())
        .and_then(value_text);
    let animal_type = text_at(data, &["taxonomy", "class"]);

    Entity {
        name,
        diet,
        location,
        animal_type,
    }
}

pub fn normalize_all(records: &[RawRecord]) -> Vec<Entity> {
    records.iter().map(normalize).collect()
}
