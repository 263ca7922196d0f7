use serde_json::Value;

/// Recursively merges `patch` into `target`.
///
/// Objects merge key by key; any other value (arrays included) replaces the
/// target value outright. Keys absent from `patch` are left alone.
pub fn merge_json(target: &mut Value, patch: Value) {
    match (target, patch) {
        (Value::Object(target_map), Value::Object(patch_map)) => {
            for (key, patch_value) in patch_map {
                match target_map.get_mut(&key) {
                    Some(existing) => merge_json(existing, patch_value),
                    None => {
                        target_map.insert(key, patch_value);
                    }
                }
            }
        }
        (target, patch) => *target = patch,
    }
}
