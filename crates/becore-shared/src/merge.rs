use serde_json::Value;

/// Merge `overlay` into `base`.
///
/// Objects are merged recursively. Any other overlay value, including lists
/// and `null`, replaces the base value outright.
pub fn merge_over(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(slot) => merge_over(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn objects_merge_and_lists_replace() {
        let mut base = json!({
            "a": { "x": 1, "y": 2 },
            "list": [1, 2, 3],
            "keep": "base"
        });
        merge_over(
            &mut base,
            json!({ "a": { "y": 20, "z": 30 }, "list": [9], "extra": true }),
        );
        assert_eq!(
            base,
            json!({
                "a": { "x": 1, "y": 20, "z": 30 },
                "list": [9],
                "keep": "base",
                "extra": true
            })
        );
    }

    #[test]
    fn non_object_overlay_replaces_root() {
        let mut base = json!({ "a": 1 });
        merge_over(&mut base, json!([1]));
        assert_eq!(base, json!([1]));
    }
}
