//! Removal of empty containers from an encoded document.

use serde_json::Value;

/// Recursively drop empty objects, empty arrays and nulls held by objects.
///
/// Array elements are pruned internally but never removed, so fixed-position slots keep
/// their index. Pruning an already pruned document changes nothing.
pub fn prune(value: &mut Value) {
    match value {
        Value::Object(map) => map.retain(|_, child| {
            prune(child);
            !is_vacant(child)
        }),
        Value::Array(items) => items.iter_mut().for_each(prune),
        _ => {}
    }
}

fn is_vacant(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prune_removes_nested_empties() {
        let mut doc = json!({
            "Misc": {
                "Bomb timer": {},
                "Menu key": 45,
                "Purchase List": { "Nested": {} },
            },
            "Chams": {},
            "Gone": null,
            "Name": "",
            "Zero": 0,
        });

        prune(&mut doc);

        assert_eq!(doc, json!({ "Misc": { "Menu key": 45 }, "Name": "", "Zero": 0 }));
    }

    #[test]
    fn test_prune_keeps_array_slots() {
        let mut doc = json!({
            "Aimbot": [{}, { "Fov": 5.0, "Extra": {} }, {}],
            "Empty": [],
        });

        prune(&mut doc);

        assert_eq!(doc, json!({ "Aimbot": [{}, { "Fov": 5.0 }, {}] }));
    }

    #[test]
    fn test_prune_is_idempotent() {
        let mut doc = json!({
            "A": { "B": { "C": {} }, "D": [[], {}] },
            "E": [{ "F": {} }],
        });

        prune(&mut doc);
        let once = doc.clone();
        prune(&mut doc);

        assert_eq!(doc, once);
        assert_eq!(doc, json!({ "A": { "D": [[], {}] }, "E": [{}] }));
    }
}
