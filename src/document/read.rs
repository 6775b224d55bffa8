//! Merge-if-present readers.
//!
//! None of these functions ever reset a destination. Absent keys, values of the wrong
//! type and arrays of the wrong shape are skipped, so a tree holding defaults or values
//! from an earlier load keeps them.

use super::{Object, Record};
use crate::fonts::FontCatalog;
use indexmap::IndexMap;
use serde_json::Value;

/// Scalar types that can be taken out of a JSON value when the type tag matches.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromValue for i32 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_i64().and_then(|n| i32::try_from(n).ok())
    }
}

// Integers are rejected: a float field only accepts a number written as a float.
impl FromValue for f32 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) if n.is_f64() => n.as_f64().map(|f| f as f32),
            _ => None,
        }
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

/// Read a scalar field.
pub fn read<T: FromValue>(obj: &Object, key: &str, dest: &mut T) {
    if let Some(value) = obj.get(key).and_then(T::from_value) {
        *dest = value;
    }
}

/// Read a fixed-size scalar array. The array must have exactly `N` elements.
pub fn read_array<T: FromValue, const N: usize>(obj: &Object, key: &str, dest: &mut [T; N]) {
    let Some(items) = obj.get(key).and_then(Value::as_array) else {
        return;
    };
    if items.len() != N {
        return;
    }

    for (slot, item) in dest.iter_mut().zip(items) {
        if let Some(value) = T::from_value(item) {
            *slot = value;
        }
    }
}

/// Read a nested record. The value must be an object.
pub fn read_record<R: Record>(obj: &Object, key: &str, dest: &mut R, fonts: &mut FontCatalog) {
    if let Some(inner) = obj.get(key).and_then(Value::as_object) {
        dest.decode(inner, fonts);
    }
}

/// Read a fixed-size record array. The array must have exactly `N` elements; null and
/// empty elements leave their slot untouched.
pub fn read_records<R: Record, const N: usize>(
    obj: &Object,
    key: &str,
    dest: &mut [R; N],
    fonts: &mut FontCatalog,
) {
    let Some(items) = obj.get(key).and_then(Value::as_array) else {
        return;
    };
    if items.len() != N {
        return;
    }

    for (slot, item) in dest.iter_mut().zip(items) {
        if let Some(inner) = item.as_object().filter(|inner| !inner.is_empty()) {
            slot.decode(inner, fonts);
        }
    }
}

/// Read a record array of any length.
///
/// Elements past the destination's capacity are ignored. A null element leaves its slot
/// untouched and the following elements still land in their own slots.
pub fn read_records_lenient<R: Record, const N: usize>(
    obj: &Object,
    key: &str,
    dest: &mut [R; N],
    fonts: &mut FontCatalog,
) {
    let Some(items) = obj.get(key).and_then(Value::as_array) else {
        return;
    };

    for (slot, item) in dest.iter_mut().zip(items) {
        if let Some(inner) = item.as_object() {
            slot.decode(inner, fonts);
        }
    }
}

/// Read a name-keyed collection. Entries missing from `dest` start from their default.
pub fn read_map<R: Record>(
    obj: &Object,
    key: &str,
    dest: &mut IndexMap<String, R>,
    fonts: &mut FontCatalog,
) {
    let Some(entries) = obj.get(key).and_then(Value::as_object) else {
        return;
    };

    for (name, value) in entries {
        if let Some(inner) = value.as_object() {
            dest.entry(name.clone()).or_default().decode(inner, fonts);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq)]
    struct Slot {
        value: i32,
    }

    impl Record for Slot {
        fn decode(&mut self, obj: &Object, _fonts: &mut FontCatalog) {
            read(obj, "Value", &mut self.value);
        }

        fn encode(&self, _out: &mut Object, _baseline: &Self) {}
    }

    fn object(value: Value) -> Object {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_read_scalars_by_type_tag() {
        let obj = object(json!({
            "Bool": true,
            "Int": 42,
            "Float": 2.5,
            "Text": "hello",
        }));

        let mut flag = false;
        let mut int = 0;
        let mut float = 0.0f32;
        let mut text = String::new();

        read(&obj, "Bool", &mut flag);
        read(&obj, "Int", &mut int);
        read(&obj, "Float", &mut float);
        read(&obj, "Text", &mut text);

        assert!(flag);
        assert_eq!(int, 42);
        assert_eq!(float, 2.5);
        assert_eq!(text, "hello");
    }

    #[test]
    fn test_mismatched_type_leaves_destination() {
        let obj = object(json!({
            "Bool": 1,
            "Int": 1.5,
            "Float": 5,
            "Text": false,
            "Huge": 10_000_000_000i64,
        }));

        let mut flag = true;
        let mut int = 7;
        let mut float = 0.25f32;
        let mut text = "keep".to_string();
        let mut huge = 3;

        read(&obj, "Bool", &mut flag);
        read(&obj, "Int", &mut int);
        read(&obj, "Float", &mut float);
        read(&obj, "Text", &mut text);
        read(&obj, "Huge", &mut huge);
        read(&obj, "Absent", &mut int);

        assert!(flag);
        assert_eq!(int, 7);
        assert_eq!(float, 0.25);
        assert_eq!(text, "keep");
        assert_eq!(huge, 3);
    }

    #[test]
    fn test_strict_array_requires_exact_length() {
        let obj = object(json!({
            "Short": [0.5, 0.5],
            "Exact": [0.1, null, 0.3],
        }));

        let mut short = [1.0f32; 3];
        read_array(&obj, "Short", &mut short);
        assert_eq!(short, [1.0; 3]);

        let mut exact = [1.0f32; 3];
        read_array(&obj, "Exact", &mut exact);
        assert_eq!(exact, [0.1, 1.0, 0.3]);
    }

    #[test]
    fn test_strict_record_array_skips_null_and_empty() {
        let obj = object(json!({
            "Slots": [{"Value": 1}, null, {}, {"Value": 4}],
        }));
        let mut fonts = FontCatalog::default();

        let mut slots: [Slot; 4] = std::array::from_fn(|_| Slot { value: 9 });
        read_records(&obj, "Slots", &mut slots, &mut fonts);

        let values: Vec<i32> = slots.iter().map(|slot| slot.value).collect();
        assert_eq!(values, vec![1, 9, 9, 4]);

        let mut wrong_size: [Slot; 3] = Default::default();
        read_records(&obj, "Slots", &mut wrong_size, &mut fonts);
        assert!(wrong_size.iter().all(|slot| slot.value == 0));
    }

    #[test]
    fn test_lenient_record_array_reads_leading_slots() {
        let obj = object(json!({ "Slots": [{"Value": 1}, {"Value": 2}] }));
        let mut fonts = FontCatalog::default();

        let mut slots: [Slot; 4] = std::array::from_fn(|_| Slot { value: 9 });
        read_records_lenient(&obj, "Slots", &mut slots, &mut fonts);

        let values: Vec<i32> = slots.iter().map(|slot| slot.value).collect();
        assert_eq!(values, vec![1, 2, 9, 9]);
    }

    #[test]
    fn test_lenient_record_array_null_keeps_position() {
        let obj = object(json!({
            "Slots": [{"Value": 1}, null, {"Value": 3}, {"Value": 4}, {"Value": 5}],
        }));
        let mut fonts = FontCatalog::default();

        let mut slots: [Slot; 4] = std::array::from_fn(|_| Slot { value: 9 });
        read_records_lenient(&obj, "Slots", &mut slots, &mut fonts);

        let values: Vec<i32> = slots.iter().map(|slot| slot.value).collect();
        assert_eq!(values, vec![1, 9, 3, 4]);
    }

    #[test]
    fn test_read_map_merges_into_existing_entries() {
        let obj = object(json!({
            "Groups": {
                "Existing": {},
                "New": {"Value": 5},
                "Broken": 12,
            },
        }));
        let mut fonts = FontCatalog::default();

        let mut groups = IndexMap::new();
        groups.insert("Existing".to_string(), Slot { value: 3 });
        read_map(&obj, "Groups", &mut groups, &mut fonts);

        assert_eq!(groups["Existing"].value, 3);
        assert_eq!(groups["New"].value, 5);
        assert!(!groups.contains_key("Broken"));
    }

    #[test]
    fn test_read_record_requires_object() {
        let obj = object(json!({ "Slot": [1, 2], "Other": {"Value": 8} }));
        let mut fonts = FontCatalog::default();

        let mut slot = Slot { value: 2 };
        read_record(&obj, "Slot", &mut slot, &mut fonts);
        assert_eq!(slot.value, 2);

        read_record(&obj, "Other", &mut slot, &mut fonts);
        assert_eq!(slot.value, 8);
    }
}
