//! Default-suppressing writers.
//!
//! Fields equal to their baseline are left out of the document. Container fields that
//! the format always carries (fixed-position arrays, name-keyed collections) go through
//! the `put_*` functions instead and rely on per-element suppression; whatever ends up
//! empty is removed afterwards by [`prune`](super::prune).

use super::{Object, Record};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Write a scalar or scalar array when it differs from `baseline`.
pub fn write<T: Serialize + PartialEq>(out: &mut Object, key: &str, value: &T, baseline: &T) {
    if value == baseline {
        return;
    }

    match serde_json::to_value(value) {
        Ok(mut value) => {
            narrow_floats(&mut value);
            out.insert(key.to_string(), value);
        }
        Err(e) => tracing::warn!("Skipping field {}: {}", key, e),
    }
}

/// Rewrite every float in `value` as the shortest decimal of its `f32` value.
///
/// Settings floats are `f32`; serde widens them to `f64`, which would store `1.7` as
/// `1.7000000476837158`.
pub(crate) fn narrow_floats(value: &mut Value) {
    match value {
        Value::Number(n) if n.is_f64() => {
            let shortest = n
                .as_f64()
                .and_then(|f| (f as f32).to_string().parse::<f64>().ok())
                .and_then(serde_json::Number::from_f64);
            if let Some(shortest) = shortest {
                *n = shortest;
            }
        }
        Value::Array(items) => items.iter_mut().for_each(narrow_floats),
        Value::Object(map) => map.values_mut().for_each(narrow_floats),
        _ => {}
    }
}

/// Encode a record against `baseline` into a standalone object.
pub fn encode_record<R: Record>(value: &R, baseline: &R) -> Value {
    let mut out = Object::new();
    value.encode(&mut out, baseline);
    Value::Object(out)
}

/// Write a nested record when it differs from `baseline`.
pub fn write_record<R: Record>(out: &mut Object, key: &str, value: &R, baseline: &R) {
    if value != baseline {
        out.insert(key.to_string(), encode_record(value, baseline));
    }
}

/// Write a record array when any element differs from `baseline`.
pub fn write_records<R: Record, const N: usize>(
    out: &mut Object,
    key: &str,
    values: &[R; N],
    baseline: &[R; N],
) {
    if values != baseline {
        let items = values
            .iter()
            .zip(baseline)
            .map(|(value, baseline)| encode_record(value, baseline))
            .collect();
        out.insert(key.to_string(), Value::Array(items));
    }
}

/// Always write a record array, each element encoded against its default.
pub fn put_records<R: Record, const N: usize>(out: &mut Object, key: &str, values: &[R; N]) {
    let baseline = R::default();
    let items = values
        .iter()
        .map(|value| encode_record(value, &baseline))
        .collect();
    out.insert(key.to_string(), Value::Array(items));
}

/// Always write a name-keyed collection, each entry encoded against its default.
pub fn put_map<R: Record>(out: &mut Object, key: &str, values: &IndexMap<String, R>) {
    let baseline = R::default();
    let entries = values
        .iter()
        .map(|(name, value)| (name.clone(), encode_record(value, &baseline)))
        .collect();
    out.insert(key.to_string(), Value::Object(entries));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::read;
    use crate::fonts::FontCatalog;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq)]
    struct Dial {
        level: i32,
        gain: f32,
    }

    impl Default for Dial {
        fn default() -> Self {
            Self { level: 1, gain: 0.5 }
        }
    }

    impl Record for Dial {
        fn decode(&mut self, obj: &Object, _fonts: &mut FontCatalog) {
            read(obj, "Level", &mut self.level);
            read(obj, "Gain", &mut self.gain);
        }

        fn encode(&self, out: &mut Object, baseline: &Self) {
            write(out, "Level", &self.level, &baseline.level);
            write(out, "Gain", &self.gain, &baseline.gain);
        }
    }

    #[test]
    fn test_write_suppresses_baseline_values() {
        let mut out = Object::new();
        write(&mut out, "Same", &3, &3);
        write(&mut out, "Changed", &4, &3);
        write(&mut out, "Color", &[1.0f32, 0.5, 1.0], &[1.0f32; 3]);

        assert_eq!(Value::Object(out), json!({"Changed": 4, "Color": [1.0, 0.5, 1.0]}));
    }

    #[test]
    fn test_write_keeps_short_float_form() {
        let mut out = Object::new();
        write(&mut out, "Aspect Ratio", &1.7f32, &0.0f32);
        write(&mut out, "Fov", &0.1f32, &0.0f32);
        write(&mut out, "Whole", &5.0f32, &0.0f32);

        let text = serde_json::to_string(&Value::Object(out)).unwrap();
        assert_eq!(text, r#"{"Aspect Ratio":1.7,"Fov":0.1,"Whole":5.0}"#);

        let parsed: Value = serde_json::from_str(&text).unwrap();
        let mut ratio = 0.0f32;
        read(parsed.as_object().unwrap(), "Aspect Ratio", &mut ratio);
        assert_eq!(ratio, 1.7f32);
    }

    #[test]
    fn test_write_record_compares_against_given_baseline() {
        let baseline = Dial { level: 5, gain: 0.5 };
        let value = Dial { level: 5, gain: 0.75 };

        let mut out = Object::new();
        write_record(&mut out, "Dial", &value, &baseline);
        write_record(&mut out, "Untouched", &baseline, &baseline);

        assert_eq!(Value::Object(out), json!({"Dial": {"Gain": 0.75}}));
    }

    #[test]
    fn test_put_records_keeps_every_slot() {
        let values = [
            Dial::default(),
            Dial { level: 2, gain: 0.5 },
            Dial::default(),
        ];

        let mut out = Object::new();
        put_records(&mut out, "Dials", &values);

        assert_eq!(Value::Object(out), json!({"Dials": [{}, {"Level": 2}, {}]}));
    }

    #[test]
    fn test_write_records_only_when_changed() {
        let defaults: [Dial; 2] = Default::default();

        let mut out = Object::new();
        write_records(&mut out, "Dials", &defaults, &defaults);
        assert!(out.is_empty());

        let changed = [Dial::default(), Dial { level: 1, gain: 1.0 }];
        write_records(&mut out, "Dials", &changed, &defaults);
        assert_eq!(Value::Object(out), json!({"Dials": [{}, {"Gain": 1.0}]}));
    }

    #[test]
    fn test_put_map_emits_every_entry() {
        let mut values = IndexMap::new();
        values.insert("Plain".to_string(), Dial::default());
        values.insert("Loud".to_string(), Dial { level: 9, gain: 0.5 });

        let mut out = Object::new();
        put_map(&mut out, "Dials", &values);

        assert_eq!(
            Value::Object(out),
            json!({"Dials": {"Plain": {}, "Loud": {"Level": 9}}})
        );
    }
}
