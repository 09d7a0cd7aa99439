use crate::{
    types::Float64,
    value::Value,
};

// Module: value::json
// Responsibility: lossless-enough mapping between decoded JSON and `Value`.
// Numbers prefer `Int`, then `Uint`, then `Float`; JSON cannot carry
// non-finite floats, so the float arm never drops data in practice.

impl Value {
    #[must_use]
    pub fn from_json(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Bool(flag),
            serde_json::Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    Self::Int(int)
                } else if let Some(uint) = number.as_u64() {
                    Self::Uint(uint)
                } else {
                    number
                        .as_f64()
                        .and_then(|float| Float64::try_new(float).ok())
                        .map_or(Self::Null, Self::Float)
                }
            }
            serde_json::Value::String(text) => Self::Text(text),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from_json).collect())
            }
            serde_json::Value::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Self::from_json(value)))
                    .collect(),
            ),
        }
    }

    #[must_use]
    pub fn into_json(self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(flag) => serde_json::Value::Bool(flag),
            Self::Int(int) => serde_json::Value::from(int),
            Self::Uint(uint) => serde_json::Value::from(uint),
            Self::Float(float) => serde_json::Number::from_f64(float.get())
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Self::Text(text) => serde_json::Value::String(text),
            Self::List(items) => {
                serde_json::Value::Array(items.into_iter().map(Self::into_json).collect())
            }
            Self::Map(map) => serde_json::Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, value.into_json()))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        Self::from_json(json)
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        value.into_json()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueMap;
    use serde_json::json;

    #[test]
    fn test_from_json_maps_numbers_by_width() {
        assert_eq!(Value::from_json(json!(5)), Value::Int(5));
        assert_eq!(Value::from_json(json!(-5)), Value::Int(-5));
        assert_eq!(
            Value::from_json(json!(u64::MAX)),
            Value::Uint(u64::MAX),
            "integers above i64::MAX stay unsigned"
        );
        assert_eq!(
            Value::from_json(json!(1.5)),
            Value::Float(Float64::try_new(1.5).unwrap())
        );
    }

    #[test]
    fn test_from_json_recurses_into_containers() {
        let value = Value::from_json(json!({
            "name": "app1",
            "tags": ["a", "b"],
            "nested": { "ok": true }
        }));

        let map = value.as_map().unwrap();
        assert_eq!(map.get("name"), Some(&Value::Text("app1".to_string())));
        assert_eq!(
            map.get("tags"),
            Some(&Value::List(vec![Value::from("a"), Value::from("b")]))
        );
        let nested = map.get("nested").unwrap().as_map().unwrap();
        assert_eq!(nested.get("ok"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_json_round_trip() {
        let json = json!({
            "email": "a@example.com",
            "count": 3,
            "ratio": 0.25,
            "missing": null,
            "apps": ["one", "two"]
        });

        assert_eq!(Value::from_json(json.clone()).into_json(), json);
    }

    #[test]
    fn test_value_map_from_object_pairs() {
        let map: ValueMap = vec![("k".to_string(), Value::from(1_i64))]
            .into_iter()
            .collect();
        assert_eq!(Value::Map(map).into_json(), json!({ "k": 1 }));
    }
}
