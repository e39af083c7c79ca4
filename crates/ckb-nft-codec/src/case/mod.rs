//! Recursive object key renaming.
//!
//! Works directly on [`serde_json::Value`]: objects get their keys renamed,
//! arrays keep their order, scalars pass through untouched. Typed values go
//! through [`to_camel_case`], which converts to and from `Value` without a
//! text round trip.

use heck::{ToLowerCamelCase, ToUpperCamelCase};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::error;

use crate::error::CaseError;

/// Options for [`camelize_keys`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CamelCaseOptions {
    /// Rename keys of nested objects, including objects inside arrays.
    pub deep: bool,

    /// Produce `FooBar` instead of `fooBar`.
    pub pascal_case: bool,

    /// Keys that are kept verbatim.
    pub exclude: Vec<String>,

    /// Dot-separated key paths whose children are kept verbatim.
    ///
    /// Paths are built from the original keys; array indices are not part of
    /// a path. The key at the path itself is still renamed. Only consulted
    /// when `deep` is set.
    pub stop_paths: Vec<String>,
}

impl CamelCaseOptions {
    /// Creates options that rename top-level keys only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that rename keys at every depth.
    pub fn deep() -> Self {
        Self {
            deep: true,
            ..Self::default()
        }
    }

    pub fn with_pascal_case(mut self, pascal_case: bool) -> Self {
        self.pascal_case = pascal_case;
        self
    }

    pub fn with_exclude<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.exclude.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn with_stop_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.stop_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    fn is_excluded(&self, key: &str) -> bool {
        self.exclude.iter().any(|k| k == key)
    }

    fn is_stop_path(&self, path: &str) -> bool {
        self.stop_paths.iter().any(|p| p == path)
    }
}

/// Converts a single key to camelCase (or PascalCase).
///
/// Separators (`_`, `-`, spaces) are dropped and runs of capitals are
/// lowercased: `snake_case_key` and `SNAKE_CASE_KEY` both become
/// `snakeCaseKey`.
pub fn camel_case_key(key: &str, pascal_case: bool) -> String {
    if pascal_case {
        key.to_upper_camel_case()
    } else {
        key.to_lower_camel_case()
    }
}

/// Renames the object keys of `value`.
///
/// A top-level array has each of its object elements renamed. When two keys
/// map to the same name the later one wins.
pub fn camelize_keys(value: Value, options: &CamelCaseOptions) -> Value {
    match value {
        Value::Object(map) => Value::Object(rename_object(map, options, None)),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| match item {
                    Value::Object(map) => Value::Object(rename_object(map, options, None)),
                    other => other,
                })
                .collect(),
        ),
        other => other,
    }
}

fn rename_object(
    map: Map<String, Value>,
    options: &CamelCaseOptions,
    parent_path: Option<&str>,
) -> Map<String, Value> {
    let mut out = Map::with_capacity(map.len());
    for (key, value) in map {
        let value = if options.deep {
            let path = match parent_path {
                Some(parent) => format!("{parent}.{key}"),
                None => key.clone(),
            };
            if options.is_stop_path(&path) {
                value
            } else {
                descend(value, options, &path)
            }
        } else {
            value
        };

        let key = if options.is_excluded(&key) {
            key
        } else {
            camel_case_key(&key, options.pascal_case)
        };
        out.insert(key, value);
    }
    out
}

fn descend(value: Value, options: &CamelCaseOptions, path: &str) -> Value {
    match value {
        Value::Object(map) => Value::Object(rename_object(map, options, Some(path))),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| descend(item, options, path))
                .collect(),
        ),
        other => other,
    }
}

/// Renames every key of `object` to camelCase, at every depth, and reads the
/// result back as `T`.
///
/// Failures are logged and returned; nothing panics.
pub fn to_camel_case<T, S>(object: &S) -> Result<T, CaseError>
where
    T: DeserializeOwned,
    S: Serialize + ?Sized,
{
    to_camel_case_with(object, &CamelCaseOptions::deep())
}

/// Like [`to_camel_case`] with explicit options.
pub fn to_camel_case_with<T, S>(object: &S, options: &CamelCaseOptions) -> Result<T, CaseError>
where
    T: DeserializeOwned,
    S: Serialize + ?Sized,
{
    let value = serde_json::to_value(object).map_err(|e| {
        error!(error = %e, "to camel case: value is not representable as JSON");
        CaseError::Serialize(e.to_string())
    })?;

    let renamed = camelize_keys(value, options);

    serde_json::from_value(renamed).map_err(|e| {
        error!(error = %e, "to camel case: renamed value does not fit the target type");
        CaseError::Deserialize(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde::ser::Error as _;
    use serde_json::json;

    #[test]
    fn test_camel_case_key() {
        assert_eq!(camel_case_key("snake_case_key", false), "snakeCaseKey");
        assert_eq!(camel_case_key("SNAKE_CASE_KEY", false), "snakeCaseKey");
        assert_eq!(camel_case_key("kebab-key", false), "kebabKey");
        assert_eq!(camel_case_key("alreadyCamel", false), "alreadyCamel");
        assert_eq!(camel_case_key("snake_case_key", true), "SnakeCaseKey");
    }

    #[test]
    fn test_nested_arrays_and_objects() {
        let input = json!({ "snake_case_key": [{ "inner_key": 1 }] });
        let output: Value = to_camel_case(&input).unwrap();
        assert_eq!(output, json!({ "snakeCaseKey": [{ "innerKey": 1 }] }));
    }

    #[test]
    fn test_values_are_preserved() {
        let input = json!({
            "token_id": 18446744073709551615u64,
            "is_issued": true,
            "class_name": "snake_case_value",
            "extra_info": null,
            "ratio_value": 0.5,
            "nested_list": [[{ "deep_key": [1, 2, 3] }], "plain_string"],
        });
        let output: Value = to_camel_case(&input).unwrap();
        assert_eq!(
            output,
            json!({
                "tokenId": 18446744073709551615u64,
                "isIssued": true,
                "className": "snake_case_value",
                "extraInfo": null,
                "ratioValue": 0.5,
                "nestedList": [[{ "deepKey": [1, 2, 3] }], "plain_string"],
            })
        );
    }

    #[test]
    fn test_shallow_by_default() {
        let input = json!({ "outer_key": { "inner_key": 1 } });
        let output = camelize_keys(input, &CamelCaseOptions::new());
        assert_eq!(output, json!({ "outerKey": { "inner_key": 1 } }));
    }

    #[test]
    fn test_top_level_array() {
        let input = json!([{ "first_key": { "inner_key": 1 } }, 7, "some_text"]);
        let shallow = camelize_keys(input.clone(), &CamelCaseOptions::new());
        assert_eq!(shallow, json!([{ "firstKey": { "inner_key": 1 } }, 7, "some_text"]));

        let deep = camelize_keys(input, &CamelCaseOptions::deep());
        assert_eq!(deep, json!([{ "firstKey": { "innerKey": 1 } }, 7, "some_text"]));
    }

    #[test]
    fn test_exclude_and_pascal_case() {
        let options = CamelCaseOptions::deep()
            .with_pascal_case(true)
            .with_exclude(["keep_me"]);
        let input = json!({ "keep_me": { "inner_key": 1 }, "rename_me": 2 });
        let output = camelize_keys(input, &options);
        assert_eq!(output, json!({ "keep_me": { "InnerKey": 1 }, "RenameMe": 2 }));
    }

    #[test]
    fn test_stop_paths() {
        let options = CamelCaseOptions::deep().with_stop_paths(["outer_key.raw_data"]);
        let input = json!({
            "outer_key": {
                "raw_data": { "keep_this": 1 },
                "other_data": { "rename_this": 2 },
            }
        });
        let output = camelize_keys(input, &options);
        assert_eq!(
            output,
            json!({
                "outerKey": {
                    "rawData": { "keep_this": 1 },
                    "otherData": { "renameThis": 2 },
                }
            })
        );
    }

    #[test]
    fn test_colliding_keys_later_wins() {
        let input = json!({ "foo_bar": 1, "fooBar": 2 });
        let output = camelize_keys(input, &CamelCaseOptions::new());
        assert_eq!(output, json!({ "fooBar": 2 }));
    }

    #[test]
    fn test_typed_roundtrip() {
        #[derive(Serialize)]
        struct ClassInfo {
            total_supply: u32,
            issued_count: u32,
        }

        #[derive(Serialize)]
        struct TokenRecord {
            token_id: u64,
            class_info: ClassInfo,
        }

        #[derive(Debug, PartialEq, Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct ClassInfoView {
            total_supply: u32,
            issued_count: u32,
        }

        #[derive(Debug, PartialEq, Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct TokenRecordView {
            token_id: u64,
            class_info: ClassInfoView,
        }

        let record = TokenRecord {
            token_id: u64::MAX,
            class_info: ClassInfo {
                total_supply: 100,
                issued_count: 3,
            },
        };
        let view: TokenRecordView = to_camel_case(&record).unwrap();
        assert_eq!(
            view,
            TokenRecordView {
                token_id: u64::MAX,
                class_info: ClassInfoView {
                    total_supply: 100,
                    issued_count: 3,
                },
            }
        );
    }

    #[test]
    fn test_serialize_failure_is_an_error() {
        struct Unrepresentable;

        impl Serialize for Unrepresentable {
            fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
                Err(S::Error::custom("cannot serialize"))
            }
        }

        let result: Result<Value, _> = to_camel_case(&Unrepresentable);
        assert!(matches!(result, Err(CaseError::Serialize(ref msg)) if msg.contains("cannot serialize")));
    }

    #[test]
    fn test_non_string_map_keys_are_an_error() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(vec![1u8, 2], "value");
        let result: Result<Value, _> = to_camel_case(&map);
        assert!(matches!(result, Err(CaseError::Serialize(_))));
    }

    #[test]
    fn test_target_mismatch_is_an_error() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Expected {
            #[serde(rename = "userName")]
            user_name: String,
        }

        let result: Result<Expected, _> = to_camel_case(&json!({ "user_name": 5 }));
        assert!(matches!(result, Err(CaseError::Deserialize(_))));
    }
}
