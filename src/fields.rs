//! Path-tracked field access over a decoded JSON object.
//!
//! Every lookup knows where it is in the document, so a missing or
//! mistyped key is reported with its full path (`sessionState.intent.name`,
//! `interpretations[2].nluConfidence`) instead of a bare key name.
//!
//! Required keys fail on absence or on a wrong type. Optional keys never
//! fail: `null` or a wrong type falls back to the documented default, the
//! latter with a warning naming the path.

use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{LexError, LexResult};

/// Rendered path of the document root.
pub const ROOT_PATH: &str = "$";

#[derive(Debug, Clone)]
pub struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    path: String,
}

impl<'a> FieldReader<'a> {
    /// Reader over the document root. The root itself must be an object.
    pub fn root(value: &'a Value) -> LexResult<Self> {
        Self::at(value, String::new())
    }

    fn at(value: &'a Value, path: String) -> LexResult<Self> {
        match value {
            Value::Object(object) => Ok(Self { object, path }),
            _ => Err(wrong_type(&path, "object")),
        }
    }

    /// Path of this object within the document (`$` for the root).
    pub fn path(&self) -> &str {
        if self.path.is_empty() {
            ROOT_PATH
        } else {
            self.path.as_str()
        }
    }

    fn child_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    fn optional(&self, key: &str) -> Option<&'a Value> {
        self.object.get(key).filter(|v| !v.is_null())
    }

    pub fn required(&self, key: &str) -> LexResult<&'a Value> {
        self.object.get(key).ok_or_else(|| LexError::MissingField {
            path: self.child_path(key),
        })
    }

    pub fn required_str(&self, key: &str) -> LexResult<String> {
        match self.required(key)? {
            Value::String(s) => Ok(s.clone()),
            _ => Err(wrong_type(&self.child_path(key), "string")),
        }
    }

    pub fn required_object(&self, key: &str) -> LexResult<FieldReader<'a>> {
        let value = self.required(key)?;
        Self::at(value, self.child_path(key))
    }

    /// Required array whose elements are all objects, in document order.
    pub fn required_objects(&self, key: &str) -> LexResult<Vec<FieldReader<'a>>> {
        let path = self.child_path(key);
        let items = match self.required(key)? {
            Value::Array(items) => items,
            _ => return Err(wrong_type(&path, "array")),
        };

        items
            .iter()
            .enumerate()
            .map(|(i, item)| Self::at(item, format!("{}[{}]", path, i)))
            .collect()
    }

    fn mistyped(&self, key: &str, expected: &'static str) {
        warn!(path = %self.child_path(key), expected, "ignoring mistyped optional field");
    }

    pub fn optional_str(&self, key: &str) -> Option<String> {
        match self.optional(key)? {
            Value::String(s) => Some(s.clone()),
            _ => {
                self.mistyped(key, "string");
                None
            }
        }
    }

    pub fn optional_f64(&self, key: &str) -> Option<f64> {
        match self.optional(key)?.as_f64() {
            Some(n) => Some(n),
            None => {
                self.mistyped(key, "number");
                None
            }
        }
    }

    /// Optional object, copied out as-is. Defaults to an empty map.
    pub fn optional_map(&self, key: &str) -> Map<String, Value> {
        match self.optional(key) {
            None => Map::new(),
            Some(Value::Object(object)) => object.clone(),
            Some(_) => {
                self.mistyped(key, "object");
                Map::new()
            }
        }
    }

    /// Optional array, copied out as-is. Defaults to an empty vec.
    pub fn optional_list(&self, key: &str) -> Vec<Value> {
        match self.optional(key) {
            None => Vec::new(),
            Some(Value::Array(items)) => items.clone(),
            Some(_) => {
                self.mistyped(key, "array");
                Vec::new()
            }
        }
    }

    /// Optional object of string values. Defaults to an empty map; entries
    /// whose value is not a string are dropped.
    pub fn optional_string_map(&self, key: &str) -> HashMap<String, String> {
        let object = match self.optional(key) {
            None => return HashMap::new(),
            Some(Value::Object(object)) => object,
            Some(_) => {
                self.mistyped(key, "object");
                return HashMap::new();
            }
        };

        object
            .iter()
            .filter_map(|(k, v)| match v {
                Value::String(s) => Some((k.clone(), s.clone())),
                _ => {
                    warn!(
                        path = %format!("{}.{}", self.child_path(key), k),
                        expected = "string",
                        "ignoring mistyped optional field"
                    );
                    None
                }
            })
            .collect()
    }
}

fn wrong_type(path: &str, expected: &'static str) -> LexError {
    let path = if path.is_empty() { ROOT_PATH } else { path };
    LexError::WrongType {
        path: path.to_string(),
        expected,
    }
}
